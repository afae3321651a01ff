//! Minimizable trait for truth-table-like inputs
//!
//! This module provides the public [`Minimizable`] trait, a uniform entry point for running
//! the minimizer with default or custom configuration.

use super::{Minimization, MinimizationError, MinimizerConfig};
use crate::table::TruthTable;

/// Types that can be minimized into a [`Minimization`]
///
/// All methods take `&self`; the input is never modified.
///
/// # Examples
///
/// ```
/// use kmap_logic::{Minimizable, TruthTable, Value};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let table = TruthTable::from_values(2, &[Value::True, Value::False, Value::False, Value::True])?;
/// let result = table.minimize()?;
/// assert_eq!(result.sop(), "~A & ~B + A & B");
/// assert_eq!(result.pos().unwrap(), "(A + ~B) & (~A + B)");
/// # Ok(())
/// # }
/// ```
pub trait Minimizable {
    /// Minimize with essential-prime extraction and greedy completion
    fn minimize(&self) -> Result<Minimization, MinimizationError> {
        self.minimize_with_config(&MinimizerConfig::default())
    }

    /// Minimize with the exact covering search
    fn minimize_exact(&self) -> Result<Minimization, MinimizationError> {
        self.minimize_with_config(&MinimizerConfig::exact())
    }

    /// Minimize with a custom configuration
    ///
    /// This is the method implementations must provide.
    fn minimize_with_config(
        &self,
        config: &MinimizerConfig,
    ) -> Result<Minimization, MinimizationError>;
}

impl Minimizable for TruthTable {
    fn minimize_with_config(
        &self,
        config: &MinimizerConfig,
    ) -> Result<Minimization, MinimizationError> {
        Minimization::new(self, config)
    }
}

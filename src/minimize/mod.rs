//! Quine-McCluskey minimization of truth tables
//!
//! The pipeline is:
//!
//! 1. [`prime_implicants`] merges the minterms and don't-cares into prime implicants.
//! 2. [`CoverChart`] selects essential primes and completes a cover of the minterms.
//! 3. The same two steps run over the zero-set to obtain the product-of-sums form.
//!
//! Everything is synchronous and side-effect free: a [`Minimization`] is computed from an
//! immutable [`TruthTable`] and owns its result.

mod chart;
mod config;
mod error;
mod minimizable;
mod primes;

pub use chart::CoverChart;
pub use config::{CoverStrategy, MinimizerConfig};
pub use error::MinimizationError;
pub use minimizable::Minimizable;
pub use primes::prime_implicants;

use crate::implicant::{Implicant, ImplicantSet};
use crate::render::{self, Notation};
use crate::table::{TruthTable, Value};
use log::debug;
use std::sync::Arc;

/// Minimal cover of `required` terms, with `dont_cares` available for merging
///
/// Don't-cares loosen prime generation but are never required to be covered. Returns the
/// selected implicants in generation order.
///
/// # Examples
///
/// ```
/// use kmap_logic::minimize::{minimize_terms, MinimizerConfig};
///
/// # fn main() -> Result<(), kmap_logic::MinimizationError> {
/// // m(3) + d(1) over two variables reduces to the single literal on B
/// let cover = minimize_terms(&[3], &[1], 2, &MinimizerConfig::default())?;
/// assert_eq!(cover.len(), 1);
/// assert_eq!(cover[0].to_string(), "-1");
/// # Ok(())
/// # }
/// ```
pub fn minimize_terms(
    required: &[u32],
    dont_cares: &[u32],
    num_vars: usize,
    config: &MinimizerConfig,
) -> Result<Vec<Implicant>, MinimizationError> {
    let (primes, cover) = solve(required, dont_cares, num_vars, config)?;
    Ok(cover.into_iter().map(|p| primes.as_slice()[p].clone()).collect())
}

fn solve(
    required: &[u32],
    dont_cares: &[u32],
    num_vars: usize,
    config: &MinimizerConfig,
) -> Result<(ImplicantSet, Vec<usize>), MinimizationError> {
    let present: Vec<u32> = required.iter().chain(dont_cares.iter()).copied().collect();
    let primes = prime_implicants(&present, num_vars);
    let chart = CoverChart::new(primes.as_slice(), required);
    let cover = chart.solve(config)?;
    Ok((primes, cover))
}

/// Result of minimizing a truth table
///
/// Holds the sum-of-products cover (over the minterms) and, unless disabled in
/// [`MinimizerConfig`], the product-of-sums cover (over the zero-set). Don't-cares are shared
/// by both derivations.
#[derive(Debug, Clone)]
pub struct Minimization {
    table: TruthTable,
    primes: ImplicantSet,
    sop: Vec<Implicant>,
    pos: Option<Vec<Implicant>>,
}

impl Minimization {
    /// Minimize a table
    pub fn new(table: &TruthTable, config: &MinimizerConfig) -> Result<Self, MinimizationError> {
        let n = table.num_vars();
        let minterms = table.minterms();
        let dont_cares = table.dont_cares();

        let (primes, selected) = solve(&minterms, &dont_cares, n, config)?;
        let sop: Vec<Implicant> = selected
            .iter()
            .map(|&p| primes.as_slice()[p].clone())
            .collect();
        debug!(
            "SOP: {} minterms, {} don't-cares -> {} primes, {} selected",
            minterms.len(),
            dont_cares.len(),
            primes.len(),
            sop.len()
        );

        let pos = if config.pos {
            let zeros = table.zeros();
            let cover = minimize_terms(&zeros, &dont_cares, n, config)?;
            debug!("POS: {} zeros -> {} clauses", zeros.len(), cover.len());
            Some(cover)
        } else {
            None
        };

        Ok(Minimization {
            table: table.clone(),
            primes,
            sop,
            pos,
        })
    }

    /// The table that was minimized
    pub fn table(&self) -> &TruthTable {
        &self.table
    }

    /// Variable labels, most significant first
    pub fn labels(&self) -> &[Arc<str>] {
        self.table.labels()
    }

    /// Number of variables
    pub fn num_vars(&self) -> usize {
        self.table.num_vars()
    }

    /// All prime implicants of the minterms plus don't-cares, in generation order
    pub fn primes(&self) -> &ImplicantSet {
        &self.primes
    }

    /// The selected sum-of-products cover
    pub fn sop_cover(&self) -> &[Implicant] {
        &self.sop
    }

    /// The selected cover of the zero-set, if the POS form was derived
    pub fn pos_cover(&self) -> Option<&[Implicant]> {
        self.pos.as_deref()
    }

    /// Human-readable sum of products, e.g. `~A & B + C`
    pub fn sop(&self) -> String {
        self.sop_with(&Notation::HUMAN)
    }

    /// C-like sum of products, e.g. `(!A && B) || C`
    pub fn sop_code(&self) -> String {
        self.sop_with(&Notation::CODE)
    }

    /// Sum of products in an arbitrary notation
    pub fn sop_with(&self, notation: &Notation) -> String {
        render::sop(&self.sop, self.labels(), notation)
    }

    /// Human-readable product of sums, e.g. `(A + ~B) & (C)`
    pub fn pos(&self) -> Option<String> {
        self.pos_with(&Notation::HUMAN)
    }

    /// Product of sums in an arbitrary notation
    pub fn pos_with(&self, notation: &Notation) -> Option<String> {
        self.pos
            .as_ref()
            .map(|cover| render::pos(cover, self.labels(), notation))
    }

    /// Value of the minimized SOP function at `index`
    pub fn evaluate(&self, index: u32) -> bool {
        self.sop.iter().any(|imp| imp.covers(index))
    }

    /// Value of the minimized POS function at `index`, if derived
    pub fn evaluate_pos(&self, index: u32) -> Option<bool> {
        self.pos
            .as_ref()
            .map(|cover| !cover.iter().any(|imp| imp.covers(index)))
    }

    /// Output bit a checker should expect at `index`
    ///
    /// Specified rows expect their assigned value; don't-care rows expect whatever the
    /// minimized SOP function chose.
    pub fn expected(&self, index: u32) -> bool {
        match self.table.get(index as usize) {
            Value::True => true,
            Value::False => false,
            Value::DontCare => self.evaluate(index),
        }
    }

    /// Specified rows where the minimized SOP disagrees with the table
    ///
    /// Always empty for a correct minimization.
    pub fn mismatches(&self) -> Vec<u32> {
        self.table
            .iter()
            .filter_map(|(index, value)| match value.as_bool() {
                Some(bit) if bit != self.evaluate(index) => Some(index),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests;

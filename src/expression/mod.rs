//! Boolean expressions over named variables
//!
//! [`BoolExpr`] is a small immutable expression tree. It exists so that rendered SOP/POS text
//! can be parsed back and checked against the truth table it was minimized from, and so that
//! expressions can be built programmatically from a cover.
//!
//! # Syntax
//!
//! | Operator | Spellings           |
//! |----------|---------------------|
//! | OR       | `+`, `\|`, `\|\|`   |
//! | AND      | `*`, `&`, `&&`      |
//! | NOT      | `~`, `!` (prefix)   |
//!
//! NOT binds tightest, then AND, then OR. Parentheses group, and `0`/`1` (or
//! `false`/`true`) are constants. Every human, C-like and Verilog rendering produced by
//! [`crate::render`] is accepted.
//!
//! ```
//! use kmap_logic::BoolExpr;
//!
//! # fn main() -> Result<(), kmap_logic::ParseBoolExprError> {
//! let expr = BoolExpr::parse("(!A && B) || C")?;
//! assert_eq!(expr.to_string(), "~A * B + C");
//! # Ok(())
//! # }
//! ```

mod conversions;
mod display;
pub mod error;
mod eval;
mod parser;

pub use error::{ExpressionParseError, ParseBoolExprError};

use std::collections::BTreeSet;
use std::sync::Arc;

/// An immutable boolean expression
///
/// Cloning is cheap; subtrees are shared.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BoolExpr {
    inner: Arc<BoolExprInner>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum BoolExprInner {
    Variable(Arc<str>),
    And(BoolExpr, BoolExpr),
    Or(BoolExpr, BoolExpr),
    Not(BoolExpr),
    Constant(bool),
}

impl BoolExpr {
    fn from_inner(inner: BoolExprInner) -> Self {
        BoolExpr {
            inner: Arc::new(inner),
        }
    }

    /// A named variable
    pub fn variable(name: &str) -> Self {
        Self::from_inner(BoolExprInner::Variable(Arc::from(name)))
    }

    /// The constant `value`
    pub fn constant(value: bool) -> Self {
        Self::from_inner(BoolExprInner::Constant(value))
    }

    /// Logical AND
    pub fn and(&self, other: &BoolExpr) -> Self {
        Self::from_inner(BoolExprInner::And(self.clone(), other.clone()))
    }

    /// Logical OR
    pub fn or(&self, other: &BoolExpr) -> Self {
        Self::from_inner(BoolExprInner::Or(self.clone(), other.clone()))
    }

    /// Logical NOT
    #[allow(clippy::should_implement_trait)]
    pub fn not(&self) -> Self {
        Self::from_inner(BoolExprInner::Not(self.clone()))
    }

    /// Whether this expression is a bare constant
    pub fn as_constant(&self) -> Option<bool> {
        match self.inner.as_ref() {
            BoolExprInner::Constant(value) => Some(*value),
            _ => None,
        }
    }

    /// Variable names appearing in this expression, sorted
    pub fn collect_variables(&self) -> BTreeSet<Arc<str>> {
        let mut vars = BTreeSet::new();
        self.collect_into(&mut vars);
        vars
    }

    fn collect_into(&self, vars: &mut BTreeSet<Arc<str>>) {
        match self.inner.as_ref() {
            BoolExprInner::Variable(name) => {
                vars.insert(Arc::clone(name));
            }
            BoolExprInner::And(l, r) | BoolExprInner::Or(l, r) => {
                l.collect_into(vars);
                r.collect_into(vars);
            }
            BoolExprInner::Not(e) => e.collect_into(vars),
            BoolExprInner::Constant(_) => {}
        }
    }
}

#[cfg(test)]
mod tests;

//! Display and Debug formatting for boolean expressions

use super::{BoolExpr, BoolExprInner};
use std::fmt;

/// Enclosing operator, used to decide where parentheses are needed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpContext {
    None,
    And,
    Or,
    Not,
}

impl BoolExpr {
    fn fmt_with_context(&self, f: &mut fmt::Formatter<'_>, ctx: OpContext) -> fmt::Result {
        match self.inner.as_ref() {
            BoolExprInner::Variable(name) => write!(f, "{}", name),
            BoolExprInner::Constant(value) => write!(f, "{}", if *value { "1" } else { "0" }),

            BoolExprInner::And(left, right) => {
                let parens = ctx == OpContext::Not;
                if parens {
                    write!(f, "(")?;
                }
                left.fmt_with_context(f, OpContext::And)?;
                write!(f, " * ")?;
                right.fmt_with_context(f, OpContext::And)?;
                if parens {
                    write!(f, ")")?;
                }
                Ok(())
            }

            BoolExprInner::Or(left, right) => {
                let parens = ctx == OpContext::And || ctx == OpContext::Not;
                if parens {
                    write!(f, "(")?;
                }
                left.fmt_with_context(f, OpContext::Or)?;
                write!(f, " + ")?;
                right.fmt_with_context(f, OpContext::Or)?;
                if parens {
                    write!(f, ")")?;
                }
                Ok(())
            }

            BoolExprInner::Not(inner) => {
                write!(f, "~")?;
                inner.fmt_with_context(f, OpContext::Not)
            }
        }
    }
}

/// Formats with `*`, `+` and `~` and only the parentheses precedence requires
///
/// ```
/// use kmap_logic::BoolExpr;
///
/// let expr = BoolExpr::parse("!(A || B) && C").unwrap();
/// assert_eq!(format!("{:?}", expr), "~(A + B) * C");
/// ```
impl fmt::Debug for BoolExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with_context(f, OpContext::None)
    }
}

impl fmt::Display for BoolExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

//! Error types for minimization

use std::fmt;
use std::io;

/// Errors that can occur during minimization
///
/// Minimization of a well-formed table cannot fail. The only error is an internal consistency
/// failure, which is reported instead of returning a cover that silently misses minterms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MinimizationError {
    /// Some required minterms are covered by no prime implicant
    UnsolvableCover {
        /// The minterms left uncovered
        uncovered: Vec<u32>,
    },
}

impl fmt::Display for MinimizationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinimizationError::UnsolvableCover { uncovered } => write!(
                f,
                "No prime implicant covers minterm(s) {:?}; the prime set is inconsistent \
                 with the required terms",
                uncovered
            ),
        }
    }
}

impl std::error::Error for MinimizationError {}

impl From<MinimizationError> for io::Error {
    fn from(err: MinimizationError) -> Self {
        io::Error::other(err)
    }
}

//! Top-level error type
//!
//! Each module has its own error enum; [`KmapError`] gathers them for callers that run the
//! whole pipeline (read a table, minimize it, check and export the result).

use crate::expression::ParseBoolExprError;
use crate::minimize::MinimizationError;
use crate::table::{TableError, TableReadError};
use std::fmt;
use std::io;

/// Any error raised while loading, minimizing or exporting a function
#[derive(Debug)]
pub enum KmapError {
    /// Invalid truth table contents
    Table(TableError),
    /// Minimization could not produce a cover
    Minimization(MinimizationError),
    /// A rendered expression could not be parsed back
    Expression(ParseBoolExprError),
    /// The minimized expression disagrees with the table
    Verification {
        /// Which rendering failed, e.g. `"SOP"`
        form: &'static str,
        /// Term indices where it disagrees
        indices: Vec<u32>,
    },
    /// I/O error while reading or writing files
    Io(io::Error),
}

impl fmt::Display for KmapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KmapError::Table(e) => write!(f, "{}", e),
            KmapError::Minimization(e) => write!(f, "{}", e),
            KmapError::Expression(e) => write!(f, "{}", e),
            KmapError::Verification { form, indices } => write!(
                f,
                "{} expression disagrees with the table at {} row(s): {:?}",
                form,
                indices.len(),
                indices
            ),
            KmapError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for KmapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KmapError::Table(e) => Some(e),
            KmapError::Minimization(e) => Some(e),
            KmapError::Expression(e) => Some(e),
            KmapError::Io(e) => Some(e),
            KmapError::Verification { .. } => None,
        }
    }
}

impl From<TableError> for KmapError {
    fn from(err: TableError) -> Self {
        KmapError::Table(err)
    }
}

impl From<TableReadError> for KmapError {
    fn from(err: TableReadError) -> Self {
        match err {
            TableReadError::Table(e) => KmapError::Table(e),
            TableReadError::Io(e) => KmapError::Io(e),
        }
    }
}

impl From<MinimizationError> for KmapError {
    fn from(err: MinimizationError) -> Self {
        KmapError::Minimization(err)
    }
}

impl From<ParseBoolExprError> for KmapError {
    fn from(err: ParseBoolExprError) -> Self {
        KmapError::Expression(err)
    }
}

impl From<io::Error> for KmapError {
    fn from(err: io::Error) -> Self {
        KmapError::Io(err)
    }
}

impl From<KmapError> for io::Error {
    fn from(err: KmapError) -> Self {
        match err {
            KmapError::Io(io_err) => io_err,
            other => io::Error::other(other),
        }
    }
}

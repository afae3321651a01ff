//! Error types for truth table construction and the table text format

use std::fmt;
use std::io;
use std::sync::Arc;

/// Why a variable label was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelProblem {
    /// Not of the form `[A-Za-z_][A-Za-z0-9_]*`
    NotIdentifier,
    /// A constant keyword or the output port name
    Reserved,
    /// Used by an earlier variable
    Duplicate,
}

impl fmt::Display for LabelProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            LabelProblem::NotIdentifier => "is not an identifier",
            LabelProblem::Reserved => "is a reserved name",
            LabelProblem::Duplicate => "is used twice",
        };
        write!(f, "{}", text)
    }
}

/// Errors related to truth table shape and the table text format
///
/// Malformed *cells* are never reported here: they are coerced to `0`. These errors cover
/// problems that leave no sensible table to coerce into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Variable count outside `1..=MAX_VARIABLES`
    InvalidVariableCount {
        /// The rejected count
        count: usize,
    },
    /// Table text has data before (or without) a `.i` directive
    MissingVariableDirective,
    /// Invalid value in a `.i` directive
    InvalidVariableDirective {
        /// The invalid value string
        value: Arc<str>,
    },
    /// Label count doesn't match the variable count
    LabelCountMismatch {
        /// Expected number of labels
        expected: usize,
        /// Actual number of labels provided
        actual: usize,
    },
    /// A variable label that cannot appear in a rendered expression
    InvalidLabel {
        /// The rejected label
        label: Arc<str>,
        /// What is wrong with it
        reason: LabelProblem,
    },
    /// A data line whose first field is neither a decimal index nor a bit pattern
    InvalidIndex {
        /// 1-based line number
        line: usize,
        /// The offending field
        value: Arc<str>,
    },
    /// A term index that does not fit in the table
    IndexOutOfRange {
        /// The index that was given
        index: usize,
        /// Number of rows in the table (`2^n`)
        size: usize,
    },
    /// A data line with an index but no output value
    MissingValue {
        /// 1-based line number
        line: usize,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::InvalidVariableCount { count } => write!(
                f,
                "Invalid variable count {} (supported range: 1..={})",
                count,
                super::MAX_VARIABLES
            ),
            TableError::MissingVariableDirective => {
                write!(f, "Truth table is missing the .i (variable count) directive")
            }
            TableError::InvalidVariableDirective { value } => {
                write!(f, "Invalid .i directive value '{}'", value)
            }
            TableError::LabelCountMismatch { expected, actual } => write!(
                f,
                "Expected {} variable labels but {} were provided",
                expected, actual
            ),
            TableError::InvalidLabel { label, reason } => {
                write!(f, "Variable label '{}' {}", label, reason)
            }
            TableError::InvalidIndex { line, value } => write!(
                f,
                "Line {}: '{}' is neither a term index nor a bit pattern",
                line, value
            ),
            TableError::IndexOutOfRange { index, size } => write!(
                f,
                "Term index {} out of range (table has {} rows)",
                index, size
            ),
            TableError::MissingValue { line } => {
                write!(f, "Line {}: missing output value", line)
            }
        }
    }
}

impl std::error::Error for TableError {}

impl From<TableError> for io::Error {
    fn from(err: TableError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Errors that can occur when reading a truth table
///
/// This error type is returned by `TruthTable::from_reader()` and friends.
#[derive(Debug)]
pub enum TableReadError {
    /// Table format or shape error
    Table(TableError),
    /// IO error while reading
    Io(io::Error),
}

impl fmt::Display for TableReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableReadError::Table(e) => write!(f, "{}", e),
            TableReadError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for TableReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TableReadError::Table(e) => Some(e),
            TableReadError::Io(e) => Some(e),
        }
    }
}

impl From<TableError> for TableReadError {
    fn from(err: TableError) -> Self {
        TableReadError::Table(err)
    }
}

impl From<io::Error> for TableReadError {
    fn from(err: io::Error) -> Self {
        TableReadError::Io(err)
    }
}

impl From<TableReadError> for io::Error {
    fn from(err: TableReadError) -> Self {
        match err {
            TableReadError::Table(e) => e.into(),
            TableReadError::Io(e) => e,
        }
    }
}

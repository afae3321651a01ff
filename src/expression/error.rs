//! Error types for boolean expression parsing

use std::fmt;
use std::io;
use std::sync::Arc;

/// Syntax errors in a boolean expression
///
/// Every variant carries the original input and, where the parser knows it, the byte offset
/// of the problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpressionParseError {
    /// A character that starts no token
    InvalidToken {
        /// The input that failed to parse
        input: Arc<str>,
        /// Byte offset of the offending character
        position: usize,
    },
    /// A token that cannot appear where it was found
    UnexpectedToken {
        /// The input that failed to parse
        input: Arc<str>,
        /// Text of the offending token
        token: Arc<str>,
        /// Byte offset of the token
        position: usize,
        /// Tokens the parser would have accepted instead
        expected: Vec<String>,
    },
    /// The input ended in the middle of an expression
    UnexpectedEnd {
        /// The input that failed to parse
        input: Arc<str>,
        /// Tokens the parser would have accepted instead
        expected: Vec<String>,
    },
}

impl ExpressionParseError {
    /// Byte offset of the error, if known
    pub fn position(&self) -> Option<usize> {
        match self {
            ExpressionParseError::InvalidToken { position, .. }
            | ExpressionParseError::UnexpectedToken { position, .. } => Some(*position),
            ExpressionParseError::UnexpectedEnd { .. } => None,
        }
    }

    /// The input that failed to parse
    pub fn input(&self) -> &str {
        match self {
            ExpressionParseError::InvalidToken { input, .. }
            | ExpressionParseError::UnexpectedToken { input, .. }
            | ExpressionParseError::UnexpectedEnd { input, .. } => input,
        }
    }
}

fn write_expected(f: &mut fmt::Formatter<'_>, expected: &[String]) -> fmt::Result {
    if !expected.is_empty() {
        write!(f, ", expected one of {}", expected.join(" "))?;
    }
    Ok(())
}

impl fmt::Display for ExpressionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionParseError::InvalidToken { input, position } => write!(
                f,
                "Invalid character at position {} in expression {:?}",
                position, input
            ),
            ExpressionParseError::UnexpectedToken {
                input,
                token,
                position,
                expected,
            } => {
                write!(
                    f,
                    "Unexpected {:?} at position {} in expression {:?}",
                    token, position, input
                )?;
                write_expected(f, expected)
            }
            ExpressionParseError::UnexpectedEnd { input, expected } => {
                write!(f, "Unexpected end of expression {:?}", input)?;
                write_expected(f, expected)
            }
        }
    }
}

impl std::error::Error for ExpressionParseError {}

impl From<ExpressionParseError> for io::Error {
    fn from(err: ExpressionParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Errors returned by [`BoolExpr::parse`](super::BoolExpr::parse) and
/// [`BoolExpr::parse_over`](super::BoolExpr::parse_over)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseBoolExprError {
    /// The text is not a well-formed expression
    Parse(ExpressionParseError),
    /// The expression names a variable outside the allowed set
    UnknownVariable {
        /// The unrecognised name
        name: Arc<str>,
    },
}

impl fmt::Display for ParseBoolExprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseBoolExprError::Parse(e) => write!(f, "{}", e),
            ParseBoolExprError::UnknownVariable { name } => {
                write!(f, "Unknown variable {:?} in expression", name)
            }
        }
    }
}

impl std::error::Error for ParseBoolExprError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseBoolExprError::Parse(e) => Some(e),
            ParseBoolExprError::UnknownVariable { .. } => None,
        }
    }
}

impl From<ExpressionParseError> for ParseBoolExprError {
    fn from(err: ExpressionParseError) -> Self {
        ParseBoolExprError::Parse(err)
    }
}

impl From<ParseBoolExprError> for io::Error {
    fn from(err: ParseBoolExprError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

//! Error types for implicant parsing

use std::fmt;
use std::io;

/// Errors that can occur when parsing an implicant from its `01-` text form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImplicantParseError {
    /// The input string was empty
    Empty,
    /// A symbol other than `0`, `1` or `-` was found
    InvalidCharacter {
        /// The invalid character
        character: char,
        /// Position in the input string
        position: usize,
    },
}

impl fmt::Display for ImplicantParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImplicantParseError::Empty => write!(f, "Implicant must have at least one symbol"),
            ImplicantParseError::InvalidCharacter {
                character,
                position,
            } => write!(
                f,
                "Invalid implicant symbol '{}' at position {}. Expected '0', '1' or '-'.",
                character, position
            ),
        }
    }
}

impl std::error::Error for ImplicantParseError {}

impl From<ImplicantParseError> for io::Error {
    fn from(err: ImplicantParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

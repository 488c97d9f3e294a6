//! Error types for header field parsing.

use thiserror::Error;

/// Errors that can occur while parsing a header field-line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The field-line has no `:` separating name from value.
    #[error("Malformed field line, no ':' separator: {0}")]
    MissingSeparator(String),

    /// The field name is empty, has whitespace before the colon, or contains
    /// a character outside the token set.
    #[error("Invalid field name: {0:?}")]
    InvalidFieldName(String),
}

//! Error types for response writing.

use thiserror::Error;

use crate::response::writer::WriterState;

/// Errors that can occur while writing a response.
#[derive(Debug, Error)]
pub enum Error {
    /// A write method was called out of order.
    #[error("Cannot {operation} in state {current}, requires state {required}")]
    InvalidState {
        operation: &'static str,
        current: WriterState,
        required: WriterState,
    },

    /// A header or trailer name is not a token, or its value contains CR,
    /// LF or NUL.
    #[error("Refusing to write invalid field: {0:?}")]
    InvalidField(String),

    /// Plain and chunked body writes were mixed on one response.
    #[error("Cannot mix chunked and plain body writes in one response")]
    MixedBodyFraming,

    /// I/O error from the underlying writer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

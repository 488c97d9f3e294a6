//! Error types for the HTTP parser.

use thiserror::Error;

use crate::headers::Error as HeaderError;

/// Errors that can occur during HTTP request parsing.
#[derive(Debug, Error)]
pub enum Error {
    /// The request line is malformed (wrong number of parts or not UTF-8).
    #[error("Malformed request line: {0}")]
    MalformedRequestLine(String),

    /// The method token contains something other than uppercase letters.
    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    /// The request target is empty.
    #[error("Invalid request target")]
    InvalidTarget,

    /// The HTTP version is anything other than `HTTP/1.1`.
    #[error("Invalid HTTP version: {0}")]
    InvalidVersion(String),

    /// A field-line in the header section is invalid.
    #[error("Invalid header: {0}")]
    Header(#[from] HeaderError),

    /// The `Content-Length` header is not a non-negative integer.
    #[error("Invalid Content-Length value, not a number: {0}")]
    InvalidContentLength(String),

    /// More body bytes arrived than `Content-Length` declared.
    #[error("Body larger than Content-Length: declared {declared}, received {received}")]
    BodyTooLong { declared: usize, received: usize },

    /// The stream ended before the request was complete.
    #[error("Incomplete request")]
    IncompleteRequest,

    /// Data was fed to a parser that already produced a request.
    #[error("Trying to read data in a done state")]
    AlreadyDone,

    /// A required header is missing from the request.
    #[error("Required header is missing: {0}")]
    MissingHeader(String),

    /// Error reading from the underlying stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing JSON.
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

//! Request handlers.

use std::io::Write;
use std::sync::Arc;

use crate::parser::Request;
use crate::response::{default_headers, Error as ResponseError, ResponseWriter, StatusCode};

/// Type alias for a handler function.
///
/// The handler receives a writer backed by an in-memory buffer and the
/// parsed request. Whatever it writes is sent to the client in one piece
/// once it returns.
pub type HandlerFn = Arc<dyn Fn(&mut ResponseWriter, &Request) + Send + Sync>;

/// A plain-text error page: status line, default headers, message body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerError {
    /// The status to respond with.
    pub status: StatusCode,
    /// The message sent as the body.
    pub message: String,
}

impl HandlerError {
    pub fn new(status: impl Into<StatusCode>, message: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            message: message.into(),
        }
    }

    /// Write the error page as a complete response.
    pub fn write<W: Write>(&self, w: &mut ResponseWriter<W>) -> Result<(), ResponseError> {
        w.write_status_line(self.status)?;
        w.write_headers(&default_headers(self.message.len()))?;
        w.write_body(self.message.as_bytes())?;
        Ok(())
    }

    /// Serialize the error page into a byte buffer.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ResponseError> {
        let mut w = ResponseWriter::new(Vec::new());
        self.write(&mut w)?;
        Ok(w.into_inner())
    }
}

//! HTTP response framing.
//!
//! [`ResponseWriter`] serializes a response onto any [`std::io::Write`],
//! enforcing status line, headers, body, trailers order.

mod status;
mod writer;
mod error;

// Re-export public items
pub use status::StatusCode;
pub use writer::{default_headers, ResponseWriter, WriterState};
pub use error::Error;

//! HTTP parser module.
//!
//! This module turns raw request bytes into a [`Request`]. Parsing is
//! incremental: [`RequestParser`] accepts input in arbitrary fragments, and
//! [`read_request`] drives it against an async byte stream.

mod request;
mod method;
mod state;
mod reader;
mod error;

// Re-export public items
pub use request::{Request, RequestLine};
pub use method::Method;
pub use state::{ParserState, RequestParser};
pub use reader::{ReadBuffer, read_request};
pub use error::Error;

// Re-export the parse_request function
pub use request::parse_request;

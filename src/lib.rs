//! HTTP/1.1 over raw TCP.
//!
//! This library parses HTTP/1.1 requests incrementally from a byte stream,
//! frames responses through an ordered writer, and serves one request per
//! TCP connection.
//!
//! # Features
//!
//! - Incremental request parsing that tolerates arbitrary fragmentation
//! - Case-insensitive header map that joins repeated fields
//! - Response writer enforcing status line, headers, body, trailers order
//! - Fixed-length and chunked bodies, with trailers after the last chunk
//! - Concurrent server with a per-connection task and graceful close
//!
//! # Examples
//!
//! ## Parsing a complete request
//!
//! ```
//! use rawhttp::{parse_request, Method};
//!
//! let raw = b"POST /coffee HTTP/1.1\r\nHost: localhost\r\nContent-Length: 4\r\n\r\nmilk";
//! let request = parse_request(raw).unwrap();
//!
//! assert_eq!(request.method(), &Method::POST);
//! assert_eq!(request.target(), "/coffee");
//! assert_eq!(request.header("host"), Some("localhost"));
//! assert_eq!(request.body, b"milk");
//! ```
//!
//! ## Feeding bytes as they arrive
//!
//! ```
//! use rawhttp::{ParserError, RequestParser};
//!
//! let mut parser = RequestParser::new();
//!
//! // Nothing can be consumed until the request line is complete
//! assert_eq!(parser.feed(b"GET / HT").unwrap(), 0);
//! assert_eq!(parser.feed(b"GET / HTTP/1.1\r\n").unwrap(), 16);
//! parser.feed(b"\r\n").unwrap();
//!
//! assert!(parser.is_done());
//! assert!(matches!(parser.feed(b"more"), Err(ParserError::AlreadyDone)));
//! ```
//!
//! ## Writing a chunked response
//!
//! ```
//! use rawhttp::{HeaderMap, ResponseWriter, StatusCode};
//!
//! let mut w: ResponseWriter = ResponseWriter::new(Vec::new());
//! let mut headers = HeaderMap::new();
//! headers.set("Transfer-Encoding", "chunked");
//!
//! w.write_status_line(StatusCode::OK).unwrap();
//! w.write_headers(&headers).unwrap();
//! w.write_chunked_body(b"hello").unwrap();
//! w.write_chunked_body_done().unwrap();
//! w.write_trailers(&HeaderMap::new()).unwrap();
//!
//! assert!(w.into_inner().ends_with(b"5\r\nhello\r\n0\r\n\r\n"));
//! ```
//!
//! See the `demos` directory for a complete server.

pub mod headers;
pub mod parser;
pub mod response;
pub mod server;

// Re-export commonly used items for convenience
pub use headers::{Error as HeaderError, HeaderMap};
pub use parser::{
    parse_request, read_request, Error as ParserError, Method, ParserState, ReadBuffer, Request,
    RequestLine, RequestParser,
};
pub use response::{default_headers, Error as ResponseError, ResponseWriter, StatusCode, WriterState};
pub use server::{Error as ServerError, HandlerError, HandlerFn, HttpServer, ServerConfig};

//! HTTP request representation and request-line parsing.

use std::str::FromStr;
use serde::de::DeserializeOwned;

use crate::headers::HeaderMap;
use crate::parser::error::Error;
use crate::parser::method::Method;
use crate::parser::state::RequestParser;

/// The only protocol version this parser accepts.
const HTTP_VERSION: &str = "1.1";

/// The first line of an HTTP request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The request target, as sent (e.g. "/index.html?x=1")
    pub target: String,
    /// The HTTP version without the "HTTP/" prefix, always "1.1"
    pub version: String,
}

/// Represents a parsed HTTP request.
#[derive(Debug, Clone)]
pub struct Request {
    /// The request line
    pub request_line: RequestLine,
    /// The HTTP headers
    pub headers: HeaderMap,
    /// The request body
    pub body: Vec<u8>,
}

impl Request {
    pub fn method(&self) -> &Method {
        &self.request_line.method
    }

    pub fn target(&self) -> &str {
        &self.request_line.target
    }

    /// Get a header value, ignoring case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// The declared `Content-Length`, if present and numeric.
    pub fn content_length(&self) -> Option<usize> {
        self.header("Content-Length").and_then(|v| v.parse().ok())
    }

    /// Parse the request body as JSON.
    ///
    /// # Returns
    ///
    /// The parsed JSON value, or an error if the body is not valid JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        // Check if the Content-Type header is application/json
        if !self.is_json() {
            return Err(Error::MissingHeader("Content-Type: application/json".to_string()));
        }

        let json = serde_json::from_slice(&self.body)?;
        Ok(json)
    }

    /// Check if the request has a JSON body.
    pub fn is_json(&self) -> bool {
        self.header("Content-Type")
            .is_some_and(|ct| ct.starts_with("application/json"))
    }
}

/// Parse a request line from the front of `data`.
///
/// Returns `Ok(None)` when no CRLF has arrived yet. On success the second
/// element is the number of bytes consumed, including the CRLF.
pub(crate) fn parse_request_line(data: &[u8]) -> Result<Option<(RequestLine, usize)>, Error> {
    let idx = match crate::headers::find_crlf(data) {
        Some(idx) => idx,
        None => return Ok(None),
    };

    let line = std::str::from_utf8(&data[..idx])
        .map_err(|_| Error::MalformedRequestLine("Invalid UTF-8".to_string()))?;

    // Single spaces only; "GET  / HTTP/1.1" has four parts and is rejected
    let parts: Vec<&str> = line.split(' ').collect();
    if parts.len() != 3 {
        return Err(Error::MalformedRequestLine(line.to_string()));
    }

    let method = Method::from_str(parts[0])?;

    let target = parts[1];
    if target.is_empty() {
        return Err(Error::InvalidTarget);
    }

    let version = match parts[2].split_once('/') {
        Some(("HTTP", HTTP_VERSION)) => HTTP_VERSION.to_string(),
        _ => return Err(Error::InvalidVersion(parts[2].to_string())),
    };

    let request_line = RequestLine {
        method,
        target: target.to_string(),
        version,
    };

    Ok(Some((request_line, idx + 2)))
}

/// Parse a complete HTTP request held in memory.
///
/// # Arguments
///
/// * `input` - A byte slice containing the whole request, body included
///
/// # Returns
///
/// The parsed request, or [`Error::IncompleteRequest`] if `input` ends
/// before the request does
pub fn parse_request(input: &[u8]) -> Result<Request, Error> {
    let mut parser = RequestParser::new();
    parser.feed(input)?;
    parser.into_request()
}

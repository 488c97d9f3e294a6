//! Incremental request parser.
//!
//! [`RequestParser`] is fed whatever bytes have arrived so far and reports
//! how many of them it consumed. A return of `Ok(0)` is not an error: it
//! means the parser needs more input before it can make progress. The caller
//! keeps the unconsumed tail and feeds it again, extended with new bytes.

use crate::headers::HeaderMap;
use crate::parser::error::Error;
use crate::parser::request::{parse_request_line, Request, RequestLine};

/// Where the parser is in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParserState {
    #[default]
    Initialized,
    ParsingHeaders,
    ParsingBody,
    Done,
}

/// A re-entrant, single-pass HTTP/1.1 request parser.
#[derive(Debug, Default)]
pub struct RequestParser {
    state: ParserState,
    request_line: Option<RequestLine>,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl RequestParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ParserState {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == ParserState::Done
    }

    /// Feed buffered bytes to the parser.
    ///
    /// Runs the state machine until it either finishes or stops consuming,
    /// and returns the total number of bytes consumed. Bytes past that count
    /// were not looked at and must be passed again on the next call.
    pub fn feed(&mut self, data: &[u8]) -> Result<usize, Error> {
        if self.is_done() {
            return Err(Error::AlreadyDone);
        }

        let mut total = 0;
        while !self.is_done() {
            let n = self.parse_single(&data[total..])?;
            if n == 0 {
                break;
            }
            total += n;
        }

        Ok(total)
    }

    /// Take the finished request out of the parser.
    pub fn into_request(self) -> Result<Request, Error> {
        if !self.is_done() {
            return Err(Error::IncompleteRequest);
        }
        let request_line = self.request_line.ok_or(Error::IncompleteRequest)?;

        Ok(Request {
            request_line,
            headers: self.headers,
            body: self.body,
        })
    }

    fn parse_single(&mut self, data: &[u8]) -> Result<usize, Error> {
        match self.state {
            ParserState::Initialized => self.parse_request_line(data),
            ParserState::ParsingHeaders => self.parse_headers(data),
            ParserState::ParsingBody => self.parse_body(data),
            ParserState::Done => Err(Error::AlreadyDone),
        }
    }

    fn parse_request_line(&mut self, data: &[u8]) -> Result<usize, Error> {
        match parse_request_line(data)? {
            Some((request_line, n)) => {
                self.request_line = Some(request_line);
                self.headers = HeaderMap::new();
                self.state = ParserState::ParsingHeaders;
                Ok(n)
            }
            None => Ok(0),
        }
    }

    fn parse_headers(&mut self, data: &[u8]) -> Result<usize, Error> {
        let (n, done) = self.headers.parse(data)?;
        if done {
            self.state = ParserState::ParsingBody;
        }
        Ok(n)
    }

    fn parse_body(&mut self, data: &[u8]) -> Result<usize, Error> {
        let declared = match self.headers.get("Content-Length") {
            Some(value) => value
                .parse::<usize>()
                .map_err(|_| Error::InvalidContentLength(value.to_string()))?,
            None => {
                // No body; whatever follows is treated as consumed
                self.state = ParserState::Done;
                return Ok(data.len());
            }
        };

        self.body.extend_from_slice(data);

        let received = self.body.len();
        if received > declared {
            return Err(Error::BodyTooLong { declared, received });
        }
        if received == declared {
            self.state = ParserState::Done;
        }

        Ok(data.len())
    }
}

//! Ordered HTTP response writer.

use std::fmt;
use std::io::Write;

use crate::headers::{is_valid_field_name, is_valid_field_value, HeaderMap};
use crate::response::error::Error;
use crate::response::status::StatusCode;

const HTTP_VERSION: &str = "HTTP/1.1";
const CRLF: &[u8] = b"\r\n";

/// Which part of the response the writer expects next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriterState {
    StatusLine,
    Headers,
    Body,
    Trailers,
    Done,
}

impl fmt::Display for WriterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WriterState::StatusLine => "status-line",
            WriterState::Headers => "headers",
            WriterState::Body => "body",
            WriterState::Trailers => "trailers",
            WriterState::Done => "done",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyFraming {
    Plain,
    Chunked,
}

/// Writes an HTTP/1.1 response in strict order.
///
/// The status line comes first, then the header section, then either a
/// plain body or a chunked body. A chunked body is closed with
/// [`write_chunked_body_done`](Self::write_chunked_body_done) and then
/// [`write_trailers`](Self::write_trailers), which may be given an empty map
/// when the response carries no trailers.
///
/// ```
/// use rawhttp::{default_headers, ResponseWriter, StatusCode};
///
/// let mut w: ResponseWriter = ResponseWriter::new(Vec::new());
/// w.write_status_line(StatusCode::OK).unwrap();
/// w.write_headers(&default_headers(2)).unwrap();
/// w.write_body(b"hi").unwrap();
///
/// let bytes = w.into_inner();
/// assert!(bytes.starts_with(b"HTTP/1.1 200 OK\r\n"));
/// assert!(bytes.ends_with(b"\r\n\r\nhi"));
/// ```
#[derive(Debug)]
pub struct ResponseWriter<W = Vec<u8>> {
    writer: W,
    state: WriterState,
    framing: Option<BodyFraming>,
}

impl<W: Write> ResponseWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            state: WriterState::StatusLine,
            framing: None,
        }
    }

    pub fn state(&self) -> WriterState {
        self.state
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write `HTTP/1.1 <code> <reason>`.
    pub fn write_status_line(&mut self, status: impl Into<StatusCode>) -> Result<(), Error> {
        self.require("write status line", WriterState::StatusLine)?;

        let status = status.into();
        write!(
            self.writer,
            "{HTTP_VERSION} {} {}\r\n",
            status.as_u16(),
            status.reason_phrase()
        )?;

        self.state = WriterState::Headers;
        Ok(())
    }

    /// Write every header as a field-line, then the blank line.
    pub fn write_headers(&mut self, headers: &HeaderMap) -> Result<(), Error> {
        self.require("write headers", WriterState::Headers)?;

        self.write_fields(headers)?;

        self.state = WriterState::Body;
        Ok(())
    }

    /// Write raw body bytes. May be called more than once.
    pub fn write_body(&mut self, body: &[u8]) -> Result<usize, Error> {
        self.require("write body", WriterState::Body)?;
        self.set_framing(BodyFraming::Plain)?;

        self.writer.write_all(body)?;
        Ok(body.len())
    }

    /// Write one chunk: size in hex, CRLF, the data, CRLF.
    ///
    /// Returns the number of bytes written including framing. An empty
    /// slice writes nothing, since a zero-size chunk ends the body.
    pub fn write_chunked_body(&mut self, chunk: &[u8]) -> Result<usize, Error> {
        self.require("write chunked body", WriterState::Body)?;
        self.set_framing(BodyFraming::Chunked)?;

        if chunk.is_empty() {
            return Ok(0);
        }

        let size_line = format!("{:x}\r\n", chunk.len());
        self.writer.write_all(size_line.as_bytes())?;
        self.writer.write_all(chunk)?;
        self.writer.write_all(CRLF)?;

        Ok(size_line.len() + chunk.len() + CRLF.len())
    }

    /// Write the terminating zero-size chunk.
    pub fn write_chunked_body_done(&mut self) -> Result<usize, Error> {
        self.require("finish chunked body", WriterState::Body)?;
        self.set_framing(BodyFraming::Chunked)?;

        let last_chunk = b"0\r\n";
        self.writer.write_all(last_chunk)?;

        self.state = WriterState::Trailers;
        Ok(last_chunk.len())
    }

    /// Write trailer fields and the blank line that ends the message.
    pub fn write_trailers(&mut self, trailers: &HeaderMap) -> Result<(), Error> {
        self.require("write trailers", WriterState::Trailers)?;

        self.write_fields(trailers)?;

        self.state = WriterState::Done;
        Ok(())
    }

    fn write_fields(&mut self, fields: &HeaderMap) -> Result<(), Error> {
        // Checked up front so a bad field leaves nothing half-written
        if let Some((name, _)) = fields.iter().find(|(name, value)| {
            !is_valid_field_name(name.as_bytes()) || !is_valid_field_value(value)
        }) {
            return Err(Error::InvalidField(name.to_string()));
        }

        for (name, value) in fields.iter() {
            write!(self.writer, "{name}: {value}\r\n")?;
        }
        self.writer.write_all(CRLF)?;
        Ok(())
    }

    fn require(&self, operation: &'static str, required: WriterState) -> Result<(), Error> {
        if self.state != required {
            return Err(Error::InvalidState {
                operation,
                current: self.state,
                required,
            });
        }
        Ok(())
    }

    fn set_framing(&mut self, framing: BodyFraming) -> Result<(), Error> {
        match self.framing {
            Some(existing) if existing != framing => Err(Error::MixedBodyFraming),
            _ => {
                self.framing = Some(framing);
                Ok(())
            }
        }
    }
}

/// The headers every response starts from.
///
/// Handlers adjust individual entries with [`HeaderMap::replace`] and
/// [`HeaderMap::remove`] before calling
/// [`ResponseWriter::write_headers`]. A chunked response removes
/// `Content-Length` and sets `Transfer-Encoding: chunked`.
pub fn default_headers(content_len: usize) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.set("Content-Length", content_len.to_string());
    headers.set("Connection", "close");
    headers.set("Content-Type", "text/plain");
    headers
}

//! Reading a request off an async byte stream.

use tokio::io::{AsyncRead, AsyncReadExt};

use crate::parser::error::Error;
use crate::parser::request::Request;
use crate::parser::state::RequestParser;

/// Growable byte arena holding bytes read but not yet consumed.
///
/// The filled region always starts at offset 0. When it reaches capacity
/// the arena doubles before the next read.
#[derive(Debug)]
pub struct ReadBuffer {
    buf: Vec<u8>,
    filled: usize,
}

impl ReadBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: vec![0; capacity.max(1)],
            filled: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Bytes read and not yet consumed.
    pub fn filled(&self) -> &[u8] {
        &self.buf[..self.filled]
    }

    /// Double the arena if there is no room left to read into.
    pub fn grow_if_full(&mut self) {
        if self.filled >= self.buf.len() {
            let doubled = self.buf.len() * 2;
            self.buf.resize(doubled, 0);
        }
    }

    /// Read once from `reader` into the free tail, returning the byte count.
    pub async fn read_from<R>(&mut self, reader: &mut R) -> std::io::Result<usize>
    where
        R: AsyncRead + Unpin + ?Sized,
    {
        self.grow_if_full();
        let n = reader.read(&mut self.buf[self.filled..]).await?;
        self.filled += n;
        Ok(n)
    }

    /// Drop the first `n` bytes and shift the rest to offset 0.
    pub fn consume(&mut self, n: usize) {
        let n = n.min(self.filled);
        self.buf.copy_within(n..self.filled, 0);
        self.filled -= n;
    }
}

/// Read and parse a single request from `reader`.
///
/// Bytes are read into a [`ReadBuffer`] that starts at `initial_capacity`
/// and doubles as needed. Fails with [`Error::IncompleteRequest`] if the
/// stream ends before the request does.
pub async fn read_request<R>(reader: &mut R, initial_capacity: usize) -> Result<Request, Error>
where
    R: AsyncRead + Unpin + ?Sized,
{
    let mut buffer = ReadBuffer::with_capacity(initial_capacity);
    let mut parser = RequestParser::new();

    while !parser.is_done() {
        let n = buffer.read_from(reader).await?;
        if n == 0 {
            return Err(Error::IncompleteRequest);
        }

        let consumed = parser.feed(buffer.filled())?;
        buffer.consume(consumed);
    }

    parser.into_request()
}

//! Accumulation of a request head from raw connection chunks.

use memchr::memmem;

use crate::parser::error::Error;

/// The byte sequence that ends a request head.
pub const HEAD_TERMINATOR: &[u8] = b"\r\n\r\n";

/// Collects chunks read from a connection until the head terminator shows up.
///
/// The reader only defines when a head is complete; pulling bytes off the
/// transport is up to the caller.
#[derive(Debug, Default)]
pub struct HeadReader {
    buf: Vec<u8>,
    limit: Option<usize>,
    /// Offset just past the first terminator, once seen.
    end: Option<usize>,
}

impl HeadReader {
    /// Create a reader with no size limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader that fails once `limit` bytes arrive without a terminator.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    /// Append a chunk and report whether the head is complete.
    ///
    /// Chunks fed after completion are ignored.
    pub fn feed(&mut self, chunk: &[u8]) -> Result<bool, Error> {
        if self.end.is_some() {
            return Ok(true);
        }

        // The terminator may straddle the previous chunk and this one.
        let search_from = self.buf.len().saturating_sub(HEAD_TERMINATOR.len() - 1);
        self.buf.extend_from_slice(chunk);

        if let Some(pos) = memmem::find(&self.buf[search_from..], HEAD_TERMINATOR) {
            self.end = Some(search_from + pos + HEAD_TERMINATOR.len());
            return Ok(true);
        }

        match self.limit {
            Some(limit) if self.buf.len() > limit => Err(Error::HeadTooLarge(limit)),
            _ => Ok(false),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.end.is_some()
    }

    /// Number of bytes accumulated so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consume the reader, returning the head up to and including the
    /// terminator. Bytes after it are dropped. An incomplete head is returned
    /// as-is.
    pub fn into_head(mut self) -> Vec<u8> {
        if let Some(end) = self.end {
            self.buf.truncate(end);
        }
        self.buf
    }
}

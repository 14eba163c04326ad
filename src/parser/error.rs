//! Error types for the HTTP parser.

use thiserror::Error;

/// Errors that can occur while reading or parsing a request head.
#[derive(Debug, Error)]
pub enum Error {
    /// The request line does not consist of exactly three tokens.
    #[error("Malformed request line: {0:?}")]
    MalformedRequestLine(String),

    /// A header line has no `": "` separator.
    #[error("Malformed header line: {0:?}")]
    MalformedHeaderLine(String),

    /// The head or the decoded path is not valid UTF-8.
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    /// The head grew past the configured limit before the terminator was seen.
    #[error("Request head exceeds {0} bytes")]
    HeadTooLarge(usize),
}

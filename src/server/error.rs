//! Error types for the file server.

use thiserror::Error;

use crate::parser::Error as ParserError;

/// Errors that abort the handling of a connection.
///
/// A missing file is not among them: it is answered with a 404 response.
#[derive(Debug, Error)]
pub enum Error {
    /// Error parsing a request head.
    #[error("Parse error: {0}")]
    ParseError(#[from] ParserError),

    /// I/O error, on the filesystem or the socket.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A name could not be represented in the filesystem encoding.
    #[error("Encoding error: {0}")]
    EncodingError(String),

    /// The peer closed the connection before sending a complete head.
    #[error("Connection closed before the request head was complete")]
    ConnectionClosed,

    /// Error reading a JSON configuration file.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A blocking worker failed to complete.
    #[error("Task error: {0}")]
    TaskError(String),
}

//! HTTP request head handling.
//!
//! This module turns the raw bytes of a connection into a [`Request`]: the
//! [`HeadReader`] decides when enough bytes have arrived and
//! [`parse_request`] converts them.

mod error;
mod headers;
mod method;
mod reader;
mod request;
mod version;

// Re-export public items
pub use error::Error;
pub use headers::Headers;
pub use method::Method;
pub use reader::{HeadReader, HEAD_TERMINATOR};
pub use request::{parse_request, Request};
pub use version::HttpVersion;

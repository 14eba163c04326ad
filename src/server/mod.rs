//! Static file serving.
//!
//! [`StaticFiles`] maps a parsed request onto a directory tree and yields a
//! byte-exact HTTP/1.0 [`Response`]; [`HttpServer`] runs the accept loop
//! around it.

mod config;
mod error;
mod http_server;
mod listing;
mod resolver;
mod response;

// Re-export public items
pub use config::ServerConfig;
pub use error::Error;
pub use http_server::{read_head, HttpServer};
pub use listing::{generate_listing, LISTING_CHARSET};
pub use resolver::{guess_mime_type, resolve, PathPolicy, StaticFiles, FALLBACK_MIME_TYPE, INDEX_FILE};
pub use response::{compile, Response, StatusCode};

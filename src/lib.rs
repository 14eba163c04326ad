//! A minimal HTTP/1.0 static file server.
//!
//! The request pipeline is a pair of synchronous entry points: [`parse_request`]
//! turns a raw request head into a [`Request`], and [`resolve`] maps that
//! request onto a directory tree, producing a byte-exact [`Response`] (a file,
//! an `index.html`, a generated directory listing or a 404 page).
//! [`HttpServer`] wraps both in a tokio accept loop.
//!
//! # Examples
//!
//! ## Parsing a request head
//!
//! ```
//! use reinhardt::{parse_request, Method};
//!
//! let request = parse_request(b"GET /docs/read%20me.txt HTTP/1.0\r\nHost: example.com\r\n\r\n").unwrap();
//! assert_eq!(request.method, Method::GET);
//! assert_eq!(request.path, "docs/read me.txt");
//! assert_eq!(request.header("Host"), Some("example.com"));
//! ```
//!
//! ## Error handling
//!
//! ```
//! use reinhardt::{parse_request, ParserError};
//!
//! match parse_request(b"GET\r\n\r\n") {
//!     Err(ParserError::MalformedRequestLine(line)) => println!("Malformed request line: {line}"),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```
//!
//! ## Compiling a response
//!
//! ```
//! use reinhardt::compile;
//!
//! let response = compile(200, "OK", "text/plain", b"hi".to_vec());
//! assert_eq!(
//!     response.head(),
//!     b"HTTP/1.0 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 2\r\n\r\n"
//! );
//! ```

pub mod parser;
pub mod server;

// Re-export commonly used items for convenience
pub use parser::{parse_request, Error as ParserError, HeadReader, Headers, HttpVersion, Method, Request};
pub use server::{
    compile, resolve, Error as ServerError, HttpServer, PathPolicy, Response, ServerConfig,
    StaticFiles, StatusCode,
};

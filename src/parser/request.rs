//! HTTP request parsing and representation.

use std::str::FromStr;

use percent_encoding::percent_decode_str;

use crate::parser::error::Error;
use crate::parser::headers::Headers;
use crate::parser::method::Method;
use crate::parser::version::HttpVersion;

/// Represents a parsed request head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The method token (GET, POST, etc.)
    pub method: Method,
    /// The decoded request path, without its leading `/`
    pub path: String,
    /// The protocol token
    pub version: HttpVersion,
    /// The request headers
    pub headers: Headers,
}

impl Request {
    /// Create a new request from already-parsed parts.
    pub fn new(method: Method, path: impl Into<String>, version: HttpVersion, headers: Headers) -> Self {
        Self {
            method,
            path: path.into(),
            version,
            headers,
        }
    }

    /// Get a header value by its exact name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }
}

/// Parse a request head from a byte slice.
///
/// Lines may end in CRLF or a bare LF. The request line must hold exactly
/// three whitespace-separated tokens. Every following non-empty line is split
/// on its first `": "`; neither the name nor the value is trimmed.
///
/// # Arguments
///
/// * `input` - The raw head bytes, usually as produced by [`HeadReader`](crate::parser::HeadReader)
///
/// # Returns
///
/// The parsed request, or an error if the head violates the grammar
pub fn parse_request(input: &[u8]) -> Result<Request, Error> {
    let text = std::str::from_utf8(input)
        .map_err(|e| Error::InvalidEncoding(format!("request head: {e}")))?;

    let mut lines = text.lines();
    let request_line = lines.next().unwrap_or_default();

    let parts: Vec<&str> = request_line.split_whitespace().collect();
    let [method, raw_path, version] = parts.as_slice() else {
        return Err(Error::MalformedRequestLine(request_line.to_string()));
    };

    let method = Method::from_str(method).unwrap_or_else(|never| match never {});
    let version = HttpVersion::from_str(version).unwrap_or_else(|never| match never {});
    let path = decode_path(raw_path)?;

    let mut headers = Headers::new();
    for line in lines.filter(|line| !line.is_empty()) {
        let (name, value) = line
            .split_once(": ")
            .ok_or_else(|| Error::MalformedHeaderLine(line.to_string()))?;
        headers.insert(name, value);
    }

    Ok(Request::new(method, path, version, headers))
}

/// Strip one leading `/` and percent-decode the rest.
///
/// Escapes that are not followed by two hex digits are kept literally. A
/// sequence that decodes to invalid UTF-8 is rejected.
pub(crate) fn decode_path(raw: &str) -> Result<String, Error> {
    let trimmed = raw.strip_prefix('/').unwrap_or(raw);
    percent_decode_str(trimmed)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|e| Error::InvalidEncoding(format!("path {raw:?}: {e}")))
}

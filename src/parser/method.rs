//! HTTP request methods.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// The method token of a request line.
///
/// Any token is accepted; well-known methods get their own variant and
/// everything else is kept verbatim in `Extension`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    GET,
    HEAD,
    POST,
    PUT,
    DELETE,
    OPTIONS,
    PATCH,
    Extension(String),
}

impl FromStr for Method {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "GET" => Method::GET,
            "HEAD" => Method::HEAD,
            "POST" => Method::POST,
            "PUT" => Method::PUT,
            "DELETE" => Method::DELETE,
            "OPTIONS" => Method::OPTIONS,
            "PATCH" => Method::PATCH,
            other => Method::Extension(other.to_string()),
        })
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Extension(token) => f.write_str(token),
            known => write!(f, "{known:?}"),
        }
    }
}

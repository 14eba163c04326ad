//! HTTP/1.0 response compilation.

/// Status codes the file server emits, with their reason phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok = 200,
    NotFound = 404,
}

impl StatusCode {
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// Get the reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// A compiled response: the head bytes and the body bytes, ready to be
/// written to the peer in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    code: u16,
    reason: String,
    mime_type: String,
    head: Vec<u8>,
    body: Vec<u8>,
}

impl Response {
    /// Compile a response for one of the known status codes.
    pub fn new(status: StatusCode, mime_type: &str, body: Vec<u8>) -> Self {
        compile(status.as_u16(), status.reason_phrase(), mime_type, body)
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// The status line, headers and terminating blank line.
    pub fn head(&self) -> &[u8] {
        &self.head
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Split into `(head, body)`.
    pub fn into_parts(self) -> (Vec<u8>, Vec<u8>) {
        (self.head, self.body)
    }

    /// Head and body concatenated.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.head.len() + self.body.len());
        bytes.extend_from_slice(&self.head);
        bytes.extend_from_slice(&self.body);
        bytes
    }
}

/// Build the head for `body` and pair them up.
///
/// The body is taken as bytes so it is never re-encoded after its length is
/// measured; `Content-Length` is its byte length.
pub fn compile(code: u16, reason: &str, mime_type: &str, body: Vec<u8>) -> Response {
    let head = format!(
        "HTTP/1.0 {code} {reason}\r\nContent-Type: {mime_type}\r\nContent-Length: {len}\r\n\r\n",
        len = body.len()
    )
    .into_bytes();

    Response {
        code,
        reason: reason.to_string(),
        mime_type: mime_type.to_string(),
        head,
        body,
    }
}

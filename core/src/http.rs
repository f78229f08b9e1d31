//! HTTP verb tokens understood by the client.
//!
//! # Design
//! The verb set mirrors the service's controller layer, including the
//! non-standard `UPDATE` token, which goes out on the wire literally.
//! `sends_body` encodes the body-attachment policy: only `POST` and
//! `PATCH` carry a JSON payload; every other verb ignores its `data`
//! argument. The asymmetry is intentional and preserved as-is.

use std::fmt;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    /// Non-standard verb, sent as the literal token `UPDATE`.
    Update,
    Delete,
}

impl HttpMethod {
    /// Uppercase wire form of the verb.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Update => "UPDATE",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Whether this verb attaches the JSON payload. Only `POST` and
    /// `PATCH` do; `PUT`, `UPDATE`, `DELETE`, and `GET` never send one.
    pub fn sends_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Patch)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Error types for the HTTP client.
//!
//! # Design
//! Transport failures get their own variant because callers frequently
//! distinguish "the server could not be reached" from "we built a bad
//! request." Each variant carries the underlying error message as a plain
//! string for debugging; none of them is swallowed — every failure
//! surfaces as an `Err` from the verb that caused it.

use std::fmt;

/// Errors returned by `HttpClient` verb methods.
#[derive(Debug)]
pub enum ClientError {
    /// The endpoint or headers could not form a valid HTTP request
    /// (malformed URI, illegal header bytes).
    InvalidRequest(String),

    /// The request payload could not be serialized to JSON. Encoding a
    /// `ParamBag` (a JSON object) is infallible, so verb calls only hit
    /// this through payload types whose `Serialize` impl can fail.
    Serialization(String),

    /// The round trip failed at the transport level — connect, send, or
    /// body read. The response slot is cleared when this is returned.
    Transport(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::InvalidRequest(msg) => write!(f, "invalid request: {msg}"),
            ClientError::Serialization(msg) => write!(f, "serialization failed: {msg}"),
            ClientError::Transport(msg) => write!(f, "transport failed: {msg}"),
        }
    }
}

impl std::error::Error for ClientError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_variant_context() {
        let err = ClientError::InvalidRequest("bad uri".to_string());
        assert_eq!(err.to_string(), "invalid request: bad uri");

        let err = ClientError::Serialization("key must be a string".to_string());
        assert_eq!(err.to_string(), "serialization failed: key must be a string");

        let err = ClientError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "transport failed: connection refused");
    }
}


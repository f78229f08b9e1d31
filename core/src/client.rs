//! Synchronous HTTP client with bag-backed headers.
//!
//! # Design
//! `HttpClient` holds a `HeaderBag` and the body of the last response.
//! Each verb method performs one blocking round trip and returns
//! `Ok(body)` or `Err(ClientError)` — transport failures are surfaced,
//! never swallowed. The last-response slot backs the `response()` and
//! `json()` accessors and is overwritten by every call: `Some(body)` on
//! success, `None` on any failure. Verbs take `&mut self`, so two
//! callers cannot race on the slot.
//!
//! The transport agent is scoped to a single call; the connection is
//! released on every exit path when the agent drops. No retries, no
//! timeouts, no redirect policy is exposed.

use serde_json::{Map, Value};
use tracing::{debug, warn};
use ureq::http::{Method, Request};
use ureq::Agent;

use crate::bag::{HeaderBag, ParamBag};
use crate::error::ClientError;
use crate::http::HttpMethod;

/// Blocking request/response wrapper over a `ureq` transport.
///
/// Headers come from the `HeaderBag` given at construction and are sent
/// verbatim on every request. `data` is JSON-encoded as the payload for
/// `POST` and `PATCH` only; the other verbs ignore it.
#[derive(Debug, Clone, Default)]
pub struct HttpClient {
    headers: HeaderBag,
    response: Option<String>,
}

impl HttpClient {
    /// Client with an empty header bag.
    pub fn new() -> Self {
        Self::with_headers(HeaderBag::new())
    }

    /// Client configured with the given headers. Performs no I/O.
    pub fn with_headers(headers: HeaderBag) -> Self {
        Self {
            headers,
            response: None,
        }
    }

    pub fn headers(&self) -> &HeaderBag {
        &self.headers
    }

    pub fn get(&mut self, endpoint: &str, data: &ParamBag) -> Result<String, ClientError> {
        self.request(HttpMethod::Get, endpoint, data)
    }

    pub fn post(&mut self, endpoint: &str, data: &ParamBag) -> Result<String, ClientError> {
        self.request(HttpMethod::Post, endpoint, data)
    }

    pub fn put(&mut self, endpoint: &str, data: &ParamBag) -> Result<String, ClientError> {
        self.request(HttpMethod::Put, endpoint, data)
    }

    pub fn patch(&mut self, endpoint: &str, data: &ParamBag) -> Result<String, ClientError> {
        self.request(HttpMethod::Patch, endpoint, data)
    }

    pub fn update(&mut self, endpoint: &str, data: &ParamBag) -> Result<String, ClientError> {
        self.request(HttpMethod::Update, endpoint, data)
    }

    pub fn delete(&mut self, endpoint: &str, data: &ParamBag) -> Result<String, ClientError> {
        self.request(HttpMethod::Delete, endpoint, data)
    }

    /// Raw body of the last response. `None` marks a fresh client or a
    /// failure on the most recent call.
    pub fn response(&self) -> Option<&str> {
        self.response.as_deref()
    }

    /// The last response body decoded as a JSON object. Empty when there
    /// is no body or it is not a JSON object; inspect `response()` to
    /// tell the two apart.
    pub fn json(&self) -> Map<String, Value> {
        parse_json_object(self.response.as_deref().unwrap_or(""))
    }

    /// Build and execute one round trip, recording the outcome in the
    /// response slot.
    fn request(
        &mut self,
        verb: HttpMethod,
        endpoint: &str,
        data: &ParamBag,
    ) -> Result<String, ClientError> {
        // Every verb call overwrites the slot, on every exit path; absence
        // marks a failed call.
        self.response = None;

        let method = Method::from_bytes(verb.as_str().as_bytes())
            .map_err(|e| ClientError::InvalidRequest(e.to_string()))?;

        let mut builder = Request::builder().method(method).uri(endpoint);
        for (name, value) in self.headers.iter() {
            builder = builder.header(name, value.as_str());
        }

        // Body-attachment policy: POST and PATCH carry the payload, the
        // other verbs send nothing regardless of `data`.
        let body = if verb.sends_body() {
            serde_json::to_vec(data).map_err(|e| ClientError::Serialization(e.to_string()))?
        } else {
            Vec::new()
        };

        let request = builder
            .body(body)
            .map_err(|e| ClientError::InvalidRequest(e.to_string()))?;

        // Non-2xx responses are data, not errors; only transport-level
        // failures reach the Err path. The agent lives for this call only.
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .allow_non_standard_methods(true)
            .build()
            .new_agent();

        debug!("dispatching {verb} {endpoint}");
        let mut response = match agent.run(request) {
            Ok(response) => response,
            Err(e) => {
                warn!("{verb} {endpoint} transport failure: {e}");
                return Err(ClientError::Transport(e.to_string()));
            }
        };

        let body = match response.body_mut().read_to_string() {
            Ok(body) => body,
            Err(e) => {
                warn!("{verb} {endpoint} body read failure: {e}");
                return Err(ClientError::Transport(e.to_string()));
            }
        };

        self.response = Some(body.clone());
        Ok(body)
    }
}

/// Decode a body as a JSON object, treating anything else as empty.
fn parse_json_object(body: &str) -> Map<String, Value> {
    serde_json::from_str(body).unwrap_or_default()
}

//! Parameter container and synchronous HTTP client core.
//!
//! # Overview
//! Two leaf components of a web-service stack: `ParameterBag`, a generic
//! ordered key-value store with optional-on-miss lookup, and `HttpClient`,
//! a blocking request/response wrapper that sends bag-backed headers and
//! keeps the last response body for `response()` / `json()` reads.
//!
//! # Design
//! - `ParameterBag<V>` preserves insertion order and has no error paths.
//! - `HttpClient` verbs return `Result<String, ClientError>` — transport
//!   failures surface as `Err` rather than a logged-and-swallowed sentinel.
//! - Only `POST` and `PATCH` attach a JSON payload; the remaining verbs
//!   ignore their `data` argument. The asymmetry is intentional.
//! - The non-standard `UPDATE` verb is sent literally.
//! - Integration tests exercise the client against the mock-server crate
//!   over real HTTP; schema drift between the two is caught there.

pub mod bag;
pub mod client;
pub mod error;
pub mod http;

pub use bag::{HeaderBag, ParamBag, ParameterBag};
pub use client::HttpClient;
pub use error::ClientError;
pub use http::HttpMethod;

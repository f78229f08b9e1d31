use std::collections::BTreeMap;

use axum::{
    http::{HeaderMap, Method},
    routing::any,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// JSON reflection of a request as the server received it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Echo {
    pub method: String,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

pub fn app() -> Router {
    Router::new()
        .route("/echo", any(echo))
        .route("/plain", any(plain))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Reflect the incoming request — method token, headers, and raw body —
/// back as JSON, for tests that assert on what actually hit the wire.
async fn echo(method: Method, headers: HeaderMap, body: String) -> Json<Echo> {
    let headers = headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                value.to_str().unwrap_or("").to_string(),
            )
        })
        .collect();
    Json(Echo {
        method: method.as_str().to_string(),
        headers,
        body,
    })
}

/// A body that is deliberately not valid JSON.
async fn plain() -> &'static str {
    "plain text, not json"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echo_roundtrips_through_json() {
        let echo = Echo {
            method: "UPDATE".to_string(),
            headers: BTreeMap::from([("authorization".to_string(), "Bearer X".to_string())]),
            body: r#"{"name":"x"}"#.to_string(),
        };
        let json = serde_json::to_string(&echo).unwrap();
        let back: Echo = serde_json::from_str(&json).unwrap();
        assert_eq!(back.method, echo.method);
        assert_eq!(back.headers, echo.headers);
        assert_eq!(back.body, echo.body);
    }
}

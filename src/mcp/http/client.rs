//! HTTP client construction and the shared GET call used by every relayed tool.
//!
//! This module provides:
//! - One pooled `reqwest` client per process, wrapped in tracing middleware
//! - A span backend naming every upstream request `prismhr-api-request`
//! - `prism_get`, the single place an authenticated PrismHR GET is issued

use std::time::Duration;

use http::Extensions;
use reqwest::{Request, Response, header::ACCEPT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, Result as MiddlewareResult};
use reqwest_tracing::{
    ReqwestOtelSpanBackend, TracingMiddleware, default_on_request_end, reqwest_otel_span,
};
use serde_json::Value;
use tracing::{Span, debug};

use crate::mcp::error::PrismError;

/// Header carrying the PEO session token on every business call.
pub const SESSION_HEADER: &str = "sessionId";

/// Prefix shared by every PrismHR REST path.
pub const SERVICES_PREFIX: &str = "/services/rest";

// Request bodies and headers are never recorded: they carry the password and session token.
struct PrismSpanBackend;

impl ReqwestOtelSpanBackend for PrismSpanBackend {
    fn on_request_start(req: &Request, _extension: &mut Extensions) -> Span {
        reqwest_otel_span!(name = "prismhr-api-request", req)
    }

    fn on_request_end(
        span: &Span,
        outcome: &MiddlewareResult<Response>,
        _extension: &mut Extensions,
    ) {
        default_on_request_end(span, outcome);
    }
}

/// Builds the pooled client shared by the authenticator and the relay.
///
/// # Errors
/// Returns `PrismError::Http` when the TLS backend cannot be initialised.
pub fn build_client(timeout: Duration) -> Result<ClientWithMiddleware, PrismError> {
    let inner = reqwest::Client::builder().timeout(timeout).build()?;
    Ok(ClientBuilder::new(inner)
        .with(TracingMiddleware::<PrismSpanBackend>::new())
        .build())
}

/// Full URL for an upstream path such as `/employee/v1/getEmployeeList`.
#[must_use]
pub fn service_url(base_url: &str, path: &str) -> String {
    format!("{base_url}{SERVICES_PREFIX}{path}")
}

/// Issues an authenticated GET and returns the parsed JSON body.
///
/// `query` is sent in order; repeated keys are kept as separate pairs.
///
/// # Errors
/// * `HttpMiddleware` / `Http` - the request could not be sent or timed out
/// * `Status` - the upstream answered with a non-2xx status
/// * `Serialization` - the body is not JSON
pub async fn prism_get(
    client: &ClientWithMiddleware,
    url: &str,
    session_id: &str,
    query: &[(String, String)],
) -> Result<Value, PrismError> {
    debug!(%url, params = query.len(), "PrismHR GET");

    let response = client
        .get(url)
        .query(query)
        .header(SESSION_HEADER, session_id)
        .header(ACCEPT, "application/json")
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(PrismError::from_status(status, &body));
    }

    Ok(serde_json::from_str(&body)?)
}

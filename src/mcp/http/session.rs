//! PEO session authentication.
//!
//! Every relayed call needs a `sessionId` from `login/v1/createPeoSession`. By default a
//! fresh session is opened per call. When a session TTL is configured the token is cached
//! and refreshed by a single writer once it nears expiry.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::header::ACCEPT;
use reqwest_middleware::ClientWithMiddleware;
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::mcp::{
    config::Credentials,
    error::PrismError,
    http::client::service_url,
};

pub const LOGIN_PATH: &str = "/login/v1/createPeoSession";

/// Upper bound on how early a cached session is refreshed before its TTL runs out.
const REFRESH_BUFFER: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    error_code: Option<String>,
    error_message: Option<String>,
    session_id: Option<String>,
}

/// Opens a PEO session and returns its id, or `None` on any failure.
///
/// Failures (rejected credentials, transport errors, timeouts, unparseable bodies) are
/// logged here and never propagated.
pub async fn authenticate(
    client: &ClientWithMiddleware,
    base_url: &str,
    credentials: &Credentials,
) -> Option<String> {
    match create_peo_session(client, base_url, credentials).await {
        Ok(session_id) => Some(session_id),
        Err(e) => {
            error!(peo_id = %credentials.peo_id, "Authentication failed: {e}");
            None
        }
    }
}

async fn create_peo_session(
    client: &ClientWithMiddleware,
    base_url: &str,
    credentials: &Credentials,
) -> Result<String, PrismError> {
    let url = service_url(base_url, LOGIN_PATH);
    let form = [
        ("username", credentials.username.as_str()),
        ("password", credentials.password.as_str()),
        ("peoId", credentials.peo_id.as_str()),
    ];

    let response = client
        .post(&url)
        .header(ACCEPT, "application/json")
        .form(&form)
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(PrismError::from_status(status, &body));
    }

    let login: LoginResponse = serde_json::from_str(&body)?;
    match (login.error_code.as_deref(), login.session_id) {
        (Some("0"), Some(session_id)) => Ok(session_id),
        (Some("0"), None) => Err(anyhow::anyhow!("login succeeded without a sessionId").into()),
        (code, _) => Err(anyhow::anyhow!(
            "{} (errorCode {})",
            login.error_message.as_deref().unwrap_or("Unknown error"),
            code.unwrap_or("missing")
        )
        .into()),
    }
}

#[derive(Clone, Debug)]
struct CachedSession {
    session_id: String,
    opened_at: DateTime<Utc>,
}

impl CachedSession {
    fn is_fresh(&self, ttl: Duration) -> bool {
        let usable = ttl.saturating_sub(REFRESH_BUFFER.min(ttl / 2));
        chrono::Duration::from_std(usable)
            .is_ok_and(|usable| Utc::now() < self.opened_at + usable)
    }
}

/// Hands out session ids, reusing them only when a TTL is configured.
#[derive(Debug)]
pub struct SessionManager {
    ttl: Option<Duration>,
    cached: Mutex<Option<CachedSession>>,
}

impl SessionManager {
    #[must_use]
    pub fn new(ttl: Option<Duration>) -> Self {
        Self {
            ttl,
            cached: Mutex::new(None),
        }
    }

    /// Returns a usable session id, authenticating when nothing fresh is cached.
    pub async fn session(
        &self,
        client: &ClientWithMiddleware,
        base_url: &str,
        credentials: &Credentials,
    ) -> Option<String> {
        let Some(ttl) = self.ttl else {
            return authenticate(client, base_url, credentials).await;
        };

        // Held across the refresh so concurrent callers wait for one login.
        let mut cached = self.cached.lock().await;
        if let Some(session) = cached.as_ref().filter(|s| s.is_fresh(ttl)) {
            debug!("Reusing cached PrismHR session");
            return Some(session.session_id.clone());
        }

        let session_id = authenticate(client, base_url, credentials).await?;
        info!(ttl_secs = ttl.as_secs(), "Opened new PrismHR session");
        *cached = Some(CachedSession {
            session_id: session_id.clone(),
            opened_at: Utc::now(),
        });
        Some(session_id)
    }

    /// Drops the cached session if it is still `rejected`, so the next call re-authenticates.
    ///
    /// A session refreshed by another call in the meantime is kept.
    pub async fn invalidate(&self, rejected: &str) {
        if self.ttl.is_none() {
            return;
        }
        let mut cached = self.cached.lock().await;
        if cached.as_ref().is_some_and(|s| s.session_id == rejected) {
            *cached = None;
            info!("Dropped cached PrismHR session");
        }
    }
}

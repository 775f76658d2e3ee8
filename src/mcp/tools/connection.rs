//! Tool for checking PrismHR connectivity.
//!
//! Opens a fresh session with the configured credentials, bypassing any cached session,
//! and reports which credentials are missing when it cannot try.

use serde_json::{Value, json};
use tracing::{info, warn};

use crate::mcp::{http::authenticate, tools::relay::Relay};

pub async fn test_connection(relay: &Relay) -> Value {
    let config = relay.config();
    let base_url = config.base_url();

    let Ok(credentials) = config.credentials() else {
        let status = config.credential_status();
        warn!(?status, "Connection test skipped: credentials missing");
        return json!({
            "success": false,
            "error": "Missing PrismHR credentials. Please set PRISMHR_USERNAME, PRISMHR_PASSWORD, and PRISMHR_PEO_ID environment variables.",
            "credentials_status": {
                "username": status.username,
                "password": status.password,
                "peo_id": status.peo_id,
            },
        });
    };

    match authenticate(relay.client(), base_url, &credentials).await {
        Some(session_id) => {
            info!(%base_url, "Connection test successful");
            json!({
                "success": true,
                "message": "Connection test successful",
                "session_id": session_id,
                "base_url": base_url,
            })
        }
        None => json!({
            "success": false,
            "error": "Authentication failed - check credentials",
            "base_url": base_url,
        }),
    }
}

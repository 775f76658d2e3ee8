mod common;

use anyhow::Result;
use prismhr_mcp::mcp::{config::PrismConfig, tools::{connection::test_connection, relay::Relay}};
use serde_json::json;

use common::StubUpstream;

#[tokio::test]
async fn reports_session_and_base_url_on_success() -> Result<()> {
    let upstream = StubUpstream::start().await?;
    let relay = upstream.relay();

    let report = test_connection(&relay).await;

    assert_eq!(
        report,
        json!({
            "success": true,
            "message": "Connection test successful",
            "session_id": "session-1",
            "base_url": upstream.base_url,
        })
    );
    Ok(())
}

#[tokio::test]
async fn reports_authentication_failure() -> Result<()> {
    let upstream = StubUpstream::rejecting_logins().await?;
    let relay = upstream.relay();

    let report = test_connection(&relay).await;

    assert_eq!(
        report,
        json!({
            "success": false,
            "error": "Authentication failed - check credentials",
            "base_url": upstream.base_url,
        })
    );
    assert_eq!(upstream.api_hits(), 0);
    Ok(())
}

#[tokio::test]
async fn reports_which_credentials_are_missing() -> Result<()> {
    let upstream = StubUpstream::start().await?;
    let config = PrismConfig::from_lookup(|key| match key {
        "PRISMHR_USERNAME" => Some("api-user".to_string()),
        "PRISMHR_BASE_URL" => Some(upstream.base_url.clone()),
        _ => None,
    })?;
    let relay = Relay::new(config)?;

    let report = test_connection(&relay).await;

    assert_eq!(report["success"], json!(false));
    assert!(
        report["error"]
            .as_str()
            .unwrap()
            .starts_with("Missing PrismHR credentials")
    );
    assert_eq!(
        report["credentials_status"],
        json!({ "username": true, "password": false, "peo_id": false })
    );
    assert_eq!(upstream.login_hits(), 0);
    Ok(())
}

#[tokio::test]
async fn always_opens_a_fresh_session() -> Result<()> {
    let upstream = StubUpstream::start().await?;
    let relay = Relay::new(
        upstream
            .config()
            .with_session_ttl(std::time::Duration::from_secs(600)),
    )?;

    let first = test_connection(&relay).await;
    let second = test_connection(&relay).await;

    assert_eq!(first["session_id"], json!("session-1"));
    assert_eq!(second["session_id"], json!("session-2"));
    Ok(())
}

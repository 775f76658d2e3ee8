mod common;

use std::time::Duration;

use anyhow::Result;
use axum::http::StatusCode;
use prismhr_mcp::mcp::{
    catalog,
    config::PrismConfig,
    error::PrismError,
    tools::relay::Relay,
};
use serde_json::json;

use common::{PASSWORD, PEO_ID, StubUpstream, USERNAME, args, body, call, query_pairs};

fn pairs(list: &[(&str, &str)]) -> Vec<(String, String)> {
    list.iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[tokio::test]
async fn employee_list_is_relayed_verbatim() -> Result<()> {
    let upstream = StubUpstream::start().await?;
    let relay = upstream.relay();

    let result = call(&relay, "get_employee_list", json!({ "client_id": "132" })).await;

    assert_eq!(result.is_error, Some(false));
    assert_eq!(body(&result), json!({ "employees": [] }));
    assert_eq!(upstream.login_hits(), 1);
    assert_eq!(upstream.api_hits(), 1);

    let calls = upstream.calls();
    assert_eq!(calls[0].path, "/services/rest/employee/v1/getEmployeeList");
    assert_eq!(query_pairs(calls[0].query.as_deref()), pairs(&[("clientId", "132")]));
    assert_eq!(calls[0].session_id.as_deref(), Some("session-1"));
    Ok(())
}

#[tokio::test]
async fn key_order_and_wide_integers_survive_the_relay() -> Result<()> {
    let raw = r#"{"zeta":1,"alpha":123456789012345678901234567890,"mid":{"y":[3,1,2],"b":-98765432109876543210}}"#;
    let upstream = StubUpstream::answering_raw(raw).await?;
    let relay = upstream.relay();

    let result = call(&relay, "get_client_master", json!({ "client_id": "132" })).await;

    assert_eq!(serde_json::to_string(&body(&result))?, raw);
    Ok(())
}

#[tokio::test]
async fn login_posts_the_configured_credentials() -> Result<()> {
    let upstream = StubUpstream::start().await?;
    let relay = upstream.relay();

    call(&relay, "get_client_list", json!({})).await;

    let forms = upstream.login_forms();
    assert_eq!(forms.len(), 1);
    assert_eq!(forms[0].get("username").map(String::as_str), Some(USERNAME));
    assert_eq!(forms[0].get("password").map(String::as_str), Some(PASSWORD));
    assert_eq!(forms[0].get("peoId").map(String::as_str), Some(PEO_ID));
    Ok(())
}

#[tokio::test]
async fn rejected_login_stops_before_the_business_call() -> Result<()> {
    let upstream = StubUpstream::rejecting_logins().await?;
    let relay = upstream.relay();

    let result = call(&relay, "get_employee_list", json!({ "client_id": "132" })).await;

    assert_eq!(result.is_error, Some(true));
    assert_eq!(body(&result), json!({ "error": "Authentication failed" }));
    assert_eq!(upstream.login_hits(), 1);
    assert_eq!(upstream.api_hits(), 0);
    Ok(())
}

#[tokio::test]
async fn missing_peo_id_makes_no_network_calls() -> Result<()> {
    let upstream = StubUpstream::start().await?;
    let config = PrismConfig::from_lookup(|key| match key {
        "PRISMHR_USERNAME" => Some(USERNAME.to_string()),
        "PRISMHR_PASSWORD" => Some(PASSWORD.to_string()),
        "PRISMHR_BASE_URL" => Some(upstream.base_url.clone()),
        _ => None,
    })?;
    let relay = Relay::new(config)?;

    let result = call(&relay, "get_employee_list", json!({ "client_id": "132" })).await;

    assert_eq!(result.is_error, Some(true));
    assert_eq!(body(&result), json!({ "error": "Missing PrismHR credentials" }));
    assert_eq!(upstream.login_hits(), 0);
    assert_eq!(upstream.api_hits(), 0);
    Ok(())
}

#[tokio::test]
async fn missing_required_argument_makes_no_network_calls() -> Result<()> {
    let upstream = StubUpstream::start().await?;
    let relay = upstream.relay();

    let result = call(&relay, "get_employee", json!({ "client_id": "132" })).await;
    assert_eq!(
        body(&result),
        json!({ "error": "Missing required parameter: employee_id" })
    );

    let Some(endpoint) = catalog::find("get_employee") else {
        panic!("get_employee missing from catalog");
    };
    let direct = relay
        .execute(endpoint, &args(json!({ "client_id": "132" })))
        .await;
    assert!(matches!(direct, Err(PrismError::InvalidParams(_))));

    assert_eq!(upstream.login_hits(), 0);
    assert_eq!(upstream.api_hits(), 0);
    Ok(())
}

#[tokio::test]
async fn list_arguments_become_repeated_keys() -> Result<()> {
    let upstream = StubUpstream::start().await?;
    let relay = upstream.relay();

    call(
        &relay,
        "get_batch_status",
        json!({ "client_id": "132", "batch_ids": ["1001", "1002", "1003"] }),
    )
    .await;

    let calls = upstream.calls();
    assert_eq!(calls[0].path, "/services/rest/payroll/v1/getBatchStatus");
    assert_eq!(
        query_pairs(calls[0].query.as_deref()),
        pairs(&[
            ("clientId", "132"),
            ("batchIds", "1001"),
            ("batchIds", "1002"),
            ("batchIds", "1003"),
        ])
    );
    Ok(())
}

#[tokio::test]
async fn false_flag_is_sent_and_omitted_params_are_not() -> Result<()> {
    let upstream = StubUpstream::start().await?;
    let relay = upstream.relay();

    call(&relay, "get_client_list", json!({ "in_active": false })).await;
    call(&relay, "get_employee_list", json!({ "client_id": "132" })).await;

    let calls = upstream.calls();
    assert_eq!(
        query_pairs(calls[0].query.as_deref()),
        pairs(&[("inActive", "false")])
    );
    let employee_query = query_pairs(calls[1].query.as_deref());
    assert!(employee_query.iter().all(|(k, _)| k != "statusClass" && k != "typeClass"));
    Ok(())
}

#[tokio::test]
async fn upstream_error_status_is_reported_with_the_operation_title() -> Result<()> {
    let upstream = StubUpstream::answering(
        StatusCode::INTERNAL_SERVER_ERROR,
        &json!({ "message": "boom" }),
    )
    .await?;
    let relay = upstream.relay();

    let result = call(&relay, "get_employee_list", json!({ "client_id": "132" })).await;

    assert_eq!(result.is_error, Some(true));
    let error_body = body(&result);
    let message = error_body["error"].as_str().unwrap();
    assert!(message.starts_with("Get employee list failed: "), "{message}");
    assert!(message.contains("500"), "{message}");
    assert!(message.contains("boom"), "{message}");
    Ok(())
}

#[tokio::test]
async fn upstream_business_errors_pass_through_untouched() -> Result<()> {
    let rejection = json!({ "errorCode": "PR-117", "errorMessage": "Client not found" });
    let upstream = StubUpstream::answering(StatusCode::OK, &rejection).await?;
    let relay = upstream.relay();

    let result = call(&relay, "get_client_master", json!({ "client_id": "999" })).await;

    assert_eq!(result.is_error, Some(false));
    assert_eq!(body(&result), rejection);
    Ok(())
}

#[tokio::test]
async fn each_call_logs_in_when_sessions_are_not_cached() -> Result<()> {
    let upstream = StubUpstream::start().await?;
    let relay = upstream.relay();

    for _ in 0..3 {
        call(&relay, "get_employee_list", json!({ "client_id": "132" })).await;
    }

    assert_eq!(upstream.login_hits(), 3);
    assert_eq!(upstream.api_hits(), 3);
    Ok(())
}

#[tokio::test]
async fn cached_session_is_reused_within_its_ttl() -> Result<()> {
    let upstream = StubUpstream::start().await?;
    let relay = Relay::new(
        upstream
            .config()
            .with_session_ttl(Duration::from_secs(600)),
    )?;

    for _ in 0..3 {
        call(&relay, "get_employee_list", json!({ "client_id": "132" })).await;
    }

    assert_eq!(upstream.login_hits(), 1);
    assert_eq!(upstream.api_hits(), 3);
    assert!(
        upstream
            .calls()
            .iter()
            .all(|c| c.session_id.as_deref() == Some("session-1"))
    );
    Ok(())
}

#[tokio::test]
async fn unauthorized_response_drops_the_cached_session() -> Result<()> {
    let upstream =
        StubUpstream::answering(StatusCode::UNAUTHORIZED, &json!({ "message": "expired" })).await?;
    let relay = Relay::new(
        upstream
            .config()
            .with_session_ttl(Duration::from_secs(600)),
    )?;

    call(&relay, "get_employee_list", json!({ "client_id": "132" })).await;
    call(&relay, "get_employee_list", json!({ "client_id": "132" })).await;

    assert_eq!(upstream.login_hits(), 2);
    let sessions: Vec<_> = upstream
        .calls()
        .into_iter()
        .filter_map(|c| c.session_id)
        .collect();
    assert_eq!(sessions, ["session-1", "session-2"]);
    Ok(())
}

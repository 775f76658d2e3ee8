//! Local stand-in for the PrismHR REST API.
//!
//! Serves `createPeoSession` and answers every other path with a configurable JSON body,
//! recording what the relay sent so tests can assert on the wire traffic.

#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use anyhow::Result;
use axum::{
    Form, Json, Router,
    extract::State,
    http::{HeaderMap, HeaderName, StatusCode, Uri, header::CONTENT_TYPE},
    routing::post,
};
use prismhr_mcp::mcp::{catalog, config::PrismConfig, tools::relay::Relay};
use rmcp::model::CallToolResult;
use serde_json::{Value, json};
use tokio::{net::TcpListener, task::JoinHandle};

pub const USERNAME: &str = "api-user";
pub const PASSWORD: &str = "s3cret";
pub const PEO_ID: &str = "624*RD";

const EMPLOYEES: &str = r#"{"employees":[]}"#;

#[derive(Clone, Debug)]
pub struct RecordedCall {
    pub path: String,
    pub query: Option<String>,
    pub session_id: Option<String>,
}

#[derive(Clone)]
struct Script {
    accept_login: bool,
    api_status: StatusCode,
    api_body: String,
    login_hits: Arc<AtomicUsize>,
    api_hits: Arc<AtomicUsize>,
    login_forms: Arc<Mutex<Vec<HashMap<String, String>>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

pub struct StubUpstream {
    pub base_url: String,
    script: Script,
    handle: JoinHandle<()>,
}

impl StubUpstream {
    /// Accepts logins and answers business calls with `200 {"employees": []}`.
    pub async fn start() -> Result<Self> {
        Self::start_with(true, StatusCode::OK, EMPLOYEES.to_string()).await
    }

    pub async fn rejecting_logins() -> Result<Self> {
        Self::start_with(false, StatusCode::OK, EMPLOYEES.to_string()).await
    }

    pub async fn answering(status: StatusCode, body: &Value) -> Result<Self> {
        Self::start_with(true, status, body.to_string()).await
    }

    /// Answers business calls with exactly `body`, byte for byte.
    pub async fn answering_raw(body: &str) -> Result<Self> {
        Self::start_with(true, StatusCode::OK, body.to_string()).await
    }

    async fn start_with(accept_login: bool, api_status: StatusCode, api_body: String) -> Result<Self> {
        let script = Script {
            accept_login,
            api_status,
            api_body,
            login_hits: Arc::new(AtomicUsize::new(0)),
            api_hits: Arc::new(AtomicUsize::new(0)),
            login_forms: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        };

        let router = Router::new()
            .route(
                "/services/rest/login/v1/createPeoSession",
                post(create_peo_session),
            )
            .fallback(business_call)
            .with_state(script.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let base_url = format!("http://{}", listener.local_addr()?);
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Ok(Self {
            base_url,
            script,
            handle,
        })
    }

    pub fn login_hits(&self) -> usize {
        self.script.login_hits.load(Ordering::Acquire)
    }

    pub fn api_hits(&self) -> usize {
        self.script.api_hits.load(Ordering::Acquire)
    }

    pub fn login_forms(&self) -> Vec<HashMap<String, String>> {
        self.script.login_forms.lock().unwrap().clone()
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.script.calls.lock().unwrap().clone()
    }

    /// Config with all credentials pointing at this stub.
    pub fn config(&self) -> PrismConfig {
        PrismConfig::new(&self.base_url).with_credentials(USERNAME, PASSWORD, PEO_ID)
    }

    pub fn relay(&self) -> Relay {
        Relay::new(self.config()).unwrap()
    }
}

impl Drop for StubUpstream {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn create_peo_session(
    State(script): State<Script>,
    Form(form): Form<HashMap<String, String>>,
) -> Json<Value> {
    let hit = script.login_hits.fetch_add(1, Ordering::AcqRel) + 1;
    script.login_forms.lock().unwrap().push(form);

    if script.accept_login {
        Json(json!({
            "errorCode": "0",
            "errorMessage": "",
            "sessionId": format!("session-{hit}"),
        }))
    } else {
        Json(json!({
            "errorCode": "1",
            "errorMessage": "Invalid username or password",
        }))
    }
}

async fn business_call(
    State(script): State<Script>,
    uri: Uri,
    headers: HeaderMap,
) -> (StatusCode, [(HeaderName, &'static str); 1], String) {
    script.api_hits.fetch_add(1, Ordering::AcqRel);
    script.calls.lock().unwrap().push(RecordedCall {
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        session_id: headers
            .get("sessionid")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    });
    (
        script.api_status,
        [(CONTENT_TYPE, "application/json")],
        script.api_body.clone(),
    )
}

/// Splits a raw query string into its pairs, keeping repeats and order.
///
/// Values are compared undecoded, so tests stick to URL-safe identifiers.
pub fn query_pairs(query: Option<&str>) -> Vec<(String, String)> {
    query
        .unwrap_or_default()
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (key.to_string(), value.to_string())
        })
        .collect()
}

pub fn args(value: Value) -> serde_json::Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("tool arguments must be an object, got {other}"),
    }
}

/// Calls a catalog tool the way the MCP handler does.
pub async fn call(relay: &Relay, tool: &str, arguments: Value) -> CallToolResult {
    let endpoint = catalog::find(tool).unwrap();
    relay.call_tool(endpoint, &args(arguments)).await
}

/// The JSON object a tool call returned, success or failure.
pub fn body(result: &CallToolResult) -> Value {
    result.structured_content.clone().unwrap()
}

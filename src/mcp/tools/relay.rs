//! Generic relay shared by every catalog tool.
//!
//! A call goes through the same steps whatever the endpoint:
//! 1. Validate the arguments against the endpoint's parameter table and build the query
//! 2. Check credentials
//! 3. Obtain a session id
//! 4. GET the endpoint with the `sessionId` header and return the JSON body
//!
//! Validation failures never touch the network, and an authentication failure stops the
//! call before the endpoint is requested.

use std::sync::Arc;

use reqwest_middleware::ClientWithMiddleware;
use rmcp::model::{CallToolResult, JsonObject};
use serde_json::Value;
use tracing::{error, info};

use crate::mcp::{
    catalog::{Endpoint, ParamKind, ParamSpec},
    config::PrismConfig,
    error::PrismError,
    http::{SessionManager, build_client, prism_get, service_url},
};

/// Executes catalog endpoints against PrismHR.
///
/// Cheap to share: wrap in an `Arc` and hand a clone to each MCP session.
#[derive(Debug)]
pub struct Relay {
    config: Arc<PrismConfig>,
    client: ClientWithMiddleware,
    sessions: SessionManager,
}

impl Relay {
    /// # Errors
    /// Returns `PrismError::Http` when the HTTP client cannot be built.
    pub fn new(config: PrismConfig) -> Result<Self, PrismError> {
        let client = build_client(config.timeout())?;
        let sessions = SessionManager::new(config.session_ttl());
        Ok(Self {
            config: Arc::new(config),
            client,
            sessions,
        })
    }

    #[must_use]
    pub fn config(&self) -> &PrismConfig {
        &self.config
    }

    pub(crate) const fn client(&self) -> &ClientWithMiddleware {
        &self.client
    }

    /// Runs one endpoint and returns the upstream JSON body untouched.
    ///
    /// # Errors
    /// * `InvalidParams` - a required argument is missing, unknown, or of the wrong type
    /// * `MissingCredentials` - username, password or PEO id is not configured
    /// * `AuthenticationFailed` - no session could be opened
    /// * `Status`, `Http`, `HttpMiddleware`, `Serialization` - the endpoint call failed
    pub async fn execute(
        &self,
        endpoint: &Endpoint,
        arguments: &JsonObject,
    ) -> Result<Value, PrismError> {
        let query = build_query(endpoint, arguments)?;
        let credentials = self.config.credentials()?;

        let session_id = self
            .sessions
            .session(&self.client, self.config.base_url(), &credentials)
            .await
            .ok_or(PrismError::AuthenticationFailed)?;

        let url = service_url(self.config.base_url(), endpoint.path);
        let result = prism_get(&self.client, &url, &session_id, &query).await;
        if result.as_ref().is_err_and(PrismError::is_unauthorized) {
            self.sessions.invalidate(&session_id).await;
        }
        result
    }

    /// Runs one endpoint and wraps the outcome for the MCP client.
    ///
    /// Failures are returned as error results carrying the `{"error": ...}` object, so the
    /// caller always receives a well formed response.
    pub async fn call_tool(&self, endpoint: &Endpoint, arguments: &JsonObject) -> CallToolResult {
        match self.execute(endpoint, arguments).await {
            Ok(body) => {
                info!(tool = endpoint.name, "PrismHR call succeeded");
                CallToolResult::structured(body)
            }
            Err(e) => CallToolResult::structured_error(report_failure(endpoint, e)),
        }
    }
}

fn report_failure(endpoint: &Endpoint, err: PrismError) -> Value {
    let title = endpoint.title();
    error!(tool = endpoint.name, "{}", err.describe(&title));
    err.into_error_body(&title)
}

/// Validates `arguments` against the endpoint and renders the upstream query.
///
/// Pairs follow the parameter table order. List parameters produce one pair per element,
/// in the order given. Optional parameters that are absent, `null`, or empty strings are
/// left out.
///
/// # Errors
/// Returns `PrismError::InvalidParams` for unknown, missing, or mistyped arguments.
pub fn build_query(
    endpoint: &Endpoint,
    arguments: &JsonObject,
) -> Result<Vec<(String, String)>, PrismError> {
    if let Some(unknown) = arguments
        .keys()
        .find(|name| !endpoint.params.iter().any(|p| p.arg_name() == **name))
    {
        return Err(PrismError::InvalidParams(format!(
            "Unknown parameter: {unknown}"
        )));
    }

    let mut query = Vec::with_capacity(endpoint.params.len());
    for param in endpoint.params {
        let name = param.arg_name();
        let values = match arguments.get(&name) {
            None | Some(Value::Null) => Vec::new(),
            Some(value) => encode(param, &name, value)?,
        };

        if values.is_empty() {
            if param.required {
                return Err(PrismError::InvalidParams(format!(
                    "Missing required parameter: {name}"
                )));
            }
            continue;
        }
        query.extend(values.into_iter().map(|v| (param.key.to_string(), v)));
    }
    Ok(query)
}

fn encode(param: &ParamSpec, name: &str, value: &Value) -> Result<Vec<String>, PrismError> {
    let invalid = |expected: &str| {
        PrismError::InvalidParams(format!("Invalid parameter {name}: expected {expected}"))
    };

    match param.kind {
        ParamKind::Text => {
            let text = scalar_text(value).ok_or_else(|| invalid("a string"))?;
            Ok(non_blank(text).into_iter().collect())
        }
        ParamKind::List => match value {
            Value::Array(items) => items
                .iter()
                .map(|item| scalar_text(item).ok_or_else(|| invalid("an array of strings")))
                .filter(|item| !item.as_ref().is_ok_and(|s| s.trim().is_empty()))
                .collect(),
            scalar => {
                let text = scalar_text(scalar).ok_or_else(|| invalid("an array of strings"))?;
                Ok(non_blank(text).into_iter().collect())
            }
        },
        ParamKind::Flag => match value {
            Value::Bool(flag) => Ok(vec![flag.to_string()]),
            Value::String(s) if s.eq_ignore_ascii_case("true") => Ok(vec!["true".to_string()]),
            Value::String(s) if s.eq_ignore_ascii_case("false") => Ok(vec!["false".to_string()]),
            _ => Err(invalid("a boolean")),
        },
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn non_blank(text: String) -> Option<String> {
    (!text.trim().is_empty()).then_some(text)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::mcp::catalog;

    fn args(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            other => panic!("test arguments must be an object, got {other}"),
        }
    }

    fn endpoint(name: &str) -> &'static Endpoint {
        catalog::find(name).unwrap_or_else(|| panic!("{name} missing from catalog"))
    }

    fn pairs(list: &[(&str, &str)]) -> Vec<(String, String)> {
        list.iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn required_params_are_renamed_to_wire_keys() -> Result<(), PrismError> {
        let query = build_query(
            endpoint("get_employee"),
            &args(json!({ "client_id": "132", "employee_id": "J00809" })),
        )?;
        assert_eq!(query, pairs(&[("clientId", "132"), ("employeeId", "J00809")]));
        Ok(())
    }

    #[test]
    fn omitted_optional_params_never_appear() -> Result<(), PrismError> {
        let query = build_query(
            endpoint("get_employee_list"),
            &args(json!({ "client_id": "132", "status_class": null, "type_class": "" })),
        )?;
        assert_eq!(query, pairs(&[("clientId", "132")]));
        Ok(())
    }

    #[test]
    fn supplied_optional_params_appear_once() -> Result<(), PrismError> {
        let query = build_query(
            endpoint("get_employee_list"),
            &args(json!({ "type_class": "F", "client_id": "132", "status_class": "A" })),
        )?;
        assert_eq!(
            query,
            pairs(&[("clientId", "132"), ("statusClass", "A"), ("typeClass", "F")])
        );
        Ok(())
    }

    #[test]
    fn list_params_repeat_the_key_in_input_order() -> Result<(), PrismError> {
        let query = build_query(
            endpoint("get_history"),
            &args(json!({ "client_id": "132", "employee_id": "E1", "type": ["P", "S", "J"] })),
        )?;
        assert_eq!(
            query,
            pairs(&[
                ("clientId", "132"),
                ("employeeId", "E1"),
                ("type", "P"),
                ("type", "S"),
                ("type", "J"),
            ])
        );
        Ok(())
    }

    #[test]
    fn scalar_for_list_param_is_a_single_element() -> Result<(), PrismError> {
        let query = build_query(
            endpoint("get_absence_journal"),
            &args(json!({ "client_id": "132", "journal_id": "J-1" })),
        )?;
        assert_eq!(query, pairs(&[("clientId", "132"), ("journalId", "J-1")]));
        Ok(())
    }

    #[test]
    fn false_flag_is_sent_lowercase() -> Result<(), PrismError> {
        let query = build_query(
            endpoint("get_client_list"),
            &args(json!({ "in_active": false })),
        )?;
        assert_eq!(query, pairs(&[("inActive", "false")]));

        let query = build_query(
            endpoint("get_client_list"),
            &args(json!({ "in_active": "TRUE" })),
        )?;
        assert_eq!(query, pairs(&[("inActive", "true")]));
        Ok(())
    }

    #[test]
    fn numbers_are_accepted_as_text() -> Result<(), PrismError> {
        let query = build_query(
            endpoint("get_job_applicant_list"),
            &args(json!({ "client_id": 132, "count": 10 })),
        )?;
        assert_eq!(query, pairs(&[("clientId", "132"), ("count", "10")]));
        Ok(())
    }

    #[test]
    fn missing_required_param_is_rejected() {
        let err = build_query(endpoint("get_employee"), &args(json!({ "client_id": "132" })));
        assert!(matches!(
            err,
            Err(PrismError::InvalidParams(msg)) if msg == "Missing required parameter: employee_id"
        ));
    }

    #[test]
    fn empty_required_list_is_missing() {
        let err = build_query(
            endpoint("get_batch_status"),
            &args(json!({ "client_id": "132", "batch_ids": [] })),
        );
        assert!(matches!(err, Err(PrismError::InvalidParams(_))));
    }

    #[test]
    fn unknown_param_is_rejected() {
        let err = build_query(
            endpoint("get_employee_list"),
            &args(json!({ "client_id": "132", "clientId": "132" })),
        );
        assert!(matches!(
            err,
            Err(PrismError::InvalidParams(msg)) if msg == "Unknown parameter: clientId"
        ));
    }

    #[test]
    fn mistyped_params_are_rejected() {
        let err = build_query(
            endpoint("get_client_list"),
            &args(json!({ "in_active": "sometimes" })),
        );
        assert!(matches!(err, Err(PrismError::InvalidParams(_))));

        let err = build_query(
            endpoint("get_employee_list"),
            &args(json!({ "client_id": { "id": "132" } })),
        );
        assert!(matches!(err, Err(PrismError::InvalidParams(_))));
    }

    #[test]
    fn every_endpoint_rejects_an_empty_call_when_it_has_required_params() {
        let empty = JsonObject::new();
        for endpoint in catalog::endpoints() {
            let has_required = endpoint.params.iter().any(|p| p.required);
            let result = build_query(endpoint, &empty);
            assert_eq!(result.is_err(), has_required, "{}", endpoint.name);
        }
    }
}

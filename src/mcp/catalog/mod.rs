//! Declarative table of every PrismHR endpoint exposed as an MCP tool.
//!
//! Each upstream module has its own file holding an `ENDPOINTS` slice. An `Endpoint` names
//! the tool, the upstream path below `/services/rest`, a description for the agent, and the
//! parameters it accepts. The relay in `tools::relay` interprets these entries; nothing here
//! performs I/O.
//!
//! Parameters are declared by their upstream (camelCase) key. The tool argument an agent
//! passes is the snake_case form of that key, e.g. `clientId` is exposed as `client_id`.

mod applicant;
mod benefits;
mod client_master;
mod code_files;
mod deduction;
mod document_service;
mod employee;
mod general_ledger;
mod login;
mod new_hire;
mod onboard;
mod payroll;
mod prism_security;
mod sign_on;
mod staffing;
mod subscription;
mod system;
mod tax_rate;
mod timesheet;

use std::{
    collections::HashMap,
    sync::{Arc, LazyLock},
};

use rmcp::model::{JsonObject, Tool, ToolAnnotations};
use serde_json::{Value, json};

/// How a parameter value is validated and written to the query string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamKind {
    /// A single string value.
    Text,
    /// Several values, sent as one `key=value` pair per element.
    List,
    /// A boolean, sent as `true` / `false`.
    Flag,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParamSpec {
    pub key: &'static str,
    pub kind: ParamKind,
    pub required: bool,
    pub description: &'static str,
}

impl ParamSpec {
    const fn new(
        key: &'static str,
        kind: ParamKind,
        required: bool,
        description: &'static str,
    ) -> Self {
        Self {
            key,
            kind,
            required,
            description,
        }
    }

    pub const fn text(key: &'static str, description: &'static str) -> Self {
        Self::new(key, ParamKind::Text, true, description)
    }

    pub const fn opt_text(key: &'static str, description: &'static str) -> Self {
        Self::new(key, ParamKind::Text, false, description)
    }

    pub const fn list(key: &'static str, description: &'static str) -> Self {
        Self::new(key, ParamKind::List, true, description)
    }

    pub const fn opt_list(key: &'static str, description: &'static str) -> Self {
        Self::new(key, ParamKind::List, false, description)
    }

    pub const fn opt_flag(key: &'static str, description: &'static str) -> Self {
        Self::new(key, ParamKind::Flag, false, description)
    }

    /// The argument name agents use for this parameter.
    #[must_use]
    pub fn arg_name(&self) -> String {
        snake_case(self.key)
    }

    fn schema(&self) -> Value {
        match self.kind {
            ParamKind::Text => json!({ "type": "string", "description": self.description }),
            ParamKind::List => json!({
                "type": "array",
                "items": { "type": "string" },
                "description": self.description,
            }),
            ParamKind::Flag => json!({ "type": "boolean", "description": self.description }),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Endpoint {
    /// Tool name, e.g. `get_employee_list`.
    pub name: &'static str,
    /// Path below `/services/rest`, e.g. `/employee/v1/getEmployeeList`.
    pub path: &'static str,
    pub summary: &'static str,
    pub params: &'static [ParamSpec],
}

impl Endpoint {
    pub const fn new(
        name: &'static str,
        path: &'static str,
        summary: &'static str,
        params: &'static [ParamSpec],
    ) -> Self {
        Self {
            name,
            path,
            summary,
            params,
        }
    }

    /// Human readable name used in logs and error messages, e.g. `Get employee list`.
    #[must_use]
    pub fn title(&self) -> String {
        let mut chars = self.name.chars().map(|c| if c == '_' { ' ' } else { c });
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    }

    /// JSON Schema describing the tool arguments.
    #[must_use]
    pub fn input_schema(&self) -> JsonObject {
        let mut properties = JsonObject::new();
        let mut required = Vec::new();
        for param in self.params {
            let name = param.arg_name();
            if param.required {
                required.push(Value::String(name.clone()));
            }
            properties.insert(name, param.schema());
        }

        let mut schema = JsonObject::new();
        schema.insert("type".to_string(), json!("object"));
        schema.insert("properties".to_string(), Value::Object(properties));
        schema.insert("required".to_string(), Value::Array(required));
        schema.insert("additionalProperties".to_string(), json!(false));
        schema
    }

    /// The MCP tool definition advertised in `tools/list`.
    #[must_use]
    pub fn tool(&self) -> Tool {
        Tool::new(self.name, self.summary, Arc::new(self.input_schema())).annotate(
            ToolAnnotations::new()
                .read_only(true)
                .destructive(false)
                .idempotent(true)
                .open_world(true),
        )
    }
}

static MODULES: &[&[Endpoint]] = &[
    applicant::ENDPOINTS,
    benefits::ENDPOINTS,
    client_master::ENDPOINTS,
    code_files::ENDPOINTS,
    deduction::ENDPOINTS,
    document_service::ENDPOINTS,
    employee::ENDPOINTS,
    general_ledger::ENDPOINTS,
    login::ENDPOINTS,
    new_hire::ENDPOINTS,
    onboard::ENDPOINTS,
    payroll::ENDPOINTS,
    prism_security::ENDPOINTS,
    sign_on::ENDPOINTS,
    staffing::ENDPOINTS,
    subscription::ENDPOINTS,
    system::ENDPOINTS,
    tax_rate::ENDPOINTS,
    timesheet::ENDPOINTS,
];

static INDEX: LazyLock<HashMap<&'static str, &'static Endpoint>> =
    LazyLock::new(|| endpoints().map(|e| (e.name, e)).collect());

static TOOLS: LazyLock<Vec<Tool>> = LazyLock::new(|| endpoints().map(Endpoint::tool).collect());

/// Every catalog endpoint, grouped by upstream module.
pub fn endpoints() -> impl Iterator<Item = &'static Endpoint> {
    MODULES.iter().flat_map(|module| module.iter())
}

/// Looks up an endpoint by tool name.
#[must_use]
pub fn find(name: &str) -> Option<&'static Endpoint> {
    INDEX.get(name).copied()
}

/// Tool definitions for the whole catalog, built once.
#[must_use]
pub fn tools() -> &'static [Tool] {
    &TOOLS
}

/// `journalDateStart` -> `journal_date_start`
#[must_use]
pub fn snake_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, c) in key.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

// Parameters shared by many endpoints.
pub(crate) const CLIENT_ID: ParamSpec = ParamSpec::text("clientId", "Client identifier");
pub(crate) const OPT_CLIENT_ID: ParamSpec =
    ParamSpec::opt_text("clientId", "Client identifier (optional filter)");
pub(crate) const EMPLOYEE_ID: ParamSpec = ParamSpec::text("employeeId", "Employee identifier");
pub(crate) const OPT_EMPLOYEE_ID: ParamSpec =
    ParamSpec::opt_text("employeeId", "Employee identifier (optional filter)");
pub(crate) const COUNT: ParamSpec =
    ParamSpec::opt_text("count", "Number of records to return per page");
pub(crate) const STARTPAGE: ParamSpec =
    ParamSpec::opt_text("startpage", "Record index to start the page from");
pub(crate) const OPTIONS: ParamSpec =
    ParamSpec::opt_text("options", "Comma-separated list of additional data options");
pub(crate) const DOWNLOAD_ID: ParamSpec = ParamSpec::opt_text(
    "downloadId",
    "Download identifier from a previous call; pass it to poll for the prepared data",
);
pub(crate) const BATCH_ID: ParamSpec = ParamSpec::text("batchId", "Payroll batch identifier");
pub(crate) const PRISM_USER_ID: ParamSpec =
    ParamSpec::text("prismUserId", "PrismHR user identifier");
pub(crate) const YEAR: ParamSpec = ParamSpec::text("year", "Four digit year, e.g. 2024");
pub(crate) const PAY_DATE_START: ParamSpec =
    ParamSpec::text("payDateStart", "Start of the pay date range (YYYY-MM-DD)");
pub(crate) const PAY_DATE_END: ParamSpec =
    ParamSpec::text("payDateEnd", "End of the pay date range (YYYY-MM-DD)");

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn tool_names_are_unique() {
        let mut seen = HashSet::new();
        for endpoint in endpoints() {
            assert!(seen.insert(endpoint.name), "duplicate tool {}", endpoint.name);
        }
        assert!(seen.len() >= 240, "catalog has {} endpoints", seen.len());
    }

    #[test]
    fn paths_follow_module_version_operation_shape() {
        for endpoint in endpoints() {
            let parts: Vec<&str> = endpoint.path.split('/').collect();
            assert_eq!(parts.len(), 4, "bad path {}", endpoint.path);
            assert!(parts[0].is_empty(), "path must start with '/': {}", endpoint.path);
            assert!(
                matches!(parts[2], "v1" | "v2"),
                "bad version in {}",
                endpoint.path
            );
            assert!(!parts[3].is_empty(), "missing operation in {}", endpoint.path);
        }
    }

    #[test]
    fn param_names_are_unique_per_endpoint() {
        for endpoint in endpoints() {
            let mut seen = HashSet::new();
            for param in endpoint.params {
                assert!(
                    seen.insert(param.arg_name()),
                    "{} declares {} twice",
                    endpoint.name,
                    param.key
                );
            }
        }
    }

    #[test]
    fn every_endpoint_has_a_summary() {
        for endpoint in endpoints() {
            assert!(!endpoint.summary.trim().is_empty(), "{}", endpoint.name);
        }
    }

    #[test]
    fn find_resolves_known_tools() {
        let endpoint = find("get_employee_list").map(|e| e.path);
        assert_eq!(endpoint, Some("/employee/v1/getEmployeeList"));
        assert!(find("drop_all_tables").is_none());
    }

    #[test]
    fn schema_lists_required_params_only() {
        let Some(endpoint) = find("get_employee_list") else {
            panic!("get_employee_list missing from catalog");
        };
        let schema = endpoint.input_schema();
        assert_eq!(schema["required"], json!(["client_id"]));
        assert_eq!(schema["properties"]["client_id"]["type"], json!("string"));
        assert!(schema["properties"].get("status_class").is_some());
        assert_eq!(schema["additionalProperties"], json!(false));
    }

    #[test]
    fn list_and_flag_params_get_matching_schema_types() {
        let Some(journal) = find("get_absence_journal") else {
            panic!("get_absence_journal missing from catalog");
        };
        let schema = journal.input_schema();
        assert_eq!(schema["properties"]["journal_id"]["type"], json!("array"));

        let Some(clients) = find("get_client_list") else {
            panic!("get_client_list missing from catalog");
        };
        let schema = clients.input_schema();
        assert_eq!(schema["properties"]["in_active"]["type"], json!("boolean"));
    }

    #[test]
    fn titles_read_as_sentences() {
        let Some(endpoint) = find("get_employee_list") else {
            panic!("get_employee_list missing from catalog");
        };
        assert_eq!(endpoint.title(), "Get employee list");
    }

    #[test]
    fn snake_case_converts_camel_keys() {
        assert_eq!(snake_case("clientId"), "client_id");
        assert_eq!(snake_case("journalDateStart"), "journal_date_start");
        assert_eq!(snake_case("startpage"), "startpage");
        assert_eq!(snake_case("unReadOnly"), "un_read_only");
    }

    #[test]
    fn tool_definitions_cover_catalog() {
        assert_eq!(tools().len(), endpoints().count());
    }
}

//! PrismHR Model Context Protocol implementation.
//!
//! This crate exposes PrismHR's REST API as MCP tools.
//! The implementation is organized into:
//!
//! - `catalog`: Declarative table of every relayed endpoint
//! - `config`: Environment configuration and credentials
//! - `error`: Error types and conversions
//! - `http`: HTTP client, session handling and API communication
//! - `tools`: The generic relay and the connection check
//!
//! The main entry point is the `PrismHrMcpFactory` which provides the MCP server
//! implementation and dispatches every tool call.

pub mod catalog;
pub mod config;
pub mod error;
pub mod http;
pub mod tools;

use std::sync::Arc;

use axum::http::request;
use rmcp::{
    ErrorData, RoleServer, ServerHandler,
    handler::server::{router::tool::ToolRouter, tool::ToolCallContext},
    model::{
        CallToolRequestParam, CallToolResult, Implementation, InitializeRequestParam,
        InitializeResult, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
        ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_router,
    transport::StreamableHttpServerConfig,
};
use tracing::{debug, info};

use crate::mcp::{
    error::PrismError,
    tools::{connection, relay::Relay},
};

/// Transport settings for the `/mcp` endpoint.
///
/// Stateless: every request is answered on its own, with no MCP session to resume.
#[must_use]
pub fn streamable_http_config() -> StreamableHttpServerConfig {
    StreamableHttpServerConfig {
        stateful_mode: false,
        ..Default::default()
    }
}

#[derive(Clone)]
pub struct PrismHrMcpFactory {
    tool_router: ToolRouter<Self>,
    relay: Arc<Relay>,
}

#[tool_router]
impl PrismHrMcpFactory {
    /// One factory is built per MCP session; they all share the same relay.
    #[must_use]
    pub fn new(relay: Arc<Relay>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            relay,
        }
    }

    #[tool(description = "Test the connection to PrismHR API by attempting authentication")]
    async fn test_connection(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::structured(
            connection::test_connection(&self.relay).await,
        ))
    }
}

impl ServerHandler for PrismHrMcpFactory {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "PrismHR MCP Server exposing read-only PrismHR HR and payroll API endpoints as tools"
                    .to_string(),
            ),
        }
    }

    async fn initialize(
        &self,
        _request: InitializeRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<InitializeResult, ErrorData> {
        if let Some(http_request_part) = context.extensions.get::<request::Parts>() {
            let initialize_headers = &http_request_part.headers;
            let initialize_uri = &http_request_part.uri;
            info!(?initialize_headers, %initialize_uri, "initialize from http server");
        }
        Ok(self.get_info())
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        let mut tools = self.tool_router.list_all();
        tools.extend(catalog::tools().iter().cloned());
        Ok(ListToolsResult::with_all_items(tools))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        if self.tool_router.has_route(request.name.as_ref()) {
            let ctx = ToolCallContext::new(self, request, context);
            return self.tool_router.call(ctx).await;
        }

        let endpoint = catalog::find(&request.name)
            .ok_or_else(|| PrismError::UnknownTool(request.name.to_string()))?;
        debug!(tool = endpoint.name, path = endpoint.path, "relaying tool call");

        let arguments = request.arguments.unwrap_or_default();
        Ok(self.relay.call_tool(endpoint, &arguments).await)
    }
}

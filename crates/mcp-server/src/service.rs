//! rmcp `ServerHandler` wiring: catalog in, tool results out.

use crate::runtime::{self, ToolCallError};
use crate::{catalog, health, report};
use orbit_api::ApiClient;
use rmcp::ErrorData as McpError;
use rmcp::handler::server::ServerHandler;
use rmcp::model::{
    CallToolRequestParams, CallToolResult, Content, ListToolsResult, PaginatedRequestParams,
    ServerCapabilities, ServerInfo,
};
use rmcp::service::{RequestContext, RoleServer};
use serde_json::Value;
use std::sync::Arc;

/// MCP server for the Orbit hosting control plane.
#[derive(Clone)]
pub struct OrbitMcpServer {
    client: Arc<ApiClient>,
}

impl OrbitMcpServer {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    fn result_from(envelope: Value, is_error: bool) -> CallToolResult {
        let text = serde_json::to_string(&envelope).unwrap_or_else(|_| envelope.to_string());
        CallToolResult {
            content: vec![Content::text(text)],
            structured_content: Some(envelope),
            is_error: Some(is_error),
            meta: None,
        }
    }
}

impl ServerHandler for OrbitMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: rmcp::model::Implementation {
                name: "orbit-mcp-server".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            instructions: Some(
                "Manage Orbit-hosted WordPress sites: sites, backups, domains, plugins and \
                 themes, cache and CDN reporting, billing, and access control."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: catalog::all()
                .map(catalog::to_tool)
                .chain(std::iter::once(health::tool()))
                .collect(),
            next_cursor: None,
            meta: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let arguments = request.arguments.unwrap_or_default();

        let outcome = if request.name == health::TOOL_NAME {
            health::report(&self.client, &arguments)
                .await
                .map(|data| ("Site health report generated".to_string(), data))
        } else if let Some(def) = catalog::find(&request.name) {
            runtime::execute(&self.client, def, &arguments)
                .await
                .map(|data| (report::describe(def.noun, &data), data))
        } else {
            return Err(McpError::invalid_params(
                format!("unknown tool: {}", request.name),
                None,
            ));
        };

        match outcome {
            Ok((message, data)) => Ok(Self::result_from(report::success(message, data), false)),
            Err(ToolCallError::MissingParameter(name)) => Err(McpError::invalid_params(
                format!("missing required parameter: {name}"),
                None,
            )),
            Err(ToolCallError::Api(e)) => {
                tracing::warn!(tool = %request.name, error = %e, "tool call failed");
                Ok(Self::result_from(report::error(e.to_string()), true))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbit_api::Config;
    use serde_json::json;

    fn make_server() -> OrbitMcpServer {
        let client = ApiClient::new(Config::default()).expect("default config is valid");
        OrbitMcpServer::new(client)
    }

    #[test]
    fn get_info_advertises_tools() {
        let info = make_server().get_info();
        assert_eq!(info.server_info.name, "orbit-mcp-server");
        assert!(info.capabilities.tools.is_some());
    }

    #[test]
    fn success_results_mirror_envelope_into_text() {
        let envelope = report::success("Found 2 sites", json!([{"id": 1}, {"id": 2}]));
        let result = OrbitMcpServer::result_from(envelope.clone(), false);
        assert_eq!(result.is_error, Some(false));
        assert_eq!(result.structured_content, Some(envelope));
        assert_eq!(result.content.len(), 1);
    }

    #[test]
    fn health_tool_name_does_not_collide_with_catalog() {
        assert!(catalog::find(health::TOOL_NAME).is_none());
    }

    #[test]
    fn error_results_are_flagged() {
        let result = OrbitMcpServer::result_from(report::error("boom"), true);
        assert_eq!(result.is_error, Some(true));
    }
}

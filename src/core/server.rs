//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the tool dispatcher.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool
//! and registered in `ToolRegistry::builtin()`. Listing and calling go
//! through `ToolDispatcher`, which is shared by every transport.
//! **Adding a new tool does NOT require modifying this file!**

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::config::Config;
use super::error::Result;
use crate::domains::tools::{ContentBlock, ToolDispatcher, ToolError, ToolRegistry, ToolResult};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp. It is cheap to
/// clone: the configuration and the tool registry are shared.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Name-based router over the tool registry.
    dispatcher: ToolDispatcher,
}

impl McpServer {
    /// Create a new MCP server with the built-in tools.
    ///
    /// Fails if the tool registry is misconfigured (duplicate or empty names).
    pub fn new(config: Config) -> Result<Self> {
        let registry = ToolRegistry::builtin()?;
        Ok(Self::with_registry(config, registry))
    }

    /// Create a new MCP server over a custom tool registry.
    pub fn with_registry(config: Config, registry: ToolRegistry) -> Self {
        info!("Loaded {} tool(s): {:?}", registry.len(), registry.tool_names());

        Self {
            config: Arc::new(config),
            dispatcher: ToolDispatcher::new(Arc::new(registry)),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the tool dispatcher.
    pub fn dispatcher(&self) -> &ToolDispatcher {
        &self.dispatcher
    }

    /// Usage instructions reported to clients.
    pub fn instructions(&self) -> &str {
        &self.config.server.instructions
    }

    /// All tools as protocol models.
    pub fn tool_list(&self) -> Vec<Tool> {
        self.dispatcher
            .list_tools()
            .into_iter()
            .map(Tool::from)
            .collect()
    }

    /// Call a tool and translate the outcome into the protocol shape.
    ///
    /// Unknown tools and invalid arguments become protocol errors;
    /// computation failures become tool results flagged with `isError`.
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> std::result::Result<CallToolResult, McpError> {
        to_call_result(self.dispatcher.call_tool(name, arguments).await)
    }

    /// The `tools/list` result as plain JSON, for transports that speak
    /// JSON-RPC without an rmcp session.
    pub fn list_tools_json(&self) -> std::result::Result<Value, McpError> {
        let tools = serde_json::to_value(self.dispatcher.list_tools())
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(json!({ "tools": tools }))
    }

    /// Call a tool with untyped arguments and return the `tools/call` result
    /// as plain JSON.
    ///
    /// `null` or absent arguments are treated as an empty object; any other
    /// non-object value is rejected as invalid params.
    pub async fn call_tool_json(
        &self,
        name: &str,
        arguments: Option<Value>,
    ) -> std::result::Result<Value, McpError> {
        let arguments = match arguments {
            None | Some(Value::Null) => None,
            Some(Value::Object(map)) => Some(map),
            Some(_) => {
                return Err(McpError::invalid_params(
                    "Tool arguments must be an object",
                    None,
                ));
            }
        };

        let result = self.dispatch(name, arguments).await?;
        serde_json::to_value(result).map_err(|e| McpError::internal_error(e.to_string(), None))
    }
}

/// Normalize a tool outcome into an MCP result or error.
fn to_call_result(
    outcome: ToolResult<Vec<ContentBlock>>,
) -> std::result::Result<CallToolResult, McpError> {
    let err = match outcome {
        Ok(blocks) => {
            return Ok(CallToolResult::success(
                blocks.into_iter().map(Content::from).collect(),
            ));
        }
        Err(err) => err,
    };

    let message = err.to_string();
    match err {
        ToolError::UnknownTool(name) => {
            Err(McpError::invalid_params(message, Some(json!({ "tool": name }))))
        }
        ToolError::InvalidInput { field, reason } => Err(McpError::invalid_params(
            message,
            Some(json!({ "field": field, "reason": reason })),
        )),
        ToolError::ComputationFailure(_) => {
            Ok(CallToolResult::error(vec![Content::text(message)]))
        }
        ToolError::DuplicateTool(_) | ToolError::InvalidDefinition(_) => {
            warn!("Registry error surfaced during a call: {}", message);
            Err(McpError::internal_error(message, None))
        }
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(self.instructions().to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.tool_list(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        info!("Calling tool: {}", request.name);
        self.dispatch(&request.name, request.arguments).await
    }
}

//! HTTP transport implementation.
//!
//! HTTP server with JSON-RPC over POST requests, so plain HTTP clients (curl,
//! scripts, browsers) can list and call tools without an MCP SDK. Only the
//! tool surface of MCP is exposed.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use rmcp::{ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::McpServer;

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// JSON-RPC request structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

/// JSON-RPC response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcResponse {
    /// Create a success response.
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response.
    pub fn error(id: Option<Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data: None,
            }),
        }
    }

    /// Carry an rmcp error over unchanged (code, message and data).
    pub fn from_mcp_error(id: Option<Value>, err: McpError) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code: err.code.0,
                message: err.message.into_owned(),
                data: err.data,
            }),
        }
    }

    /// Method not found error.
    pub fn method_not_found(id: Option<Value>, method: &str) -> Self {
        Self::error(id, -32601, format!("Method not found: {}", method))
    }

    /// Invalid request error.
    pub fn invalid_request(id: Option<Value>) -> Self {
        Self::error(id, -32600, "Invalid Request")
    }

    /// Invalid params error.
    pub fn invalid_params(id: Option<Value>, msg: impl Into<String>) -> Self {
        Self::error(id, -32602, msg)
    }

    /// Internal error.
    pub fn internal_error(id: Option<Value>, msg: impl Into<String>) -> Self {
        Self::error(id, -32603, msg)
    }
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Build the axum router serving the given MCP server.
    pub fn router(&self, server: McpServer) -> Router {
        let mut app = Router::new()
            .route(&self.config.rpc_path, post(handle_rpc))
            .route("/health", get(health_check))
            .route("/", get(root_handler))
            .with_state(server)
            .layer(TraceLayer::new_for_http());

        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            app = app.layer(cors);
        }

        app
    }

    /// Run the HTTP transport.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let app = self.router(server);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!(
            "Ready - listening on {} (JSON-RPC over HTTP, CORS {})",
            addr,
            if self.config.enable_cors { "enabled" } else { "disabled" }
        );
        info!("  → JSON-RPC: POST {}", self.config.rpc_path);
        info!("  → Health:   GET /health");

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Root handler - provides API info.
async fn root_handler(State(server): State<McpServer>) -> impl IntoResponse {
    Json(json!({
        "name": server.name(),
        "version": server.version(),
        "transport": "HTTP",
        "protocol": "JSON-RPC 2.0",
        "tools": server.dispatcher().registry().tool_names(),
    }))
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Handle JSON-RPC requests.
#[instrument(skip_all, fields(method))]
async fn handle_rpc(
    State(server): State<McpServer>,
    Json(request): Json<JsonRpcRequest>,
) -> Response {
    tracing::Span::current().record("method", request.method.as_str());
    info!("Received JSON-RPC request: {}", request.method);

    match process_request(&server, request).await {
        Some(response) => (StatusCode::OK, Json(response)).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

/// Process a JSON-RPC request.
///
/// Returns `None` for notifications, which get no response body.
pub async fn process_request(server: &McpServer, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
    // Notifications never get a reply, not even an error.
    if request.id.is_none() && request.method.starts_with("notifications/") {
        info!("Received notification: {}", request.method);
        return None;
    }

    if request.jsonrpc != "2.0" {
        return Some(JsonRpcResponse::invalid_request(request.id));
    }

    let id = request.id;
    let response = match request.method.as_str() {
        "initialize" => handle_initialize(server, id),
        "ping" => JsonRpcResponse::success(id, json!({})),
        "tools/list" => handle_tools_list(server, id),
        "tools/call" => handle_tools_call(server, id, request.params).await,
        method => {
            warn!("Unknown method: {}", method);
            JsonRpcResponse::method_not_found(id, method)
        }
    };

    Some(response)
}

/// Handle initialize request.
fn handle_initialize(server: &McpServer, id: Option<Value>) -> JsonRpcResponse {
    info!("Processing initialize request");

    match serde_json::to_value(server.get_info()) {
        Ok(result) => JsonRpcResponse::success(id, result),
        Err(e) => JsonRpcResponse::internal_error(id, e.to_string()),
    }
}

/// Handle tools/list request.
fn handle_tools_list(server: &McpServer, id: Option<Value>) -> JsonRpcResponse {
    info!("Processing tools/list request");

    match server.list_tools_json() {
        Ok(result) => JsonRpcResponse::success(id, result),
        Err(e) => JsonRpcResponse::from_mcp_error(id, e),
    }
}

/// Handle tools/call request.
async fn handle_tools_call(
    server: &McpServer,
    id: Option<Value>,
    params: Option<Value>,
) -> JsonRpcResponse {
    info!("Processing tools/call request");

    let Some(params) = params else {
        return JsonRpcResponse::invalid_params(id, "Missing params");
    };

    let Some(name) = params.get("name").and_then(Value::as_str) else {
        return JsonRpcResponse::invalid_params(id, "Missing tool name");
    };

    match server.call_tool_json(name, params.get("arguments").cloned()).await {
        Ok(result) => JsonRpcResponse::success(id, result),
        Err(e) => JsonRpcResponse::from_mcp_error(id, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use axum::body::Body;
    use bytes::Bytes;
    use ::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn server() -> McpServer {
        McpServer::new(Config::default()).unwrap()
    }

    fn request(method: &str, params: Value) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(1)),
            method: method.to_string(),
            params: Some(params),
        }
    }

    #[tokio::test]
    async fn test_tools_list() {
        let response = process_request(&server(), request("tools/list", json!({})))
            .await
            .unwrap();
        let tools = &response.result.unwrap()["tools"];
        assert_eq!(tools[0]["name"], "add");
        assert_eq!(tools[1]["name"], "multiply");
        assert_eq!(tools[0]["inputSchema"]["type"], "object");
    }

    #[tokio::test]
    async fn test_tools_call() {
        let params = json!({ "name": "multiply", "arguments": { "a": 3, "b": 4 } });
        let response = process_request(&server(), request("tools/call", params))
            .await
            .unwrap();
        let result = response.result.unwrap();
        assert_eq!(result["content"][0]["type"], "text");
        assert_eq!(result["content"][0]["text"], "3 × 4 = 12");
    }

    #[tokio::test]
    async fn test_tools_call_unknown_tool() {
        let params = json!({ "name": "divide", "arguments": { "a": 3, "b": 4 } });
        let response = process_request(&server(), request("tools/call", params))
            .await
            .unwrap();
        let error = response.error.unwrap();
        assert_eq!(error.code, -32602);
        assert!(error.message.contains("divide"));
    }

    #[tokio::test]
    async fn test_tools_call_rejects_non_object_arguments() {
        let params = json!({ "name": "add", "arguments": [1, 2] });
        let response = process_request(&server(), request("tools/call", params))
            .await
            .unwrap();
        assert_eq!(response.error.unwrap().code, -32602);
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let response = process_request(&server(), request("resources/list", json!({})))
            .await
            .unwrap();
        assert_eq!(response.error.unwrap().code, -32601);
    }

    #[tokio::test]
    async fn test_notification_has_no_response() {
        let mut notification = request("notifications/initialized", json!({}));
        notification.id = None;
        assert!(process_request(&server(), notification).await.is_none());
    }

    #[tokio::test]
    async fn test_notification_with_wrong_version_has_no_response() {
        let mut notification = request("notifications/initialized", json!({}));
        notification.id = None;
        notification.jsonrpc = "1.0".to_string();
        assert!(process_request(&server(), notification).await.is_none());
    }

    #[tokio::test]
    async fn test_request_with_wrong_version_is_invalid() {
        let mut ping = request("ping", json!({}));
        ping.jsonrpc = "1.0".to_string();
        let response = process_request(&server(), ping).await.unwrap();
        assert_eq!(response.error.unwrap().code, -32600);
    }

    #[tokio::test]
    async fn test_router_serves_rpc() {
        let app = HttpTransport::new(HttpConfig::default()).router(server());
        let body = json!({
            "jsonrpc": "2.0",
            "id": 7,
            "method": "tools/call",
            "params": { "name": "add", "arguments": { "a": 10, "b": 25 } }
        });

        let response = app
            .oneshot(
                Request::post("/mcp")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes: Bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(
            value["result"]["content"][0]["text"],
            "The sum of 10 and 25 is 35"
        );
    }
}

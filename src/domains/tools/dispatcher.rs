//! Tool Dispatcher - routes calls by name to registered tools.
//!
//! This is the single routing decision point of the server. Every transport
//! lists and calls tools through a [`ToolDispatcher`]; there is no fallback
//! or default tool.

use std::sync::Arc;

use rmcp::model::JsonObject;
use tracing::{info, instrument, warn};

use super::contract::{ContentBlock, ToolDescriptor};
use super::error::{ToolError, ToolResult};
use super::registry::ToolRegistry;

/// Dispatcher over a read-only tool registry.
#[derive(Debug, Clone)]
pub struct ToolDispatcher {
    registry: Arc<ToolRegistry>,
}

impl ToolDispatcher {
    /// Create a dispatcher over the given registry.
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    /// The underlying registry.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Descriptors of every registered tool, in declaration order.
    pub fn list_tools(&self) -> Vec<ToolDescriptor> {
        self.registry
            .all_tools()
            .iter()
            .map(|tool| tool.descriptor())
            .collect()
    }

    /// Resolve `name` and run the tool with `arguments`.
    ///
    /// Missing arguments are treated as an empty mapping, so the tool's own
    /// validation reports the missing fields.
    #[instrument(skip(self, arguments))]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> ToolResult<Vec<ContentBlock>> {
        let Some(tool) = self.registry.find(name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::unknown_tool(name));
        };

        let arguments = arguments.unwrap_or_default();
        info!("Calling tool '{}' with {} argument(s)", name, arguments.len());

        match tool.execute(&arguments).await {
            Ok(content) => Ok(content),
            Err(e) if e.is_client_error() => {
                info!("Tool '{}' rejected its arguments: {}", name, e);
                Err(e)
            }
            Err(e) => {
                warn!("Tool '{}' failed: {}", name, e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn dispatcher() -> ToolDispatcher {
        ToolDispatcher::new(Arc::new(ToolRegistry::builtin().unwrap()))
    }

    fn args(value: Value) -> Option<JsonObject> {
        value.as_object().cloned()
    }

    fn text(blocks: &[ContentBlock]) -> String {
        blocks
            .iter()
            .filter_map(ContentBlock::as_text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_list_tools() {
        let tools = dispatcher().list_tools();
        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0].name, "add");
        assert_eq!(tools[1].name, "multiply");
        assert!(tools.iter().all(|t| !t.description.is_empty()));
        assert!(
            tools
                .iter()
                .all(|t| t.input_schema.schema_type() == Some("object"))
        );
    }

    #[test]
    fn test_list_tools_is_idempotent() {
        let dispatcher = dispatcher();
        assert_eq!(dispatcher.list_tools(), dispatcher.list_tools());
    }

    #[tokio::test]
    async fn test_schema_required_matches_validation() {
        let dispatcher = dispatcher();

        for descriptor in dispatcher.list_tools() {
            let required = descriptor.input_schema.required();
            assert!(!required.is_empty());

            for missing in &required {
                let mut arguments = JsonObject::new();
                for field in required.iter().filter(|f| *f != missing) {
                    arguments.insert(field.to_string(), json!(1));
                }

                let err = dispatcher
                    .call_tool(descriptor.name, Some(arguments))
                    .await
                    .unwrap_err();
                assert_eq!(
                    err,
                    ToolError::invalid_input(*missing, "missing required field")
                );
            }
        }
    }

    #[tokio::test]
    async fn test_call_add() {
        let blocks = dispatcher()
            .call_tool("add", args(json!({ "a": 10, "b": 25 })))
            .await
            .unwrap();
        let text = text(&blocks);
        assert!(text.contains("10"));
        assert!(text.contains("25"));
        assert!(text.contains("35"));
    }

    #[tokio::test]
    async fn test_call_multiply() {
        let blocks = dispatcher()
            .call_tool("multiply", args(json!({ "a": 3, "b": 4 })))
            .await
            .unwrap();
        let text = text(&blocks);
        assert!(text.contains('3'));
        assert!(text.contains('4'));
        assert!(text.contains("12"));
    }

    #[tokio::test]
    async fn test_call_unknown_tool() {
        let dispatcher = dispatcher();
        for arguments in [None, args(json!({})), args(json!({ "a": 1, "b": 2 }))] {
            let err = dispatcher.call_tool("divide", arguments).await.unwrap_err();
            assert_eq!(err, ToolError::unknown_tool("divide"));
        }
    }

    #[tokio::test]
    async fn test_call_without_arguments() {
        let err = dispatcher().call_tool("add", None).await.unwrap_err();
        assert_eq!(err, ToolError::invalid_input("a", "missing required field"));
    }

    #[tokio::test]
    async fn test_call_rejects_non_numeric_values() {
        let dispatcher = dispatcher();
        let cases = [
            (json!(true), "boolean"),
            (json!(null), "null"),
            (json!([1, 2]), "array"),
            (json!({ "value": 1 }), "object"),
            (json!("abc"), "string"),
        ];

        for tool in ["add", "multiply"] {
            for (value, kind) in &cases {
                let err = dispatcher
                    .call_tool(tool, args(json!({ "a": 1, "b": value })))
                    .await
                    .unwrap_err();
                assert_eq!(
                    err,
                    ToolError::invalid_input("b", format!("expected number, got {}", kind))
                );
            }
        }
    }

    #[tokio::test]
    async fn test_extra_fields_are_ignored_by_every_tool() {
        let dispatcher = dispatcher();
        for descriptor in dispatcher.list_tools() {
            let result = dispatcher
                .call_tool(
                    descriptor.name,
                    args(json!({ "a": 1, "b": 2, "unexpected": { "nested": true } })),
                )
                .await;
            assert!(result.is_ok(), "{} rejected extra fields", descriptor.name);
        }
    }

    #[tokio::test]
    async fn test_failures_split_into_client_and_tool_errors() {
        let dispatcher = dispatcher();

        let rejected = dispatcher
            .call_tool("add", args(json!({ "a": "one", "b": 2 })))
            .await
            .unwrap_err();
        assert!(rejected.is_client_error());

        let failed = dispatcher
            .call_tool("multiply", args(json!({ "a": 1e200, "b": 1e200 })))
            .await
            .unwrap_err();
        assert!(matches!(failed, ToolError::ComputationFailure(_)));
        assert!(!failed.is_client_error());
    }
}

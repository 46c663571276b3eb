//! Multiply tool definition.

use async_trait::async_trait;
use rmcp::model::JsonObject;
use tracing::{info, instrument};

use super::BinaryOperands;
use crate::domains::tools::{
    contract::{ContentBlock, InputSchema, Tool},
    error::ToolResult,
};

/// Multiply tool - returns the product of `a` and `b`.
pub struct MultiplyTool;

impl MultiplyTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "multiply";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Multiply two numbers together.";

    /// Compute the product, failing if it overflows.
    pub fn compute(params: &BinaryOperands) -> ToolResult<f64> {
        params.ensure_finite("product", params.a * params.b)
    }
}

#[async_trait]
impl Tool for MultiplyTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        Self::DESCRIPTION
    }

    fn input_schema(&self) -> InputSchema {
        InputSchema::for_type::<BinaryOperands>()
    }

    #[instrument(skip_all, fields(tool = "multiply"))]
    async fn execute(&self, arguments: &JsonObject) -> ToolResult<Vec<ContentBlock>> {
        let params: BinaryOperands = self.input_schema().decode(arguments)?;
        let product = Self::compute(&params)?;

        info!("Computed {} × {} = {}", params.a, params.b, product);

        Ok(vec![ContentBlock::text(format!(
            "{} × {} = {}",
            params.a, params.b, product
        ))])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::error::ToolError;
    use serde_json::{Value, json};

    fn args(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_multiply() {
        let blocks = MultiplyTool
            .execute(&args(json!({ "a": 3, "b": 4 })))
            .await
            .unwrap();
        assert_eq!(blocks, vec![ContentBlock::text("3 × 4 = 12")]);
    }

    #[tokio::test]
    async fn test_multiply_decimals() {
        let blocks = MultiplyTool
            .execute(&args(json!({ "a": 0.5, "b": -4 })))
            .await
            .unwrap();
        assert_eq!(blocks, vec![ContentBlock::text("0.5 × -4 = -2")]);
    }

    #[tokio::test]
    async fn test_multiply_rejects_null() {
        let err = MultiplyTool
            .execute(&args(json!({ "a": 3, "b": null })))
            .await
            .unwrap_err();
        assert_eq!(err, ToolError::invalid_input("b", "expected number, got null"));
    }

    #[tokio::test]
    async fn test_multiply_ignores_extra_fields() {
        let blocks = MultiplyTool
            .execute(&args(json!({ "a": 2, "b": 5, "c": "ignored" })))
            .await
            .unwrap();
        assert_eq!(blocks, vec![ContentBlock::text("2 × 5 = 10")]);
    }

    #[tokio::test]
    async fn test_multiply_overflow() {
        let err = MultiplyTool
            .execute(&args(json!({ "a": 1e300, "b": 1e300 })))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::ComputationFailure(_)));
        assert!(err.to_string().contains("product"));
    }
}

//! Add tool definition.
//!
//! A tool that adds two numbers together.

use async_trait::async_trait;
use rmcp::model::JsonObject;
use tracing::{info, instrument};

use super::BinaryOperands;
use crate::domains::tools::{
    contract::{ContentBlock, InputSchema, Tool},
    error::ToolResult,
};

/// Add tool - returns the sum of `a` and `b`.
pub struct AddTool;

impl AddTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "add";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Add two numbers together. Returns the sum of a and b.";

    /// Compute the sum, failing if it overflows.
    pub fn compute(params: &BinaryOperands) -> ToolResult<f64> {
        params.ensure_finite("sum", params.a + params.b)
    }
}

#[async_trait]
impl Tool for AddTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        Self::DESCRIPTION
    }

    fn input_schema(&self) -> InputSchema {
        InputSchema::for_type::<BinaryOperands>()
    }

    #[instrument(skip_all, fields(tool = "add"))]
    async fn execute(&self, arguments: &JsonObject) -> ToolResult<Vec<ContentBlock>> {
        let params: BinaryOperands = self.input_schema().decode(arguments)?;
        let sum = Self::compute(&params)?;

        info!("Computed {} + {} = {}", params.a, params.b, sum);

        Ok(vec![ContentBlock::text(format!(
            "The sum of {} and {} is {}",
            params.a, params.b, sum
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

    fn text_of(blocks: &[ContentBlock]) -> &str {
        assert_eq!(blocks.len(), 1);
        blocks[0].as_text().expect("Expected text content")
    }

    #[tokio::test]
    async fn test_add_integers() {
        let blocks = AddTool.execute(&args(json!({ "a": 10, "b": 25 }))).await.unwrap();
        let text = text_of(&blocks);
        assert_eq!(text, "The sum of 10 and 25 is 35");
    }

    #[tokio::test]
    async fn test_add_decimals() {
        let blocks = AddTool
            .execute(&args(json!({ "a": 3.14, "b": 2.86 })))
            .await
            .unwrap();
        let reported: f64 = text_of(&blocks)
            .rsplit(' ')
            .next()
            .and_then(|n| n.parse().ok())
            .unwrap();
        assert!((reported - 6.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_add_is_commutative() {
        let left = AddTool::compute(&BinaryOperands::new(2.0, 3.0)).unwrap();
        let right = AddTool::compute(&BinaryOperands::new(3.0, 2.0)).unwrap();
        assert_eq!(left, 5.0);
        assert_eq!(left, right);

        let blocks = AddTool.execute(&args(json!({ "a": 3, "b": 2 }))).await.unwrap();
        assert!(text_of(&blocks).ends_with(" 5"));
    }

    #[tokio::test]
    async fn test_add_missing_field() {
        let err = AddTool.execute(&args(json!({ "a": 1 }))).await.unwrap_err();
        assert_eq!(err, ToolError::invalid_input("b", "missing required field"));
    }

    #[tokio::test]
    async fn test_add_rejects_numeric_string() {
        let err = AddTool
            .execute(&args(json!({ "a": "1", "b": 2 })))
            .await
            .unwrap_err();
        assert_eq!(err, ToolError::invalid_input("a", "expected number, got string"));
    }

    #[tokio::test]
    async fn test_add_overflow() {
        let err = AddTool
            .execute(&args(json!({ "a": f64::MAX, "b": f64::MAX })))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::ComputationFailure(_)));
    }

    #[test]
    fn test_add_schema() {
        let schema = AddTool.input_schema();
        assert_eq!(schema.schema_type(), Some("object"));
        assert_eq!(schema.required(), vec!["a", "b"]);
        assert_eq!(schema.property_types("a"), vec!["number"]);
        assert_eq!(schema.property_types("b"), vec!["number"]);
    }
}

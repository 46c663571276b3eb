//! Shared parameter type for binary arithmetic tools.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::tools::error::{ToolError, ToolResult};

/// Parameters for a tool that combines two numbers.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, JsonSchema)]
pub struct BinaryOperands {
    /// The first number
    pub a: f64,

    /// The second number
    pub b: f64,
}

impl BinaryOperands {
    /// Create operands from two values.
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Reject results that left the finite range of `f64`.
    pub fn ensure_finite(&self, operation: &str, result: f64) -> ToolResult<f64> {
        if result.is_finite() {
            Ok(result)
        } else {
            Err(ToolError::computation_failure(format!(
                "{} of {} and {} overflowed to {}",
                operation, self.a, self.b, result
            )))
        }
    }
}

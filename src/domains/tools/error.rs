//! Tool-specific error types.

use thiserror::Error;

/// Result type for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;

/// Errors that can occur during tool registration, dispatch or execution.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ToolError {
    /// The requested tool has no registered implementation.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// The arguments do not satisfy the tool's input schema.
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    /// The tool accepted its input but could not compute a result.
    #[error("Computation failed: {0}")]
    ComputationFailure(String),

    /// Two tools were registered under the same name.
    #[error("Duplicate tool name: {0}")]
    DuplicateTool(String),

    /// A tool definition is unusable (empty name, malformed schema).
    #[error("Invalid tool definition: {0}")]
    InvalidDefinition(String),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "invalid input" error for the given field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a new "computation failure" error.
    pub fn computation_failure(msg: impl Into<String>) -> Self {
        Self::ComputationFailure(msg.into())
    }

    /// Create a new "duplicate tool" error.
    pub fn duplicate_tool(name: impl Into<String>) -> Self {
        Self::DuplicateTool(name.into())
    }

    /// Create a new "invalid definition" error.
    pub fn invalid_definition(msg: impl Into<String>) -> Self {
        Self::InvalidDefinition(msg.into())
    }

    /// Whether this error is the caller's fault (bad name or bad arguments).
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::UnknownTool(_) | Self::InvalidInput { .. })
    }
}

//! Tool Registry - central registration of all tools.
//!
//! The registry owns one instance of every available tool, in declaration
//! order, and resolves tools by exact name. It is built once at startup and
//! read-only afterwards.
//!
//! When adding a new tool:
//! 1. Create the tool file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `builtin()`

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::contract::Tool;
use super::definitions::{AddTool, MultiplyTool};
use super::error::{ToolError, ToolResult};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - the authoritative set of available tools.
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
    index: HashMap<&'static str, usize>,
}

impl ToolRegistry {
    /// Build a registry from the given tools.
    ///
    /// Fails if a tool has an empty name, an unusable schema, or shares its
    /// name with an earlier tool.
    pub fn new(tools: Vec<Arc<dyn Tool>>) -> ToolResult<Self> {
        let mut index = HashMap::with_capacity(tools.len());

        for (position, tool) in tools.iter().enumerate() {
            let name = tool.name();
            if name.trim().is_empty() {
                return Err(ToolError::invalid_definition(format!(
                    "tool at position {} has an empty name",
                    position
                )));
            }

            tool.input_schema()
                .check_well_formed()
                .map_err(|e| match e {
                    ToolError::InvalidDefinition(msg) => {
                        ToolError::invalid_definition(format!("tool '{}': {}", name, msg))
                    }
                    other => other,
                })?;

            if index.insert(name, position).is_some() {
                return Err(ToolError::duplicate_tool(name));
            }

            debug!("Registered tool: {}", name);
        }

        Ok(Self { tools, index })
    }

    /// Build the registry of all tools shipped with this server.
    ///
    /// This is the central place where all tools are registered.
    pub fn builtin() -> ToolResult<Self> {
        Self::new(vec![Arc::new(AddTool), Arc::new(MultiplyTool)])
    }

    /// All registered tools, in declaration order.
    pub fn all_tools(&self) -> &[Arc<dyn Tool>] {
        &self.tools
    }

    /// Look up a tool by exact, case-sensitive name.
    pub fn find(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.index.get(name).map(|&i| Arc::clone(&self.tools[i]))
    }

    /// Get all tool names, in declaration order.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.tool_names())
            .finish()
    }
}

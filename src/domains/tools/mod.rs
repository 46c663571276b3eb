//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are stateless functions that MCP clients call by name.
//!
//! ## Architecture
//!
//! - `contract.rs` - The [`Tool`] trait, descriptors, schemas and content blocks
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `registry.rs` - Central tool registry, built once at startup
//! - `dispatcher.rs` - Name-based routing used by every transport
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Define a params struct deriving `Deserialize` and `JsonSchema`
//! 3. Implement [`Tool`] for the tool type
//! 4. Export in `definitions/mod.rs`
//! 5. Register in `ToolRegistry::builtin()`
//!
//! **No need to modify the dispatcher or `server.rs`!**

pub mod contract;
pub mod definitions;
mod dispatcher;
mod error;
mod registry;

pub use contract::{ContentBlock, InputSchema, Tool, ToolDescriptor};
pub use dispatcher::ToolDispatcher;
pub use error::{ToolError, ToolResult};
pub use registry::ToolRegistry;

//! Copilot MCP Server Library
//!
//! A minimal Model Context Protocol (MCP) server exposing stateless tools to
//! an external orchestrator.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the MCP protocol handler and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: The tool contract, concrete tools, the registry and the dispatcher
//!
//! # Example
//!
//! ```rust,no_run
//! use copilot_mcp_server::{Config, McpServer, core::TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};

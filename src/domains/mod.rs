//! Domains module containing business logic organized by bounded contexts.
//!
//! The server currently exposes a single domain: tools that MCP clients can
//! discover and call.

pub mod tools;

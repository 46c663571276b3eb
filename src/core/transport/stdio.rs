//! STDIO transport implementation.
//!
//! Standard input/output transport for MCP - the default and recommended mode.
//! rmcp may handle requests from one session concurrently, so responses can be
//! written out of arrival order; clients match them to requests by `id`.
//! A client that waits for each response before sending the next request
//! sees strict request-then-response ordering.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the STDIO transport until the client closes stdin.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!("Ready - communicating via stdin/stdout");

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        service
            .waiting()
            .await
            .map_err(|e| TransportError::service(e.to_string()))?;

        info!("STDIO transport finished");
        Ok(())
    }
}

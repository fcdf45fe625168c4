//! MCP tool implementations, one module per CRM object.

mod activities;
mod attachments;
mod companies;
mod favorites;
mod notes;
mod opportunities;
mod people;
mod targets;
mod tasks;

#[cfg(test)]
mod attachments_test;

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
    schemars::{self, JsonSchema},
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::CrmResult;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct IdParams {
    #[schemars(description = "Record ID")]
    pub id: String,
}

/// Single error boundary: failures become error-flagged text results.
pub(crate) fn respond(tool: &str, result: CrmResult<String>) -> Result<CallToolResult, McpError> {
    match result {
        Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
        Err(e) => {
            warn!(tool, error = %e, "Tool call failed");
            Ok(CallToolResult::error(vec![Content::text(format!(
                "Error: {e}"
            ))]))
        }
    }
}

//! Attachment tools.
//!
//! When an attachment root is configured, every returned attachment carries a
//! `localPreview` resolved from the local filesystem.

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::CallToolResult, tool,
    tool_router,
};

use crate::domains::attachment::{self, CreateAttachmentParams, ListAttachmentsParams};
use crate::graphql::HttpTransport;
use crate::mcp::server::CrmServer;

use super::{IdParams, respond};

#[tool_router(router = attachments_router, vis = "pub(crate)")]
impl<T: HttpTransport + 'static> CrmServer<T> {
    #[tool(
        description = "Create an attachment record linked to a task, company, person, opportunity, workflow or dashboard"
    )]
    pub async fn create_attachment(
        &self,
        params: Parameters<CreateAttachmentParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            "create_attachment",
            attachment::create(&self.client, self.preview_resolver(), params.0).await,
        )
    }

    #[tool(description = "Get details of a specific attachment by ID")]
    pub async fn get_attachment(
        &self,
        params: Parameters<IdParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            "get_attachment",
            attachment::get(&self.client, self.preview_resolver(), &params.0.id).await,
        )
    }

    #[tool(description = "List attachments with optional filtering by linked record or category")]
    pub async fn list_attachments(
        &self,
        params: Parameters<ListAttachmentsParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            "list_attachments",
            attachment::list(&self.client, self.preview_resolver(), &params.0).await,
        )
    }

    #[tool(description = "Delete an attachment by ID")]
    pub async fn delete_attachment(
        &self,
        params: Parameters<IdParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            "delete_attachment",
            attachment::delete(&self.client, &params.0.id).await,
        )
    }
}

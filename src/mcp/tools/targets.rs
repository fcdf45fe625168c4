//! Task and note target tools: link tasks and notes to people, companies and
//! opportunities.

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::CallToolResult, tool,
    tool_router,
};

use crate::domains::note_target::{self, CreateNoteTargetParams, ListNoteTargetsParams};
use crate::domains::task_target::{self, CreateTaskTargetParams, ListTaskTargetsParams};
use crate::graphql::HttpTransport;
use crate::mcp::server::CrmServer;

use super::{IdParams, respond};

#[tool_router(router = targets_router, vis = "pub(crate)")]
impl<T: HttpTransport + 'static> CrmServer<T> {
    #[tool(
        description = "Link a task to a person, company or opportunity. Provide one target ID"
    )]
    pub async fn create_task_target(
        &self,
        params: Parameters<CreateTaskTargetParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            "create_task_target",
            task_target::create(&self.client, params.0).await,
        )
    }

    #[tool(description = "List task targets filtered by task, person, company or opportunity")]
    pub async fn list_task_targets(
        &self,
        params: Parameters<ListTaskTargetsParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            "list_task_targets",
            task_target::list(&self.client, params.0).await,
        )
    }

    #[tool(description = "Remove a task target link by ID")]
    pub async fn delete_task_target(
        &self,
        params: Parameters<IdParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            "delete_task_target",
            task_target::delete(&self.client, &params.0.id).await,
        )
    }

    #[tool(
        description = "Link a note to a person, company or opportunity. Provide one target ID"
    )]
    pub async fn create_note_target(
        &self,
        params: Parameters<CreateNoteTargetParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            "create_note_target",
            note_target::create(&self.client, params.0).await,
        )
    }

    #[tool(description = "List note targets filtered by note, person, company or opportunity")]
    pub async fn list_note_targets(
        &self,
        params: Parameters<ListNoteTargetsParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            "list_note_targets",
            note_target::list(&self.client, params.0).await,
        )
    }

    #[tool(description = "Remove a note target link by ID")]
    pub async fn delete_note_target(
        &self,
        params: Parameters<IdParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            "delete_note_target",
            note_target::delete(&self.client, &params.0.id).await,
        )
    }
}

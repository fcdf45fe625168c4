use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::CallToolResult, tool,
    tool_router,
};

use crate::crud;
use crate::domains::note::{CreateNoteParams, ListNotesParams, Note, UpdateNoteParams};
use crate::graphql::HttpTransport;
use crate::mcp::server::CrmServer;

use super::{IdParams, respond};

#[tool_router(router = notes_router, vis = "pub(crate)")]
impl<T: HttpTransport + 'static> CrmServer<T> {
    #[tool(description = "Create a new note in Twenty CRM")]
    pub async fn create_note(
        &self,
        params: Parameters<CreateNoteParams>,
    ) -> Result<CallToolResult, McpError> {
        respond("create_note", crud::create::<Note, T>(&self.client, params.0).await)
    }

    #[tool(description = "Get details of a specific note by ID")]
    pub async fn get_note(&self, params: Parameters<IdParams>) -> Result<CallToolResult, McpError> {
        respond(
            "get_note",
            crud::get::<Note, T>(&self.client, &params.0.id).await,
        )
    }

    #[tool(description = "List notes with optional filtering and pagination")]
    pub async fn list_notes(
        &self,
        params: Parameters<ListNotesParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            "list_notes",
            crud::list::<Note, T>(&self.client, &params.0).await,
        )
    }

    #[tool(description = "Update an existing note's information")]
    pub async fn update_note(
        &self,
        params: Parameters<UpdateNoteParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            "update_note",
            crud::update::<Note, T>(&self.client, params.0).await,
        )
    }
}

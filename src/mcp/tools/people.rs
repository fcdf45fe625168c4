//! Person tools.

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::CallToolResult, tool,
    tool_router,
};

use crate::crud;
use crate::domains::person::{self, CreatePersonParams, ListPeopleParams, Person, UpdatePersonParams};
use crate::graphql::HttpTransport;
use crate::mcp::server::CrmServer;

use super::{IdParams, respond};

#[tool_router(router = people_router, vis = "pub(crate)")]
impl<T: HttpTransport + 'static> CrmServer<T> {
    #[tool(description = "Create a new person in Twenty CRM")]
    pub async fn create_person(
        &self,
        params: Parameters<CreatePersonParams>,
    ) -> Result<CallToolResult, McpError> {
        respond("create_person", person::create(&self.client, params.0).await)
    }

    #[tool(description = "Get details of a specific person by ID")]
    pub async fn get_person(&self, params: Parameters<IdParams>) -> Result<CallToolResult, McpError> {
        respond(
            "get_person",
            crud::get::<Person, T>(&self.client, &params.0.id).await,
        )
    }

    #[tool(description = "List people with optional filtering and pagination")]
    pub async fn list_people(
        &self,
        params: Parameters<ListPeopleParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            "list_people",
            crud::list::<Person, T>(&self.client, &params.0).await,
        )
    }

    #[tool(description = "Update an existing person's information")]
    pub async fn update_person(
        &self,
        params: Parameters<UpdatePersonParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            "update_person",
            crud::update::<Person, T>(&self.client, params.0).await,
        )
    }
}

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::CallToolResult, tool,
    tool_router,
};

use crate::crud;
use crate::domains::opportunity::{CreateOpportunityParams, ListOpportunitiesParams, Opportunity, UpdateOpportunityParams};
use crate::graphql::HttpTransport;
use crate::mcp::server::CrmServer;

use super::{IdParams, respond};

#[tool_router(router = opportunities_router, vis = "pub(crate)")]
impl<T: HttpTransport + 'static> CrmServer<T> {
    #[tool(description = "Create a new opportunity in Twenty CRM")]
    pub async fn create_opportunity(
        &self,
        params: Parameters<CreateOpportunityParams>,
    ) -> Result<CallToolResult, McpError> {
        respond("create_opportunity", crud::create::<Opportunity, T>(&self.client, params.0).await)
    }

    #[tool(description = "Get details of a specific opportunity by ID")]
    pub async fn get_opportunity(&self, params: Parameters<IdParams>) -> Result<CallToolResult, McpError> {
        respond(
            "get_opportunity",
            crud::get::<Opportunity, T>(&self.client, &params.0.id).await,
        )
    }

    #[tool(description = "List opportunities with optional filtering and pagination")]
    pub async fn list_opportunities(
        &self,
        params: Parameters<ListOpportunitiesParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            "list_opportunities",
            crud::list::<Opportunity, T>(&self.client, &params.0).await,
        )
    }

    #[tool(description = "Update an existing opportunity's information")]
    pub async fn update_opportunity(
        &self,
        params: Parameters<UpdateOpportunityParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            "update_opportunity",
            crud::update::<Opportunity, T>(&self.client, params.0).await,
        )
    }
}

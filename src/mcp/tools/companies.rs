//! Company tools.

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::CallToolResult, tool,
    tool_router,
};

use crate::crud;
use crate::domains::company::{CreateCompanyParams, ListCompaniesParams, Company, UpdateCompanyParams};
use crate::graphql::HttpTransport;
use crate::mcp::server::CrmServer;

use super::{IdParams, respond};

#[tool_router(router = companies_router, vis = "pub(crate)")]
impl<T: HttpTransport + 'static> CrmServer<T> {
    #[tool(description = "Create a new company in Twenty CRM")]
    pub async fn create_company(
        &self,
        params: Parameters<CreateCompanyParams>,
    ) -> Result<CallToolResult, McpError> {
        respond("create_company", crud::create::<Company, T>(&self.client, params.0).await)
    }

    #[tool(description = "Get details of a specific company by ID")]
    pub async fn get_company(&self, params: Parameters<IdParams>) -> Result<CallToolResult, McpError> {
        respond(
            "get_company",
            crud::get::<Company, T>(&self.client, &params.0.id).await,
        )
    }

    #[tool(description = "List companies with optional filtering and pagination")]
    pub async fn list_companies(
        &self,
        params: Parameters<ListCompaniesParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            "list_companies",
            crud::list::<Company, T>(&self.client, &params.0).await,
        )
    }

    #[tool(description = "Update an existing company's information")]
    pub async fn update_company(
        &self,
        params: Parameters<UpdateCompanyParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            "update_company",
            crud::update::<Company, T>(&self.client, params.0).await,
        )
    }
}

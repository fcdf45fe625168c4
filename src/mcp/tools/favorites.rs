//! Favorite tools.

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::CallToolResult, tool,
    tool_router,
};

use crate::domains::favorite::{self, AddFavoriteParams, ListFavoritesParams};
use crate::graphql::HttpTransport;
use crate::mcp::server::CrmServer;

use super::{IdParams, respond};

#[tool_router(router = favorites_router, vis = "pub(crate)")]
impl<T: HttpTransport + 'static> CrmServer<T> {
    #[tool(
        description = "Add a person, company or opportunity to favorites. Provide one target ID"
    )]
    pub async fn add_favorite(
        &self,
        params: Parameters<AddFavoriteParams>,
    ) -> Result<CallToolResult, McpError> {
        respond("add_favorite", favorite::add(&self.client, params.0).await)
    }

    #[tool(description = "Get details of a specific favorite by ID")]
    pub async fn get_favorite(
        &self,
        params: Parameters<IdParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            "get_favorite",
            favorite::get(&self.client, &params.0.id).await,
        )
    }

    #[tool(description = "List favorites with optional filtering by target or workspace member")]
    pub async fn list_favorites(
        &self,
        params: Parameters<ListFavoritesParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            "list_favorites",
            favorite::list(&self.client, &params.0).await,
        )
    }

    #[tool(description = "Remove a favorite by ID")]
    pub async fn remove_favorite(
        &self,
        params: Parameters<IdParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            "remove_favorite",
            favorite::remove(&self.client, &params.0.id).await,
        )
    }
}

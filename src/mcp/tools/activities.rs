use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::CallToolResult, tool,
    tool_router,
};

use crate::crud;
use crate::domains::activity::{
    CreateTimelineActivityParams, ListTimelineActivitiesParams, TimelineActivity,
    UpdateTimelineActivityParams,
};
use crate::graphql::HttpTransport;
use crate::mcp::server::CrmServer;

use super::{IdParams, respond};

#[tool_router(router = activities_router, vis = "pub(crate)")]
impl<T: HttpTransport + 'static> CrmServer<T> {
    #[tool(
        description = "Create a new timeline activity to log an event against people, companies, opportunities, notes or tasks"
    )]
    pub async fn create_timeline_activity(
        &self,
        params: Parameters<CreateTimelineActivityParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            "create_timeline_activity",
            crud::create::<TimelineActivity, T>(&self.client, params.0).await,
        )
    }

    #[tool(description = "Get details of a specific timeline activity by ID")]
    pub async fn get_timeline_activity(
        &self,
        params: Parameters<IdParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            "get_timeline_activity",
            crud::get::<TimelineActivity, T>(&self.client, &params.0.id).await,
        )
    }

    #[tool(description = "List timeline activities with optional filtering and pagination")]
    pub async fn list_timeline_activities(
        &self,
        params: Parameters<ListTimelineActivitiesParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            "list_timeline_activities",
            crud::list::<TimelineActivity, T>(&self.client, &params.0).await,
        )
    }

    #[tool(description = "Update an existing timeline activity. Pass null to clear a field")]
    pub async fn update_timeline_activity(
        &self,
        params: Parameters<UpdateTimelineActivityParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            "update_timeline_activity",
            crud::update::<TimelineActivity, T>(&self.client, params.0).await,
        )
    }
}

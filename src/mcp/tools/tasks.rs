//! Task tools.

use rmcp::{
    ErrorData as McpError, handler::server::wrapper::Parameters, model::CallToolResult, tool,
    tool_router,
};

use crate::crud;
use crate::domains::task::{CreateTaskParams, ListTasksParams, Task, UpdateTaskParams};
use crate::graphql::HttpTransport;
use crate::mcp::server::CrmServer;

use super::{IdParams, respond};

#[tool_router(router = tasks_router, vis = "pub(crate)")]
impl<T: HttpTransport + 'static> CrmServer<T> {
    #[tool(description = "Create a new task in Twenty CRM")]
    pub async fn create_task(
        &self,
        params: Parameters<CreateTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        respond("create_task", crud::create::<Task, T>(&self.client, params.0).await)
    }

    #[tool(description = "Get details of a specific task by ID")]
    pub async fn get_task(&self, params: Parameters<IdParams>) -> Result<CallToolResult, McpError> {
        respond(
            "get_task",
            crud::get::<Task, T>(&self.client, &params.0.id).await,
        )
    }

    #[tool(description = "List tasks with optional filtering and pagination")]
    pub async fn list_tasks(
        &self,
        params: Parameters<ListTasksParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            "list_tasks",
            crud::list::<Task, T>(&self.client, &params.0).await,
        )
    }

    #[tool(description = "Update an existing task's information")]
    pub async fn update_task(
        &self,
        params: Parameters<UpdateTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            "update_task",
            crud::update::<Task, T>(&self.client, params.0).await,
        )
    }
}

//! Tasks.

use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::crud::{Entity, ListLimit};
use crate::error::CrmResult;
use crate::transform::{RichText, transform_body};

use super::{FilterBuilder, PersonRef, present};

const CREATE_TASK: &str = r#"
  mutation CreateTask($input: TaskCreateInput!) {
    createTask(data: $input) {
      id
      title
      bodyV2 { blocknote markdown }
      status
      dueAt
      position
      assigneeId
      assignee { id name { firstName lastName } }
      createdAt
    }
  }
"#;

const GET_TASK: &str = r#"
  query GetTask($id: UUID!) {
    task(filter: { id: { eq: $id } }) {
      id
      title
      bodyV2 { blocknote markdown }
      status
      dueAt
      position
      assigneeId
      assignee { id name { firstName lastName } }
      createdAt
      updatedAt
      deletedAt
    }
  }
"#;

const LIST_TASKS: &str = r#"
  query ListTasks($filter: TaskFilterInput, $limit: Int) {
    tasks(filter: $filter, first: $limit) {
      edges {
        node {
          id
          title
          bodyV2 { blocknote markdown }
          status
          dueAt
          position
          assigneeId
          assignee { id name { firstName lastName } }
          createdAt
          updatedAt
        }
      }
      pageInfo { hasNextPage hasPreviousPage }
    }
  }
"#;

const UPDATE_TASK: &str = r#"
  mutation UpdateTask($id: UUID!, $input: TaskUpdateInput!) {
    updateTask(id: $id, data: $input) {
      id
      title
      bodyV2 { blocknote markdown }
      status
      dueAt
      position
      assigneeId
      updatedAt
    }
  }
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_v2: Option<RichText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<PersonRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskParams {
    #[schemars(description = "Task title (required)")]
    pub title: String,
    #[schemars(description = "Task body/description in markdown format")]
    pub body: Option<String>,
    #[schemars(description = "Task status")]
    pub status: Option<TaskStatus>,
    #[schemars(description = "Due date (ISO 8601 format: YYYY-MM-DDTHH:MM:SSZ)")]
    pub due_at: Option<String>,
    #[schemars(description = "ID of the workspace member to assign the task to")]
    pub assignee_id: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskParams {
    #[schemars(description = "Task ID (required)")]
    pub id: String,
    #[schemars(description = "Task title")]
    pub title: Option<String>,
    #[schemars(description = "Task body/description in markdown format")]
    pub body: Option<String>,
    #[schemars(description = "Task status")]
    pub status: Option<TaskStatus>,
    #[serde(default, deserialize_with = "crate::serde_utils::double_option")]
    #[schemars(with = "Option<String>", description = "Due date (ISO 8601 format), null clears it")]
    pub due_at: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::serde_utils::double_option")]
    #[schemars(
        with = "Option<String>",
        description = "ID of the workspace member assigned to the task, null unassigns"
    )]
    pub assignee_id: Option<Option<String>>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListTasksParams {
    #[schemars(description = "Number of results to return (max: 60, default: 20)")]
    pub limit: Option<u32>,
    #[schemars(description = "Search by task title")]
    pub search_term: Option<String>,
    #[schemars(description = "Filter by status")]
    pub status: Option<TaskStatus>,
    #[schemars(description = "Filter by assignee ID")]
    pub assignee_id: Option<String>,
}

impl ListLimit for ListTasksParams {
    fn limit(&self) -> Option<u32> {
        self.limit
    }
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_v2: Option<RichText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_at: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<Option<String>>,
}

impl TaskStatus {
    fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Todo => "TODO",
            TaskStatus::InProgress => "IN_PROGRESS",
            TaskStatus::Done => "DONE",
        }
    }
}

impl Entity for Task {
    const NAME: &'static str = "task";
    const TYPE_NAME: &'static str = "Task";

    const CREATE_MUTATION: &'static str = CREATE_TASK;
    const GET_QUERY: &'static str = GET_TASK;
    const LIST_QUERY: &'static str = LIST_TASKS;
    const UPDATE_MUTATION: &'static str = UPDATE_TASK;

    type Record = Task;
    type CreateParams = CreateTaskParams;
    type UpdateParams = UpdateTaskParams;
    type ListParams = ListTasksParams;
    type Input = TaskInput;
    type Patch = TaskInput;

    fn create_input(params: CreateTaskParams) -> CrmResult<TaskInput> {
        Ok(TaskInput {
            title: Some(params.title),
            body_v2: present(params.body).map(|body| transform_body(&body)),
            status: params.status,
            due_at: present(params.due_at).map(Some),
            assignee_id: present(params.assignee_id).map(Some),
        })
    }

    fn update_input(params: UpdateTaskParams) -> (String, TaskInput) {
        let patch = TaskInput {
            title: params.title,
            // An empty body is a deliberate clear and still produces a block document.
            body_v2: params.body.map(|body| transform_body(&body)),
            status: params.status,
            due_at: params.due_at,
            assignee_id: params.assignee_id,
        };

        (params.id, patch)
    }

    fn list_filter(params: &ListTasksParams) -> Option<Value> {
        FilterBuilder::new()
            .ilike("title", params.search_term.as_deref())
            .eq("status", params.status.map(TaskStatus::as_str))
            .eq("assigneeId", params.assignee_id.as_deref())
            .build()
    }

    fn created_message(task: &Task) -> String {
        format!(
            "✅ Created task: {}",
            task.title.as_deref().unwrap_or_default()
        )
    }
}

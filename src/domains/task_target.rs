//! Task targets: links from a task to the records it concerns.

use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};

use crate::error::CrmResult;
use crate::graphql::{GraphQlClient, HttpTransport};

use super::junction::{self, Junction, TargetLinks};

pub struct TaskTargets;

impl Junction for TaskTargets {
    const OWNER: &'static str = "task";
    const OWNER_KEY: &'static str = "taskId";
    const TYPE_NAME: &'static str = "TaskTarget";
    const LIST_FIELD: &'static str = "taskTargets";

    const CREATE_MUTATION: &'static str = r#"
  mutation CreateTaskTarget($input: TaskTargetCreateInput!) {
    createTaskTarget(data: $input) {
      id
      taskId
      personId
      companyId
      opportunityId
      createdAt
      updatedAt
    }
  }
"#;

    const LIST_QUERY: &'static str = r#"
  query ListTaskTargets($filter: TaskTargetFilterInput, $limit: Int) {
    taskTargets(filter: $filter, first: $limit) {
      edges {
        node {
          id
          taskId
          personId
          companyId
          opportunityId
          createdAt
          updatedAt
        }
      }
      pageInfo { hasNextPage hasPreviousPage }
    }
  }
"#;

    const DELETE_MUTATION: &'static str = r#"
  mutation DeleteTaskTarget($id: UUID!) {
    deleteTaskTarget(id: $id) {
      id
    }
  }
"#;
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskTargetParams {
    #[schemars(description = "Task ID to link (required)")]
    pub task_id: String,
    #[schemars(description = "Person ID to link the task to")]
    pub person_id: Option<String>,
    #[schemars(description = "Company ID to link the task to")]
    pub company_id: Option<String>,
    #[schemars(description = "Opportunity ID to link the task to")]
    pub opportunity_id: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListTaskTargetsParams {
    #[schemars(description = "Filter by task ID - show all entities linked to this task")]
    pub task_id: Option<String>,
    #[schemars(description = "Filter by person ID - show all tasks linked to this person")]
    pub person_id: Option<String>,
    #[schemars(description = "Filter by company ID - show all tasks linked to this company")]
    pub company_id: Option<String>,
    #[schemars(description = "Filter by opportunity ID - show all tasks linked to this opportunity")]
    pub opportunity_id: Option<String>,
    #[schemars(description = "Number of results to return (max: 60, default: 20)")]
    pub limit: Option<u32>,
}

pub async fn create<T: HttpTransport>(
    client: &GraphQlClient<T>,
    params: CreateTaskTargetParams,
) -> CrmResult<String> {
    let links = TargetLinks {
        person_id: params.person_id,
        company_id: params.company_id,
        opportunity_id: params.opportunity_id,
    };
    junction::create::<TaskTargets, T>(client, params.task_id, links).await
}

pub async fn list<T: HttpTransport>(
    client: &GraphQlClient<T>,
    params: ListTaskTargetsParams,
) -> CrmResult<String> {
    let links = TargetLinks {
        person_id: params.person_id,
        company_id: params.company_id,
        opportunity_id: params.opportunity_id,
    };
    junction::list::<TaskTargets, T>(client, params.task_id.as_deref(), &links, params.limit).await
}

pub async fn delete<T: HttpTransport>(client: &GraphQlClient<T>, id: &str) -> CrmResult<String> {
    junction::delete::<TaskTargets, T>(client, id).await
}

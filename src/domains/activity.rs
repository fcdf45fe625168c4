//! Timeline activities: events attached to CRM records.

use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::crud::{Entity, ListLimit};
use crate::error::CrmResult;

use super::{FilterBuilder, present};

macro_rules! activity_fields {
    () => {
        "
      id
      name
      properties
      happensAt
      linkedRecordId
      linkedObjectMetadataId
      linkedRecordCachedName
      workspaceMemberId
      personId
      companyId
      opportunityId
      noteId
      taskId
      workflowId
      workflowVersionId
      workflowRunId
      dashboardId"
    };
}

const CREATE_TIMELINE_ACTIVITY: &str = concat!(
    "mutation CreateTimelineActivity($input: TimelineActivityCreateInput!) {\n",
    "  createTimelineActivity(data: $input) {",
    activity_fields!(),
    "\n      createdAt\n  }\n}\n"
);

const GET_TIMELINE_ACTIVITY: &str = concat!(
    "query GetTimelineActivity($id: UUID!) {\n",
    "  timelineActivity(filter: { id: { eq: $id } }) {",
    activity_fields!(),
    "\n      createdAt\n      updatedAt\n  }\n}\n"
);

const LIST_TIMELINE_ACTIVITIES: &str = concat!(
    "query ListTimelineActivities($filter: TimelineActivityFilterInput, $limit: Int) {\n",
    "  timelineActivities(filter: $filter, first: $limit) {\n",
    "    edges {\n      node {",
    activity_fields!(),
    "\n      createdAt\n      updatedAt\n      }\n    }\n",
    "    pageInfo { hasNextPage hasPreviousPage }\n  }\n}\n"
);

const UPDATE_TIMELINE_ACTIVITY: &str = concat!(
    "mutation UpdateTimelineActivity($id: UUID!, $input: TimelineActivityUpdateInput!) {\n",
    "  updateTimelineActivity(id: $id, data: $input) {",
    activity_fields!(),
    "\n      updatedAt\n  }\n}\n"
);

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineActivity {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub happens_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_record_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_object_metadata_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_record_cached_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_member_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opportunity_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_version_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_run_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTimelineActivityParams {
    #[schemars(description = "Activity name/title (required)")]
    pub name: String,
    #[schemars(
        description = "JSON object with activity details (e.g., {type: 'CALL', notes: 'Discussed pricing'})"
    )]
    pub properties: Option<Value>,
    #[schemars(description = "When the activity occurred (ISO 8601 format: YYYY-MM-DDTHH:MM:SSZ)")]
    pub happens_at: Option<String>,
    #[schemars(description = "ID of the workspace member associated with this activity")]
    pub workspace_member_id: Option<String>,
    #[schemars(description = "Person ID to associate with this activity")]
    pub person_id: Option<String>,
    #[schemars(description = "Company ID to associate with this activity")]
    pub company_id: Option<String>,
    #[schemars(description = "Opportunity ID to associate with this activity")]
    pub opportunity_id: Option<String>,
    #[schemars(description = "Note ID to associate with this activity")]
    pub note_id: Option<String>,
    #[schemars(description = "Task ID to associate with this activity")]
    pub task_id: Option<String>,
    #[schemars(description = "Workflow ID to associate with this activity")]
    pub workflow_id: Option<String>,
    #[schemars(description = "Workflow version ID")]
    pub workflow_version_id: Option<String>,
    #[schemars(description = "Workflow run ID")]
    pub workflow_run_id: Option<String>,
    #[schemars(description = "Dashboard ID to associate with this activity")]
    pub dashboard_id: Option<String>,
    #[schemars(description = "Linked record ID")]
    pub linked_record_id: Option<String>,
    #[schemars(description = "Linked object metadata ID")]
    pub linked_object_metadata_id: Option<String>,
    #[schemars(description = "Cached name of the linked record")]
    pub linked_record_cached_name: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTimelineActivityParams {
    #[schemars(description = "Timeline activity ID (required)")]
    pub id: String,
    #[schemars(description = "Activity name/title")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::serde_utils::double_option")]
    #[schemars(with = "Option<Value>", description = "JSON object with activity details")]
    pub properties: Option<Option<Value>>,
    #[serde(default, deserialize_with = "crate::serde_utils::double_option")]
    #[schemars(with = "Option<String>", description = "When the activity occurred (ISO 8601)")]
    pub happens_at: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::serde_utils::double_option")]
    #[schemars(with = "Option<String>", description = "Workspace member ID")]
    pub workspace_member_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::serde_utils::double_option")]
    #[schemars(with = "Option<String>", description = "Person ID")]
    pub person_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::serde_utils::double_option")]
    #[schemars(with = "Option<String>", description = "Company ID")]
    pub company_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::serde_utils::double_option")]
    #[schemars(with = "Option<String>", description = "Opportunity ID")]
    pub opportunity_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::serde_utils::double_option")]
    #[schemars(with = "Option<String>", description = "Note ID")]
    pub note_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::serde_utils::double_option")]
    #[schemars(with = "Option<String>", description = "Task ID")]
    pub task_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::serde_utils::double_option")]
    #[schemars(with = "Option<String>", description = "Workflow ID")]
    pub workflow_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::serde_utils::double_option")]
    #[schemars(with = "Option<String>", description = "Workflow version ID")]
    pub workflow_version_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::serde_utils::double_option")]
    #[schemars(with = "Option<String>", description = "Workflow run ID")]
    pub workflow_run_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::serde_utils::double_option")]
    #[schemars(with = "Option<String>", description = "Dashboard ID")]
    pub dashboard_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::serde_utils::double_option")]
    #[schemars(with = "Option<String>", description = "Linked record ID")]
    pub linked_record_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::serde_utils::double_option")]
    #[schemars(with = "Option<String>", description = "Linked object metadata ID")]
    pub linked_object_metadata_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::serde_utils::double_option")]
    #[schemars(with = "Option<String>", description = "Cached name of the linked record")]
    pub linked_record_cached_name: Option<Option<String>>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListTimelineActivitiesParams {
    #[schemars(description = "Number of results to return (max: 60, default: 20)")]
    pub limit: Option<u32>,
    #[schemars(description = "Search by activity name")]
    pub search_term: Option<String>,
    #[schemars(description = "Filter by person ID - show activities for this person")]
    pub person_id: Option<String>,
    #[schemars(description = "Filter by company ID - show activities for this company")]
    pub company_id: Option<String>,
    #[schemars(description = "Filter by opportunity ID - show activities for this opportunity")]
    pub opportunity_id: Option<String>,
    #[schemars(description = "Filter by workspace member ID")]
    pub workspace_member_id: Option<String>,
    #[schemars(description = "Filter by note ID - show activities for this note")]
    pub note_id: Option<String>,
    #[schemars(description = "Filter by task ID - show activities for this task")]
    pub task_id: Option<String>,
}

impl ListLimit for ListTimelineActivitiesParams {
    fn limit(&self) -> Option<u32> {
        self.limit
    }
}

/// Shared by create (plain values) and update (`Some(None)` clears a field).
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineActivityInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Option<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub happens_at: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_record_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_object_metadata_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_record_cached_name: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_member_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opportunity_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_version_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_run_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard_id: Option<Option<String>>,
}

fn set(value: Option<String>) -> Option<Option<String>> {
    present(value).map(Some)
}

impl Entity for TimelineActivity {
    const NAME: &'static str = "timelineActivity";
    const TYPE_NAME: &'static str = "TimelineActivity";
    const PLURAL: Option<&'static str> = Some("timelineActivities");

    const CREATE_MUTATION: &'static str = CREATE_TIMELINE_ACTIVITY;
    const GET_QUERY: &'static str = GET_TIMELINE_ACTIVITY;
    const LIST_QUERY: &'static str = LIST_TIMELINE_ACTIVITIES;
    const UPDATE_MUTATION: &'static str = UPDATE_TIMELINE_ACTIVITY;

    type Record = TimelineActivity;
    type CreateParams = CreateTimelineActivityParams;
    type UpdateParams = UpdateTimelineActivityParams;
    type ListParams = ListTimelineActivitiesParams;
    type Input = TimelineActivityInput;
    type Patch = TimelineActivityInput;

    fn create_input(params: CreateTimelineActivityParams) -> CrmResult<TimelineActivityInput> {
        Ok(TimelineActivityInput {
            name: Some(params.name),
            properties: params.properties.filter(|p| !p.is_null()).map(Some),
            happens_at: set(params.happens_at),
            linked_record_id: set(params.linked_record_id),
            linked_object_metadata_id: set(params.linked_object_metadata_id),
            linked_record_cached_name: set(params.linked_record_cached_name),
            workspace_member_id: set(params.workspace_member_id),
            person_id: set(params.person_id),
            company_id: set(params.company_id),
            opportunity_id: set(params.opportunity_id),
            note_id: set(params.note_id),
            task_id: set(params.task_id),
            workflow_id: set(params.workflow_id),
            workflow_version_id: set(params.workflow_version_id),
            workflow_run_id: set(params.workflow_run_id),
            dashboard_id: set(params.dashboard_id),
        })
    }

    fn update_input(params: UpdateTimelineActivityParams) -> (String, TimelineActivityInput) {
        let patch = TimelineActivityInput {
            name: params.name,
            properties: params.properties,
            happens_at: params.happens_at,
            linked_record_id: params.linked_record_id,
            linked_object_metadata_id: params.linked_object_metadata_id,
            linked_record_cached_name: params.linked_record_cached_name,
            workspace_member_id: params.workspace_member_id,
            person_id: params.person_id,
            company_id: params.company_id,
            opportunity_id: params.opportunity_id,
            note_id: params.note_id,
            task_id: params.task_id,
            workflow_id: params.workflow_id,
            workflow_version_id: params.workflow_version_id,
            workflow_run_id: params.workflow_run_id,
            dashboard_id: params.dashboard_id,
        };

        (params.id, patch)
    }

    fn list_filter(params: &ListTimelineActivitiesParams) -> Option<Value> {
        FilterBuilder::new()
            .ilike("name", params.search_term.as_deref())
            .eq("personId", params.person_id.as_deref())
            .eq("companyId", params.company_id.as_deref())
            .eq("opportunityId", params.opportunity_id.as_deref())
            .eq("workspaceMemberId", params.workspace_member_id.as_deref())
            .eq("noteId", params.note_id.as_deref())
            .eq("taskId", params.task_id.as_deref())
            .build()
    }

    fn created_message(activity: &TimelineActivity) -> String {
        format!(
            "✅ Created timeline activity: {}",
            activity.name.as_deref().unwrap_or_default()
        )
    }
}

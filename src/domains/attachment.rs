//! Attachments: files linked to a task, opportunity, company, person,
//! workflow or dashboard.
//!
//! Reads are enriched with a [`LocalPreview`] when a [`PreviewResolver`] is
//! available.

use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::crud::{self, more_marker};
use crate::error::{CrmError, CrmResult};
use crate::graphql::{Connection, GraphQlClient, HttpTransport};
use crate::preview::{LocalPreview, PreviewResolver};

use super::{CreatedBy, FilterBuilder, first_link, present};

pub const MISSING_RELATIONSHIP: &str = "At least one relationship ID (taskId, companyId, personId, opportunityId, workflowId, or dashboardId) must be provided";

const CREATE_ATTACHMENT: &str = r#"
  mutation CreateAttachment($input: AttachmentCreateInput!) {
    createAttachment(data: $input) {
      id
      name
      fullPath
      type
      fileCategory
      taskId
      opportunityId
      companyId
      personId
      workflowId
      dashboardId
      authorId
      createdBy { source }
      createdAt
      updatedAt
    }
  }
"#;

const GET_ATTACHMENT: &str = r#"
  query GetAttachment($id: UUID!) {
    attachment(filter: { id: { eq: $id } }) {
      id
      name
      fullPath
      type
      fileCategory
      taskId
      opportunityId
      companyId
      personId
      workflowId
      dashboardId
      authorId
      createdBy { source }
      createdAt
      updatedAt
      deletedAt
    }
  }
"#;

const LIST_ATTACHMENTS: &str = r#"
  query ListAttachments($filter: AttachmentFilterInput, $limit: Int) {
    attachments(filter: $filter, first: $limit) {
      edges {
        node {
          id
          name
          fullPath
          type
          fileCategory
          taskId
          opportunityId
          companyId
          personId
          workflowId
          dashboardId
          authorId
          createdBy { source }
          createdAt
          updatedAt
        }
      }
      pageInfo { hasNextPage hasPreviousPage }
    }
  }
"#;

const DELETE_ATTACHMENT: &str = r#"
  mutation DeleteAttachment($id: UUID!) {
    deleteAttachment(id: $id) {
      id
    }
  }
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FileCategory {
    Archive,
    Audio,
    Image,
    Presentation,
    Spreadsheet,
    TextDocument,
    Video,
    Other,
}

impl FileCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            FileCategory::Archive => "ARCHIVE",
            FileCategory::Audio => "AUDIO",
            FileCategory::Image => "IMAGE",
            FileCategory::Presentation => "PRESENTATION",
            FileCategory::Spreadsheet => "SPREADSHEET",
            FileCategory::TextDocument => "TEXT_DOCUMENT",
            FileCategory::Video => "VIDEO",
            FileCategory::Other => "OTHER",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_path: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opportunity_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<CreatedBy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<String>,
    /// Never sent by the API; filled in locally.
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub local_preview: Option<LocalPreview>,
}

impl Attachment {
    /// Linked record in task, company, person, opportunity, workflow, dashboard order.
    pub fn linked_to(&self) -> Option<(&'static str, &str)> {
        first_link(&[
            ("task", &self.task_id),
            ("company", &self.company_id),
            ("person", &self.person_id),
            ("opportunity", &self.opportunity_id),
            ("workflow", &self.workflow_id),
            ("dashboard", &self.dashboard_id),
        ])
    }

    fn enrich(&mut self, resolver: Option<&PreviewResolver>) {
        if let Some(resolver) = resolver {
            self.local_preview = resolver.preview(self.full_path.as_deref(), self.name.as_deref());
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAttachmentParams {
    #[schemars(description = "Attachment name/filename (required)")]
    pub name: String,
    #[schemars(description = "Full path or URL to the file (required)")]
    pub full_path: String,
    #[schemars(description = "File category (optional)")]
    pub file_category: Option<FileCategory>,
    #[schemars(description = "Task ID to attach the file to")]
    pub task_id: Option<String>,
    #[schemars(description = "Opportunity ID to attach the file to")]
    pub opportunity_id: Option<String>,
    #[schemars(description = "Company ID to attach the file to")]
    pub company_id: Option<String>,
    #[schemars(description = "Person ID to attach the file to")]
    pub person_id: Option<String>,
    #[schemars(description = "Workflow ID to attach the file to")]
    pub workflow_id: Option<String>,
    #[schemars(description = "Dashboard ID to attach the file to")]
    pub dashboard_id: Option<String>,
    #[schemars(description = "Author ID (workspace member who created the attachment)")]
    pub author_id: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListAttachmentsParams {
    #[schemars(description = "Number of results to return (max: 60, default: 20)")]
    pub limit: Option<u32>,
    #[schemars(description = "Search by attachment name")]
    pub search_term: Option<String>,
    #[schemars(description = "Filter by file category")]
    pub file_category: Option<FileCategory>,
    #[schemars(description = "Filter by task ID - show attachments for this task")]
    pub task_id: Option<String>,
    #[schemars(description = "Filter by opportunity ID - show attachments for this opportunity")]
    pub opportunity_id: Option<String>,
    #[schemars(description = "Filter by company ID - show attachments for this company")]
    pub company_id: Option<String>,
    #[schemars(description = "Filter by person ID - show attachments for this person")]
    pub person_id: Option<String>,
    #[schemars(description = "Filter by workflow ID - show attachments for this workflow")]
    pub workflow_id: Option<String>,
    #[schemars(description = "Filter by dashboard ID - show attachments for this dashboard")]
    pub dashboard_id: Option<String>,
    #[schemars(description = "Filter by author ID (workspace member)")]
    pub author_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentInput {
    pub name: String,
    pub full_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_category: Option<FileCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opportunity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,
}

impl TryFrom<CreateAttachmentParams> for AttachmentInput {
    type Error = CrmError;

    fn try_from(params: CreateAttachmentParams) -> CrmResult<Self> {
        let input = AttachmentInput {
            name: params.name,
            full_path: params.full_path,
            file_category: params.file_category,
            task_id: present(params.task_id),
            opportunity_id: present(params.opportunity_id),
            company_id: present(params.company_id),
            person_id: present(params.person_id),
            workflow_id: present(params.workflow_id),
            dashboard_id: present(params.dashboard_id),
            author_id: present(params.author_id),
        };

        if input.linked_to().is_none() {
            return Err(CrmError::validation(MISSING_RELATIONSHIP));
        }
        Ok(input)
    }
}

impl AttachmentInput {
    fn linked_to(&self) -> Option<(&'static str, &str)> {
        first_link(&[
            ("task", &self.task_id),
            ("company", &self.company_id),
            ("person", &self.person_id),
            ("opportunity", &self.opportunity_id),
            ("workflow", &self.workflow_id),
            ("dashboard", &self.dashboard_id),
        ])
    }
}

fn list_filter(params: &ListAttachmentsParams) -> Option<Value> {
    FilterBuilder::new()
        .ilike("name", params.search_term.as_deref())
        .eq("fileCategory", params.file_category.map(FileCategory::as_str))
        .eq("taskId", params.task_id.as_deref())
        .eq("opportunityId", params.opportunity_id.as_deref())
        .eq("companyId", params.company_id.as_deref())
        .eq("personId", params.person_id.as_deref())
        .eq("workflowId", params.workflow_id.as_deref())
        .eq("dashboardId", params.dashboard_id.as_deref())
        .eq("authorId", params.author_id.as_deref())
        .build()
}

pub async fn create<T: HttpTransport>(
    client: &GraphQlClient<T>,
    resolver: Option<&PreviewResolver>,
    params: CreateAttachmentParams,
) -> CrmResult<String> {
    let input = AttachmentInput::try_from(params)?;
    let requested = input.linked_to().map(|(kind, id)| format!("{kind} ({id})"));

    let mut attachment: Attachment = client
        .request_field(
            CREATE_ATTACHMENT,
            json!({ "input": input }),
            "createAttachment",
        )
        .await?;
    attachment.enrich(resolver);

    let linked = attachment
        .linked_to()
        .map(|(kind, id)| format!("{kind} ({id})"))
        .or(requested)
        .unwrap_or_default();

    crud::render(
        &format!(
            "✅ Created attachment: {}\nLinked to: {linked}",
            attachment.name.as_deref().unwrap_or_default()
        ),
        &attachment,
    )
}

pub async fn get<T: HttpTransport>(
    client: &GraphQlClient<T>,
    resolver: Option<&PreviewResolver>,
    id: &str,
) -> CrmResult<String> {
    let mut attachment: Attachment = client
        .request_field(GET_ATTACHMENT, json!({ "id": id }), "attachment")
        .await?;
    attachment.enrich(resolver);

    crud::render("Attachment details:", &attachment)
}

pub async fn list<T: HttpTransport>(
    client: &GraphQlClient<T>,
    resolver: Option<&PreviewResolver>,
    params: &ListAttachmentsParams,
) -> CrmResult<String> {
    let variables = crud::list_variables(list_filter(params), params.limit);
    let connection: Connection<Attachment> = client
        .request_field(LIST_ATTACHMENTS, variables, "attachments")
        .await?;

    let has_more = connection.has_more();
    let mut attachments = connection.into_nodes();
    for attachment in &mut attachments {
        attachment.enrich(resolver);
    }

    crud::render(
        &format!(
            "Found {} attachment(s){}",
            attachments.len(),
            more_marker(has_more)
        ),
        &attachments,
    )
}

pub async fn delete<T: HttpTransport>(client: &GraphQlClient<T>, id: &str) -> CrmResult<String> {
    client.request(DELETE_ATTACHMENT, json!({ "id": id })).await?;
    Ok(format!("✅ Deleted attachment: {id}"))
}

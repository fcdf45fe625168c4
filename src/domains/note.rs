//! Notes.

use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::crud::{Entity, ListLimit};
use crate::error::CrmResult;
use crate::transform::{RichText, transform_body};

use super::{CreatedBy, FilterBuilder, present};

const CREATE_NOTE: &str = r#"
  mutation CreateNote($input: NoteCreateInput!) {
    createNote(data: $input) {
      id
      title
      bodyV2 { blocknote markdown }
      position
      createdBy { source }
      createdAt
    }
  }
"#;

const GET_NOTE: &str = r#"
  query GetNote($id: UUID!) {
    note(filter: { id: { eq: $id } }) {
      id
      title
      bodyV2 { blocknote markdown }
      position
      createdBy { source }
      createdAt
      updatedAt
      deletedAt
    }
  }
"#;

const LIST_NOTES: &str = r#"
  query ListNotes($filter: NoteFilterInput, $limit: Int) {
    notes(filter: $filter, first: $limit) {
      edges {
        node {
          id
          title
          bodyV2 { blocknote markdown }
          position
          createdBy { source }
          createdAt
          updatedAt
        }
      }
      pageInfo { hasNextPage hasPreviousPage }
    }
  }
"#;

const UPDATE_NOTE: &str = r#"
  mutation UpdateNote($id: UUID!, $input: NoteUpdateInput!) {
    updateNote(id: $id, data: $input) {
      id
      title
      bodyV2 { blocknote markdown }
      position
      updatedAt
    }
  }
"#;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_v2: Option<RichText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<CreatedBy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteParams {
    #[schemars(description = "Note title (required)")]
    pub title: String,
    #[schemars(description = "Note content in markdown format")]
    pub body: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNoteParams {
    #[schemars(description = "Note ID (required)")]
    pub id: String,
    #[schemars(description = "Note title")]
    pub title: Option<String>,
    #[schemars(description = "Note content in markdown format")]
    pub body: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListNotesParams {
    #[schemars(description = "Number of results to return (max: 60, default: 20)")]
    pub limit: Option<u32>,
    #[schemars(description = "Search by note title")]
    pub search_term: Option<String>,
}

impl ListLimit for ListNotesParams {
    fn limit(&self) -> Option<u32> {
        self.limit
    }
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_v2: Option<RichText>,
}

impl Entity for Note {
    const NAME: &'static str = "note";
    const TYPE_NAME: &'static str = "Note";

    const CREATE_MUTATION: &'static str = CREATE_NOTE;
    const GET_QUERY: &'static str = GET_NOTE;
    const LIST_QUERY: &'static str = LIST_NOTES;
    const UPDATE_MUTATION: &'static str = UPDATE_NOTE;

    type Record = Note;
    type CreateParams = CreateNoteParams;
    type UpdateParams = UpdateNoteParams;
    type ListParams = ListNotesParams;
    type Input = NoteInput;
    type Patch = NoteInput;

    fn create_input(params: CreateNoteParams) -> CrmResult<NoteInput> {
        Ok(NoteInput {
            title: Some(params.title),
            body_v2: present(params.body).map(|body| transform_body(&body)),
        })
    }

    fn update_input(params: UpdateNoteParams) -> (String, NoteInput) {
        let patch = NoteInput {
            title: params.title,
            body_v2: params.body.map(|body| transform_body(&body)),
        };
        (params.id, patch)
    }

    fn list_filter(params: &ListNotesParams) -> Option<Value> {
        FilterBuilder::new()
            .ilike("title", params.search_term.as_deref())
            .build()
    }

    fn created_message(note: &Note) -> String {
        format!(
            "✅ Created note: {}",
            note.title.as_deref().unwrap_or_default()
        )
    }
}

//! Note targets.

use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};

use crate::error::CrmResult;
use crate::graphql::{GraphQlClient, HttpTransport};

use super::junction::{self, Junction, TargetLinks};

pub struct NoteTargets;

impl Junction for NoteTargets {
    const OWNER: &'static str = "note";
    const OWNER_KEY: &'static str = "noteId";
    const TYPE_NAME: &'static str = "NoteTarget";
    const LIST_FIELD: &'static str = "noteTargets";

    const CREATE_MUTATION: &'static str = r#"
  mutation CreateNoteTarget($input: NoteTargetCreateInput!) {
    createNoteTarget(data: $input) {
      id
      noteId
      personId
      companyId
      opportunityId
      createdAt
      updatedAt
    }
  }
"#;

    const LIST_QUERY: &'static str = r#"
  query ListNoteTargets($filter: NoteTargetFilterInput, $limit: Int) {
    noteTargets(filter: $filter, first: $limit) {
      edges {
        node {
          id
          noteId
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
  mutation DeleteNoteTarget($id: UUID!) {
    deleteNoteTarget(id: $id) {
      id
    }
  }
"#;
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteTargetParams {
    #[schemars(description = "Note ID to link (required)")]
    pub note_id: String,
    #[schemars(description = "Person ID to link the note to")]
    pub person_id: Option<String>,
    #[schemars(description = "Company ID to link the note to")]
    pub company_id: Option<String>,
    #[schemars(description = "Opportunity ID to link the note to")]
    pub opportunity_id: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListNoteTargetsParams {
    #[schemars(description = "Filter by note ID - show all entities linked to this note")]
    pub note_id: Option<String>,
    #[schemars(description = "Filter by person ID - show all notes linked to this person")]
    pub person_id: Option<String>,
    #[schemars(description = "Filter by company ID - show all notes linked to this company")]
    pub company_id: Option<String>,
    #[schemars(description = "Filter by opportunity ID - show all notes linked to this opportunity")]
    pub opportunity_id: Option<String>,
    #[schemars(description = "Number of results to return (max: 60, default: 20)")]
    pub limit: Option<u32>,
}

pub async fn create<T: HttpTransport>(
    client: &GraphQlClient<T>,
    params: CreateNoteTargetParams,
) -> CrmResult<String> {
    let links = TargetLinks {
        person_id: params.person_id,
        company_id: params.company_id,
        opportunity_id: params.opportunity_id,
    };
    junction::create::<NoteTargets, T>(client, params.note_id, links).await
}

pub async fn list<T: HttpTransport>(
    client: &GraphQlClient<T>,
    params: ListNoteTargetsParams,
) -> CrmResult<String> {
    let links = TargetLinks {
        person_id: params.person_id,
        company_id: params.company_id,
        opportunity_id: params.opportunity_id,
    };
    junction::list::<NoteTargets, T>(client, params.note_id.as_deref(), &links, params.limit).await
}

pub async fn delete<T: HttpTransport>(client: &GraphQlClient<T>, id: &str) -> CrmResult<String> {
    junction::delete::<NoteTargets, T>(client, id).await
}

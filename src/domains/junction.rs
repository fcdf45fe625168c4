//! Shared behavior of the task and note target tables, which link one task
//! or note to a person, company or opportunity.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::crud::{self, more_marker};
use crate::error::{CrmError, CrmResult};
use crate::graphql::{Connection, GraphQlClient, HttpTransport};

use super::{FilterBuilder, first_link, present};

pub const MISSING_TARGET: &str =
    "At least one target (personId, companyId, or opportunityId) must be provided";

pub trait Junction {
    /// Owning object, `task` or `note`.
    const OWNER: &'static str;
    /// Owner foreign key, e.g. `taskId`.
    const OWNER_KEY: &'static str;
    const TYPE_NAME: &'static str;
    /// Collection root field, e.g. `taskTargets`.
    const LIST_FIELD: &'static str;

    const CREATE_MUTATION: &'static str;
    const LIST_QUERY: &'static str;
    const DELETE_MUTATION: &'static str;
}

/// Record the owner is linked to. Empty strings count as absent.
#[derive(Debug, Clone, Default)]
pub struct TargetLinks {
    pub person_id: Option<String>,
    pub company_id: Option<String>,
    pub opportunity_id: Option<String>,
}

impl TargetLinks {
    fn normalized(self) -> Self {
        Self {
            person_id: present(self.person_id),
            company_id: present(self.company_id),
            opportunity_id: present(self.opportunity_id),
        }
    }

    fn first(&self) -> Option<(&'static str, &str)> {
        first_link(&[
            ("person", &self.person_id),
            ("company", &self.company_id),
            ("opportunity", &self.opportunity_id),
        ])
    }
}

/// Task target or note target; only the matching owner id is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opportunity_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl TargetRecord {
    fn target(&self) -> Option<(&'static str, &str)> {
        first_link(&[
            ("person", &self.person_id),
            ("company", &self.company_id),
            ("opportunity", &self.opportunity_id),
        ])
    }
}

/// Mutation input: owner key plus whichever targets are set.
fn create_input<J: Junction>(owner_id: String, links: &TargetLinks) -> Value {
    let mut input = Map::new();
    input.insert(J::OWNER_KEY.to_string(), Value::String(owner_id));
    for (key, value) in [
        ("personId", &links.person_id),
        ("companyId", &links.company_id),
        ("opportunityId", &links.opportunity_id),
    ] {
        if let Some(value) = value {
            input.insert(key.to_string(), Value::String(value.clone()));
        }
    }
    Value::Object(input)
}

pub async fn create<J: Junction, T: HttpTransport>(
    client: &GraphQlClient<T>,
    owner_id: String,
    links: TargetLinks,
) -> CrmResult<String> {
    let links = links.normalized();
    let requested = links
        .first()
        .map(|(kind, id)| (kind, id.to_string()))
        .ok_or_else(|| CrmError::validation(MISSING_TARGET))?;

    let input = create_input::<J>(owner_id, &links);
    let record: TargetRecord = client
        .request_field(
            J::CREATE_MUTATION,
            json!({ "input": input }),
            &format!("create{}", J::TYPE_NAME),
        )
        .await?;

    let (kind, id) = record
        .target()
        .map(|(kind, id)| (kind, id.to_string()))
        .unwrap_or(requested);

    crud::render(&format!("✅ Linked {} to {kind} ({id})", J::OWNER), &record)
}

pub async fn list<J: Junction, T: HttpTransport>(
    client: &GraphQlClient<T>,
    owner_id: Option<&str>,
    links: &TargetLinks,
    limit: Option<u32>,
) -> CrmResult<String> {
    let filter = FilterBuilder::new()
        .eq(J::OWNER_KEY, owner_id)
        .eq("personId", links.person_id.as_deref())
        .eq("companyId", links.company_id.as_deref())
        .eq("opportunityId", links.opportunity_id.as_deref())
        .build();

    let connection: Connection<TargetRecord> = client
        .request_field(
            J::LIST_QUERY,
            crud::list_variables(filter, limit),
            J::LIST_FIELD,
        )
        .await?;

    let has_more = connection.has_more();
    let targets = connection.into_nodes();
    crud::render(
        &format!(
            "Found {} {} target(s){}",
            targets.len(),
            J::OWNER,
            more_marker(has_more)
        ),
        &targets,
    )
}

pub async fn delete<J: Junction, T: HttpTransport>(
    client: &GraphQlClient<T>,
    id: &str,
) -> CrmResult<String> {
    client
        .request(J::DELETE_MUTATION, json!({ "id": id }))
        .await?;
    Ok(format!("✅ Deleted {} target: {id}", J::OWNER))
}

//! Opportunities (deals).

use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::crud::{Entity, ListLimit};
use crate::error::CrmResult;
use crate::transform::{Currency, transform_currency};

use super::{CompanyRef, FilterBuilder, PersonRef, present};

const CREATE_OPPORTUNITY: &str = r#"
  mutation CreateOpportunity($input: OpportunityCreateInput!) {
    createOpportunity(data: $input) {
      id
      name
      amount { amountMicros currencyCode }
      stage
      closeDate
      companyId
      company { id name }
      pointOfContactId
      pointOfContact { id name { firstName lastName } }
      createdAt
    }
  }
"#;

const GET_OPPORTUNITY: &str = r#"
  query GetOpportunity($id: UUID!) {
    opportunity(filter: { id: { eq: $id } }) {
      id
      name
      amount { amountMicros currencyCode }
      stage
      closeDate
      companyId
      company { id name }
      pointOfContactId
      pointOfContact { id name { firstName lastName } }
      createdAt
      updatedAt
    }
  }
"#;

const LIST_OPPORTUNITIES: &str = r#"
  query ListOpportunities($filter: OpportunityFilterInput, $limit: Int) {
    opportunities(filter: $filter, first: $limit) {
      edges {
        node {
          id
          name
          amount { amountMicros currencyCode }
          stage
          closeDate
          companyId
          company { id name }
          pointOfContactId
          pointOfContact { id name { firstName lastName } }
        }
      }
      pageInfo { hasNextPage hasPreviousPage }
    }
  }
"#;

const UPDATE_OPPORTUNITY: &str = r#"
  mutation UpdateOpportunity($id: UUID!, $input: OpportunityUpdateInput!) {
    updateOpportunity(id: $id, data: $input) {
      id
      name
      amount { amountMicros currencyCode }
      stage
      closeDate
      companyId
      pointOfContactId
      updatedAt
    }
  }
"#;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Currency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<CompanyRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_of_contact_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_of_contact: Option<PersonRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOpportunityParams {
    #[schemars(description = "Opportunity name (required)")]
    pub name: String,
    #[schemars(description = "Deal amount (will be stored in micros)")]
    pub amount: Option<f64>,
    #[schemars(description = "Currency code (e.g., 'EUR', 'USD'), defaults to USD")]
    pub currency: Option<String>,
    #[schemars(
        description = "Opportunity stage (e.g., 'NEW', 'SCREENING', 'MEETING', 'PROPOSAL', 'CUSTOMER')"
    )]
    pub stage: Option<String>,
    #[schemars(description = "Expected close date (ISO 8601 format: YYYY-MM-DD)")]
    pub close_date: Option<String>,
    #[schemars(description = "Company ID to associate with")]
    pub company_id: Option<String>,
    #[schemars(description = "Person ID for point of contact")]
    pub point_of_contact_id: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOpportunityParams {
    #[schemars(description = "Opportunity ID (required)")]
    pub id: String,
    #[schemars(description = "Opportunity name")]
    pub name: Option<String>,
    #[schemars(description = "Deal amount")]
    pub amount: Option<f64>,
    #[schemars(description = "Currency code")]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "crate::serde_utils::double_option")]
    #[schemars(with = "Option<String>", description = "Opportunity stage")]
    pub stage: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::serde_utils::double_option")]
    #[schemars(with = "Option<String>", description = "Expected close date (ISO 8601)")]
    pub close_date: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::serde_utils::double_option")]
    #[schemars(with = "Option<String>", description = "Company ID (null unlinks the company)")]
    pub company_id: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::serde_utils::double_option")]
    #[schemars(with = "Option<String>", description = "Point of contact person ID")]
    pub point_of_contact_id: Option<Option<String>>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListOpportunitiesParams {
    #[schemars(description = "Number of results to return (max: 60, default: 20)")]
    pub limit: Option<u32>,
    #[schemars(description = "Search by opportunity name")]
    pub search_term: Option<String>,
    #[schemars(description = "Filter by company ID")]
    pub company_id: Option<String>,
    #[schemars(description = "Filter by stage")]
    pub stage: Option<String>,
}

impl ListLimit for ListOpportunitiesParams {
    fn limit(&self) -> Option<u32> {
        self.limit
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_of_contact_id: Option<String>,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_date: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_of_contact_id: Option<Option<String>>,
}

impl Entity for Opportunity {
    const NAME: &'static str = "opportunity";
    const TYPE_NAME: &'static str = "Opportunity";

    const CREATE_MUTATION: &'static str = CREATE_OPPORTUNITY;
    const GET_QUERY: &'static str = GET_OPPORTUNITY;
    const LIST_QUERY: &'static str = LIST_OPPORTUNITIES;
    const UPDATE_MUTATION: &'static str = UPDATE_OPPORTUNITY;

    type Record = Opportunity;
    type CreateParams = CreateOpportunityParams;
    type UpdateParams = UpdateOpportunityParams;
    type ListParams = ListOpportunitiesParams;
    type Input = OpportunityInput;
    type Patch = OpportunityPatch;

    fn create_input(params: CreateOpportunityParams) -> CrmResult<OpportunityInput> {
        // Any supplied amount is sent, zero included.
        let amount = params
            .amount
            .map(|amount| transform_currency(amount, params.currency.as_deref()));

        Ok(OpportunityInput {
            name: params.name,
            amount,
            stage: present(params.stage),
            close_date: present(params.close_date),
            company_id: present(params.company_id),
            point_of_contact_id: present(params.point_of_contact_id),
        })
    }

    fn update_input(params: UpdateOpportunityParams) -> (String, OpportunityPatch) {
        let amount = params
            .amount
            .map(|amount| transform_currency(amount, params.currency.as_deref()));

        let patch = OpportunityPatch {
            name: params.name,
            amount,
            stage: params.stage,
            close_date: params.close_date,
            company_id: params.company_id,
            point_of_contact_id: params.point_of_contact_id,
        };

        (params.id, patch)
    }

    fn list_filter(params: &ListOpportunitiesParams) -> Option<Value> {
        FilterBuilder::new()
            .ilike("name", params.search_term.as_deref())
            .eq("companyId", params.company_id.as_deref())
            .eq("stage", params.stage.as_deref())
            .build()
    }

    fn created_message(opportunity: &Opportunity) -> String {
        format!(
            "✅ Created opportunity: {}",
            opportunity.name.as_deref().unwrap_or_default()
        )
    }
}

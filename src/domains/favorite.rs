//! Favorites: a person, company or opportunity pinned by a workspace member.

use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::crud::{self, more_marker};
use crate::error::{CrmError, CrmResult};
use crate::graphql::{Connection, GraphQlClient, HttpTransport};

use super::{FilterBuilder, first_link, present};

pub const MISSING_TARGET: &str =
    "At least one target (personId, companyId, or opportunityId) must be provided";

const CREATE_FAVORITE: &str = r#"
  mutation CreateFavorite($input: FavoriteCreateInput!) {
    createFavorite(data: $input) {
      id
      position
      personId
      companyId
      opportunityId
      forWorkspaceMemberId
      createdAt
      updatedAt
    }
  }
"#;

const GET_FAVORITE: &str = r#"
  query GetFavorite($id: UUID!) {
    favorite(filter: { id: { eq: $id } }) {
      id
      position
      personId
      companyId
      opportunityId
      forWorkspaceMemberId
      createdAt
      updatedAt
    }
  }
"#;

const LIST_FAVORITES: &str = r#"
  query ListFavorites($filter: FavoriteFilterInput, $limit: Int) {
    favorites(filter: $filter, first: $limit) {
      edges {
        node {
          id
          position
          personId
          companyId
          opportunityId
          forWorkspaceMemberId
          createdAt
          updatedAt
        }
      }
      pageInfo { hasNextPage hasPreviousPage }
    }
  }
"#;

const DELETE_FAVORITE: &str = r#"
  mutation DeleteFavorite($id: UUID!) {
    deleteFavorite(id: $id) {
      id
    }
  }
"#;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opportunity_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub for_workspace_member_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Favorite {
    fn target(&self) -> Option<(&'static str, &str)> {
        first_link(&[
            ("person", &self.person_id),
            ("company", &self.company_id),
            ("opportunity", &self.opportunity_id),
        ])
    }
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddFavoriteParams {
    #[schemars(description = "Person ID to add to favorites")]
    pub person_id: Option<String>,
    #[schemars(description = "Company ID to add to favorites")]
    pub company_id: Option<String>,
    #[schemars(description = "Opportunity ID to add to favorites")]
    pub opportunity_id: Option<String>,
    #[schemars(description = "Position in favorites list (optional)")]
    pub position: Option<f64>,
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListFavoritesParams {
    #[schemars(description = "Number of results to return (max: 60, default: 20)")]
    pub limit: Option<u32>,
    #[schemars(description = "Filter by person ID")]
    pub person_id: Option<String>,
    #[schemars(description = "Filter by company ID")]
    pub company_id: Option<String>,
    #[schemars(description = "Filter by opportunity ID")]
    pub opportunity_id: Option<String>,
    #[schemars(description = "Filter by workspace member ID")]
    pub for_workspace_member_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opportunity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<f64>,
}

impl TryFrom<AddFavoriteParams> for FavoriteInput {
    type Error = CrmError;

    fn try_from(params: AddFavoriteParams) -> CrmResult<Self> {
        let input = FavoriteInput {
            person_id: present(params.person_id),
            company_id: present(params.company_id),
            opportunity_id: present(params.opportunity_id),
            position: params.position,
        };

        if input.person_id.is_none() && input.company_id.is_none() && input.opportunity_id.is_none()
        {
            return Err(CrmError::validation(MISSING_TARGET));
        }
        Ok(input)
    }
}

fn list_filter(params: &ListFavoritesParams) -> Option<Value> {
    FilterBuilder::new()
        .eq("personId", params.person_id.as_deref())
        .eq("companyId", params.company_id.as_deref())
        .eq("opportunityId", params.opportunity_id.as_deref())
        .eq("forWorkspaceMemberId", params.for_workspace_member_id.as_deref())
        .build()
}

pub async fn add<T: HttpTransport>(
    client: &GraphQlClient<T>,
    params: AddFavoriteParams,
) -> CrmResult<String> {
    let input = FavoriteInput::try_from(params)?;
    let requested = first_link(&[
        ("person", &input.person_id),
        ("company", &input.company_id),
        ("opportunity", &input.opportunity_id),
    ])
    .map(|(kind, id)| (kind, id.to_string()));

    let favorite: Favorite = client
        .request_field(CREATE_FAVORITE, json!({ "input": input }), "createFavorite")
        .await?;

    let (kind, id) = favorite
        .target()
        .map(|(kind, id)| (kind, id.to_string()))
        .or(requested)
        .unwrap_or(("opportunity", String::new()));

    crud::render(&format!("✅ Added {kind} to favorites ({id})"), &favorite)
}

pub async fn get<T: HttpTransport>(client: &GraphQlClient<T>, id: &str) -> CrmResult<String> {
    let favorite: Favorite = client
        .request_field(GET_FAVORITE, json!({ "id": id }), "favorite")
        .await?;
    crud::render("Favorite details:", &favorite)
}

pub async fn list<T: HttpTransport>(
    client: &GraphQlClient<T>,
    params: &ListFavoritesParams,
) -> CrmResult<String> {
    let variables = crud::list_variables(list_filter(params), params.limit);
    let connection: Connection<Favorite> = client
        .request_field(LIST_FAVORITES, variables, "favorites")
        .await?;

    let has_more = connection.has_more();
    let favorites = connection.into_nodes();
    crud::render(
        &format!(
            "Found {} favorite(s){}",
            favorites.len(),
            more_marker(has_more)
        ),
        &favorites,
    )
}

pub async fn remove<T: HttpTransport>(client: &GraphQlClient<T>, id: &str) -> CrmResult<String> {
    client.request(DELETE_FAVORITE, json!({ "id": id })).await?;
    Ok(format!("✅ Removed favorite: {id}"))
}

//! Generic create/get/list/update operations.
//!
//! Each uniform CRM object implements [`Entity`] once: its GraphQL documents,
//! its typed record, and how flat tool parameters become mutation inputs and
//! list filters. The functions in this module then perform exactly one
//! GraphQL round-trip per call and render the text returned to the agent.
//!
//! Errors are never caught here; they propagate to the MCP boundary.

use std::borrow::Cow;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::error::CrmResult;
use crate::graphql::{Connection, GraphQlClient, HttpTransport};

pub const DEFAULT_LIST_LIMIT: u32 = 20;
pub const MAX_LIST_LIMIT: u32 = 60;

/// Page size requested by a list call.
pub trait ListLimit {
    fn limit(&self) -> Option<u32>;
}

/// Description of one uniform CRM object.
pub trait Entity {
    /// Lower camel case name, also the root field of the get query.
    const NAME: &'static str;
    /// Upper camel case name used in `create{..}` / `update{..}` root fields.
    const TYPE_NAME: &'static str;
    /// Irregular plural; regular ones are derived from `NAME`.
    const PLURAL: Option<&'static str> = None;

    const CREATE_MUTATION: &'static str;
    const GET_QUERY: &'static str;
    const LIST_QUERY: &'static str;
    const UPDATE_MUTATION: &'static str;

    type Record: Serialize + DeserializeOwned;
    type CreateParams;
    type UpdateParams;
    type ListParams: ListLimit;
    type Input: Serialize;
    type Patch: Serialize;

    fn create_input(params: Self::CreateParams) -> CrmResult<Self::Input>;

    /// Split update parameters into the record id and the patch to send.
    fn update_input(params: Self::UpdateParams) -> (String, Self::Patch);

    /// `None` when no criteria apply; sent as a `null` filter.
    fn list_filter(params: &Self::ListParams) -> Option<Value>;

    fn created_message(_record: &Self::Record) -> String {
        format!("✅ Created {}", Self::NAME)
    }

    fn list_summary(count: usize, has_more: bool) -> String {
        format!(
            "Found {} {}{}",
            count,
            plural_name::<Self>(),
            more_marker(has_more)
        )
    }
}

/// Collection root field: explicit plural, else `y` → `ies`, else `+s`.
pub fn plural_name<E: Entity + ?Sized>() -> Cow<'static, str> {
    match E::PLURAL {
        Some(plural) => Cow::Borrowed(plural),
        None => Cow::Owned(pluralize(E::NAME)),
    }
}

pub fn pluralize(name: &str) -> String {
    match name.strip_suffix('y') {
        Some(stem) => format!("{stem}ies"),
        None => format!("{name}s"),
    }
}

pub fn more_marker(has_more: bool) -> &'static str {
    if has_more { " (more available)" } else { "" }
}

/// Requested limit with the default applied, clamped to `1..=MAX_LIST_LIMIT`.
pub fn apply_limit(limit: Option<u32>) -> u32 {
    limit
        .unwrap_or(DEFAULT_LIST_LIMIT)
        .clamp(1, MAX_LIST_LIMIT)
}

/// `"{header}\n\n{pretty json}"`, the shape of every tool response.
pub fn render<S: Serialize + ?Sized>(header: &str, value: &S) -> CrmResult<String> {
    Ok(format!("{header}\n\n{}", serde_json::to_string_pretty(value)?))
}

pub fn list_variables(filter: Option<Value>, limit: Option<u32>) -> Value {
    json!({
        "filter": filter.unwrap_or(Value::Null),
        "limit": apply_limit(limit),
    })
}

pub async fn create_record<E: Entity, T: HttpTransport>(
    client: &GraphQlClient<T>,
    params: E::CreateParams,
) -> CrmResult<E::Record> {
    let input = E::create_input(params)?;
    client
        .request_field(
            E::CREATE_MUTATION,
            json!({ "input": input }),
            &format!("create{}", E::TYPE_NAME),
        )
        .await
}

pub fn render_created<E: Entity>(record: &E::Record) -> CrmResult<String> {
    render(&E::created_message(record), record)
}

pub async fn create<E: Entity, T: HttpTransport>(
    client: &GraphQlClient<T>,
    params: E::CreateParams,
) -> CrmResult<String> {
    let record = create_record::<E, T>(client, params).await?;
    render_created::<E>(&record)
}

pub async fn get_record<E: Entity, T: HttpTransport>(
    client: &GraphQlClient<T>,
    id: &str,
) -> CrmResult<E::Record> {
    client
        .request_field(E::GET_QUERY, json!({ "id": id }), E::NAME)
        .await
}

pub async fn get<E: Entity, T: HttpTransport>(
    client: &GraphQlClient<T>,
    id: &str,
) -> CrmResult<String> {
    let record = get_record::<E, T>(client, id).await?;
    render(&format!("{} details:", E::TYPE_NAME), &record)
}

pub async fn list_records<E: Entity, T: HttpTransport>(
    client: &GraphQlClient<T>,
    params: &E::ListParams,
) -> CrmResult<Connection<E::Record>> {
    let variables = list_variables(E::list_filter(params), params.limit());
    client
        .request_field(E::LIST_QUERY, variables, &plural_name::<E>())
        .await
}

pub async fn list<E: Entity, T: HttpTransport>(
    client: &GraphQlClient<T>,
    params: &E::ListParams,
) -> CrmResult<String> {
    let connection = list_records::<E, T>(client, params).await?;
    let has_more = connection.has_more();
    let records = connection.into_nodes();
    render(&E::list_summary(records.len(), has_more), &records)
}

pub async fn update_record<E: Entity, T: HttpTransport>(
    client: &GraphQlClient<T>,
    params: E::UpdateParams,
) -> CrmResult<E::Record> {
    let (id, patch) = E::update_input(params);
    client
        .request_field(
            E::UPDATE_MUTATION,
            json!({ "id": id, "input": patch }),
            &format!("update{}", E::TYPE_NAME),
        )
        .await
}

pub async fn update<E: Entity, T: HttpTransport>(
    client: &GraphQlClient<T>,
    params: E::UpdateParams,
) -> CrmResult<String> {
    let record = update_record::<E, T>(client, params).await?;
    render(&format!("✅ Updated {}", E::NAME), &record)
}

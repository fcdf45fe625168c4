use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use tracing::{debug, instrument};

use crate::config::Config;
use crate::error::{CrmError, CrmResult};

use super::transport::HttpTransport;

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Value>,
}

/// GraphQL client for the CRM API.
///
/// One call is one HTTP POST: no retries, no batching, no timeout beyond
/// what the transport imposes.
pub struct GraphQlClient<T: HttpTransport> {
    transport: T,
    endpoint: String,
    api_key: String,
}

impl<T: HttpTransport> GraphQlClient<T> {
    pub fn new(config: &Config, transport: T) -> Self {
        Self {
            transport,
            endpoint: config.graphql_endpoint(),
            api_key: config.api_key().to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Execute a query or mutation and return its `data` member.
    ///
    /// Fails with [`CrmError::Transport`] on a non-2xx status and with
    /// [`CrmError::Api`] whenever the body carries an `errors` member, even
    /// alongside a 200.
    #[instrument(skip_all, fields(operation = operation_name(document)))]
    pub async fn request(&self, document: &str, variables: Value) -> CrmResult<Value> {
        let payload = json!({
            "query": document,
            "variables": variables,
        });

        debug!(endpoint = %self.endpoint, "Sending GraphQL request");

        let reply = self
            .transport
            .post_json(self.endpoint.clone(), self.api_key.clone(), payload)
            .await?;

        if !reply.is_success() {
            return Err(CrmError::Transport {
                status: reply.status,
                body: reply.body,
            });
        }

        let response: GraphQlResponse = serde_json::from_str(&reply.body)?;

        if let Some(errors) = response.errors {
            return Err(CrmError::Api {
                errors: serde_json::to_string_pretty(&errors)?,
            });
        }

        Ok(response.data.unwrap_or(Value::Null))
    }

    /// Execute a request and deserialize one root field of `data`.
    pub async fn request_field<R: DeserializeOwned>(
        &self,
        document: &str,
        variables: Value,
        field: &str,
    ) -> CrmResult<R> {
        let data = self.request(document, variables).await?;
        take_field(data, field)
    }
}

/// Remove `field` from a `data` object and deserialize it.
pub(crate) fn take_field<R: DeserializeOwned>(data: Value, field: &str) -> CrmResult<R> {
    let mut object: Map<String, Value> = match data {
        Value::Object(object) => object,
        other => {
            return Err(CrmError::InvalidResponse {
                message: format!("expected an object with '{field}', got {other}"),
            });
        }
    };

    let value = object
        .remove(field)
        .ok_or_else(|| CrmError::InvalidResponse {
            message: format!("missing '{field}' in response data"),
        })?;

    serde_json::from_value(value).map_err(|e| CrmError::InvalidResponse {
        message: format!("'{field}': {e}"),
    })
}

/// Operation name of a GraphQL document, used for log context only.
fn operation_name(document: &str) -> &str {
    document
        .split_whitespace()
        .skip_while(|word| *word != "query" && *word != "mutation")
        .nth(1)
        .and_then(|name| name.split(['(', '{']).next())
        .unwrap_or("anonymous")
}

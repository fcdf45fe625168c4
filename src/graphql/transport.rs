//! HTTP transport for GraphQL requests.
//!
//! The trait keeps the client testable without a network: tests mock it,
//! the binary uses [`ReqwestTransport`].

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::error::CrmResult;

#[cfg(test)]
use mockall::automock;

/// Raw HTTP outcome, before any GraphQL interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A single POST of a JSON payload with bearer authorization.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn post_json(&self, endpoint: String, api_key: String, payload: Value)
    -> CrmResult<HttpReply>;
}

/// Production transport backed by a shared reqwest client.
#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_json(
        &self,
        endpoint: String,
        api_key: String,
        payload: Value,
    ) -> CrmResult<HttpReply> {
        let response = self
            .client
            .post(&endpoint)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(HttpReply { status, body })
    }
}

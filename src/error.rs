use miette::Diagnostic;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised while serving a CRM tool call.
///
/// Every variant propagates unchanged up to the MCP boundary, which turns it
/// into an error-flagged tool result.
#[derive(Error, Diagnostic, Debug)]
pub enum CrmError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("GraphQL request failed ({status}): {body}")]
    #[diagnostic(
        code(twenty_mcp::graphql::transport),
        help("Check TWENTY_BASE_URL and that the API key is still valid.")
    )]
    Transport { status: u16, body: String },

    #[error("GraphQL errors: {errors}")]
    #[diagnostic(code(twenty_mcp::graphql::api))]
    Api { errors: String },

    #[error("{message}")]
    #[diagnostic(code(twenty_mcp::validation))]
    Validation { message: String },

    #[error("Failed to reach the CRM API: {0}")]
    #[diagnostic(
        code(twenty_mcp::graphql::connection_failed),
        help("Is the CRM reachable from this machine? Set TWENTY_BASE_URL for self-hosted instances.")
    )]
    Http(#[from] reqwest::Error),

    #[error("Invalid response from CRM API: {message}")]
    #[diagnostic(code(twenty_mcp::graphql::invalid_response))]
    InvalidResponse { message: String },
}

impl CrmError {
    pub fn validation(message: impl Into<String>) -> Self {
        CrmError::Validation {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for CrmError {
    fn from(e: serde_json::Error) -> Self {
        CrmError::InvalidResponse {
            message: e.to_string(),
        }
    }
}

pub type CrmResult<T> = Result<T, CrmError>;

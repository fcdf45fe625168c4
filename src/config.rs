//! Runtime configuration.
//!
//! Built once at process start and handed to the GraphQL client and the MCP
//! server. Nothing reads the environment after startup.

use std::env;
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;
use tracing::warn;

pub const API_KEY_VAR: &str = "TWENTY_API_KEY";
pub const BASE_URL_VAR: &str = "TWENTY_BASE_URL";
pub const ATTACHMENT_ROOT_VAR: &str = "TWENTY_ATTACHMENT_ROOT";
pub const DEFAULT_BASE_URL: &str = "https://api.twenty.com";

/// Files loaded into the environment before it is read, first match wins per variable.
const ENV_FILES: [&str; 2] = [".env.local", ".env"];

#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("TWENTY_API_KEY environment variable is required")]
    #[diagnostic(
        code(twenty_mcp::config::missing_api_key),
        help("Create an API key in the CRM settings and export it as TWENTY_API_KEY (or put it in .env).")
    )]
    MissingApiKey,
}

/// Connection settings for the CRM plus the optional attachment preview root.
#[derive(Debug, Clone)]
pub struct Config {
    api_key: String,
    base_url: String,
    attachment_root: Option<PathBuf>,
}

impl Config {
    /// Create a configuration, rejecting an empty API key.
    pub fn new(api_key: impl Into<String>, base_url: Option<String>) -> Result<Self, ConfigError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        let base_url = base_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            api_key,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            attachment_root: None,
        })
    }

    /// Read the configuration from the environment.
    ///
    /// Priority for each setting:
    /// 1. Explicit override argument
    /// 2. Environment variable
    /// 3. Default (base URL only)
    pub fn from_env(
        base_url: Option<String>,
        attachment_root: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let api_key = env::var(API_KEY_VAR).unwrap_or_default();
        let base_url = base_url.or_else(|| env::var(BASE_URL_VAR).ok());
        let attachment_root = attachment_root.or_else(|| {
            env::var(ATTACHMENT_ROOT_VAR)
                .ok()
                .filter(|root| !root.trim().is_empty())
                .map(PathBuf::from)
        });

        Ok(Self::new(api_key, base_url)?.with_attachment_root(attachment_root))
    }

    /// Set the local directory used to resolve attachment previews.
    ///
    /// A path that is not an existing directory disables previews.
    pub fn with_attachment_root(mut self, root: Option<PathBuf>) -> Self {
        self.attachment_root = root.and_then(|root| {
            if root.is_dir() {
                Some(root)
            } else {
                warn!(
                    root = %root.display(),
                    "Attachment root is not a directory, previews disabled"
                );
                None
            }
        });
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GraphQL endpoint derived from the base URL.
    pub fn graphql_endpoint(&self) -> String {
        format!("{}/graphql", self.base_url)
    }

    pub fn attachment_root(&self) -> Option<&Path> {
        self.attachment_root.as_deref()
    }
}

/// Load `.env.local` and `.env` from the working directory.
///
/// Variables already present in the process environment are never overridden.
pub fn load_env_files() {
    for file in ENV_FILES {
        let _ = dotenvy::from_filename(file);
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

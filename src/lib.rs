//! MCP server exposing Twenty CRM records as agent tools.
//!
//! - `config`: API key, base URL and attachment root from env/CLI
//! - `graphql`: transport seam and GraphQL client
//! - `transform`: flat tool parameters to CRM composite values
//! - `crud`: generic create/get/list/update over one [`crud::Entity`]
//! - `domains`: the CRM objects
//! - `preview`: local file previews for attachments
//! - `mcp`: the rmcp server and its tools

pub mod config;
pub mod crud;
pub mod domains;
pub mod error;
pub mod graphql;
pub mod mcp;
pub mod preview;
pub mod serde_utils;
pub mod transform;

pub use config::Config;
pub use error::{CrmError, CrmResult};

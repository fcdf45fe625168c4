//! MCP server coordinator.
//!
//! Tool handlers live in [`super::tools`], one `#[tool_router]` impl block of
//! [`CrmServer`] per CRM object. This module wires their routers together and
//! implements [`ServerHandler`].

use std::sync::Arc;

use rmcp::{
    ServerHandler,
    handler::server::router::tool::ToolRouter,
    model::{Implementation, ServerCapabilities, ServerInfo},
    tool_handler,
};

use crate::config::Config;
use crate::graphql::{GraphQlClient, HttpTransport};
use crate::preview::PreviewResolver;

pub const SERVER_NAME: &str = "twenty-crm";

const INSTRUCTIONS: &str = "Twenty CRM tools. Create, read, list and update people, companies, \
opportunities, tasks, notes and timeline activities; manage favorites and attachments; link \
tasks and notes to records with task/note targets. List tools return at most 60 records per call.";

/// Generic over `T: HttpTransport` so tests can drive every tool against a
/// mocked GraphQL endpoint.
pub struct CrmServer<T: HttpTransport> {
    pub(crate) client: Arc<GraphQlClient<T>>,
    pub(crate) preview: Option<Arc<PreviewResolver>>,
    tool_router: ToolRouter<Self>,
}

impl<T: HttpTransport + 'static> CrmServer<T> {
    pub fn new(config: &Config, transport: T) -> Self {
        let preview = config
            .attachment_root()
            .and_then(PreviewResolver::new)
            .map(Arc::new);

        Self {
            client: Arc::new(GraphQlClient::new(config, transport)),
            preview,
            tool_router: Self::people_router()
                + Self::companies_router()
                + Self::opportunities_router()
                + Self::tasks_router()
                + Self::notes_router()
                + Self::activities_router()
                + Self::favorites_router()
                + Self::attachments_router()
                + Self::targets_router(),
        }
    }

    /// Names of every registered tool, sorted.
    pub fn tool_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        names.sort();
        names
    }

    pub(crate) fn preview_resolver(&self) -> Option<&PreviewResolver> {
        self.preview.as_deref()
    }
}

impl<T: HttpTransport> Clone for CrmServer<T> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            preview: self.preview.clone(),
            tool_router: self.tool_router.clone(),
        }
    }
}

#[tool_handler(router = self.tool_router)]
impl<T: HttpTransport + 'static> ServerHandler for CrmServer<T> {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_server_info(Implementation::new(
                SERVER_NAME,
                env!("CARGO_PKG_VERSION"),
            ))
            .with_instructions(INSTRUCTIONS)
    }
}

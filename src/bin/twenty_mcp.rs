//! Twenty CRM MCP server binary.
//!
//! Speaks MCP over stdio. Logs go to stderr so stdout stays a clean protocol
//! channel.

use std::path::PathBuf;

use clap::Parser;
use miette::Diagnostic;
use rmcp::ServiceExt;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use twenty_mcp::config::{self, Config, ConfigError};
use twenty_mcp::graphql::ReqwestTransport;
use twenty_mcp::mcp::{CrmServer, SERVER_NAME};

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("MCP server failed to start: {0}")]
    #[diagnostic(code(twenty_mcp::binary::serve))]
    Serve(String),

    #[error("MCP server stopped unexpectedly: {0}")]
    #[diagnostic(code(twenty_mcp::binary::join))]
    Join(#[from] tokio::task::JoinError),
}

#[derive(Parser)]
#[command(name = "twenty-mcp")]
#[command(author, version, about = "MCP server for Twenty CRM", long_about = None)]
struct Cli {
    /// CRM base URL (overrides TWENTY_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Local directory mirroring attachment files (overrides TWENTY_ATTACHMENT_ROOT)
    #[arg(long)]
    attachment_root: Option<PathBuf>,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "twenty_mcp=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    run().await.map_err(Into::into)
}

async fn run() -> Result<(), BinaryError> {
    let cli = Cli::parse();

    config::load_env_files();
    init_tracing();

    // reqwest is built without a default crypto provider.
    let _ = rustls::crypto::ring::default_provider().install_default();

    let config = Config::from_env(cli.base_url, cli.attachment_root)?;
    info!(
        server = SERVER_NAME,
        endpoint = %config.graphql_endpoint(),
        previews = config.attachment_root().is_some(),
        "Starting MCP server on stdio"
    );

    let service = CrmServer::new(&config, ReqwestTransport::new())
        .serve(rmcp::transport::io::stdio())
        .await
        .map_err(|e| BinaryError::Serve(e.to_string()))?;

    let reason = service.waiting().await?;
    info!(?reason, "MCP server stopped");
    Ok(())
}

use directory_mcp::{Config, DirectoryServer, DirectoryState};
use rmcp::{ServiceExt, transport::stdio};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout carries the MCP protocol; logs go to stderr
    directory_mcp::tracing::init();

    let config = Config::from_env();
    tracing::info!(
        "Starting directory-mcp (catalog: {:?}, default limit: {})",
        config.catalog,
        config.default_limit
    );

    let state = DirectoryState::from_config(&config).await?;

    // Create and serve the MCP server over stdio
    let server = DirectoryServer::new(state);
    let service = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("Error serving MCP server: {:?}", e);
    })?;

    // Wait for the service to complete
    service.waiting().await?;

    Ok(())
}

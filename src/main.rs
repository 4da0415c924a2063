//! Fitlog
//!
//! An MCP server for parsing natural language food, water and workout logs.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use fitlog::build_info;
use fitlog::config::Config;
use fitlog::mcp::FitlogService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("fitlog=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    // Print startup banner to stderr
    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let config = Config::from_env()?;
    if config.ai_enabled() {
        eprintln!("AI extraction: enabled ({})", config.ai_model);
    } else {
        eprintln!("AI extraction: disabled, using local parser");
    }
    eprintln!("Food catalog: {} items", fitlog::catalog::catalog().len());

    // Create the fitlog service
    let service = FitlogService::new(config);

    // Create stdio transport
    let transport = (stdin(), stdout());

    // Start the MCP server
    let server = service.serve(transport).await?;

    // Wait for the server to complete
    server.waiting().await?;

    Ok(())
}

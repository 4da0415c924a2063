//! Fitlog MCP Server Implementation
//!
//! Implements the MCP server with all fitlog tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::tools::catalog;
use crate::tools::parse;
use crate::tools::status::StatusTracker;

/// Fitlog MCP Service
#[derive(Clone)]
pub struct FitlogService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    config: Config,
    tool_router: ToolRouter<FitlogService>,
}

impl FitlogService {
    pub fn new(config: Config) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(&config))),
            config,
            tool_router: Self::tool_router(),
        }
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ParseLogEntryParams {
    /// What the user said, e.g. "ate a big mac and ran 2 miles"
    pub text: String,
    /// Reference date for "today" (YYYY-MM-DD). Defaults to the local date.
    pub date: Option<String>,
    /// Try the AI extractor first when configured
    #[serde(default = "default_true")]
    pub use_ai: bool,
}

fn default_true() -> bool { true }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LookupFoodParams {
    /// Food phrase, e.g. "small fries" or "grilled chicken"
    pub query: String,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl FitlogService {
    // --- Status ---

    #[tool(description = "Get the current status of the fitlog service including build info, parser counters, and process information")]
    async fn fitlog_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status();
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get instructions for parsing log entries. Call this when starting a logging session or when unsure what the parser recognizes.")]
    fn parse_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::PARSE_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(PARSE_INSTRUCTIONS)]))
    }

    // --- Parsing ---

    #[tool(description = "Parse a free-text log entry into foods (with macros), water (oz) and workouts. Resolves relative dates like 'yesterday' or 'monday'. Nothing is stored.")]
    async fn parse_log_entry(&self, Parameters(p): Parameters<ParseLogEntryParams>) -> Result<CallToolResult, McpError> {
        let config = self.config.clone();
        // The AI client blocks on HTTP, keep it off the async executor
        let result = tokio::task::spawn_blocking(move || {
            parse::parse_log_entry(&config, &p.text, p.date.as_deref(), p.use_ai)
        })
        .await
        .map_err(|e| McpError::internal_error(format!("Parse task failed: {}", e), None))?
        .map_err(|e| McpError::internal_error(e, None))?;

        self.status_tracker
            .lock()
            .await
            .record_parse(result.source, result.understood);

        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- Catalog ---

    #[tool(description = "Look up how a food phrase resolves against the catalog, with macros per serving")]
    fn lookup_food(&self, Parameters(p): Parameters<LookupFoodParams>) -> Result<CallToolResult, McpError> {
        let result = catalog::lookup_food(&p.query)
            .map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "List every food in the catalog, sorted by name, with serving sizes, macros and lookup keys")]
    fn list_foods(&self) -> Result<CallToolResult, McpError> {
        let result = catalog::list_foods();
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for FitlogService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "fitlog".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Fitlog".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Fitlog - natural language food, water and workout log parser. \
                 Call parse_instructions first for what the parser recognizes. \
                 Parsing: parse_log_entry (text, optional date, optional use_ai). \
                 Catalog: lookup_food, list_foods. \
                 Status: fitlog_status. \
                 Nothing is persisted; results are returned to the caller."
                    .into(),
            ),
        }
    }
}

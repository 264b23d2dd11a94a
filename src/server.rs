//! MCP server implementation.

use crate::schema::inline_schema_for_type;
use crate::state::DirectoryState;
use crate::tools::analyze_query::{AnalyzeQueryRequest, handle_analyze_query};
use crate::tools::inspect_business::{InspectBusinessRequest, handle_inspect_business};
use crate::tools::search::{
    ScoreWithIntentRequest, SearchRequest, handle_score_with_intent, handle_search,
};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router,
};
use std::sync::Arc;

/// MCP server answering natural-language directory queries
#[derive(Clone)]
pub struct DirectoryServer {
    /// Shared catalog and defaults
    state: Arc<DirectoryState>,

    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for DirectoryServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectoryServer")
            .field("state", &self.state)
            .finish()
    }
}

#[tool_router]
impl DirectoryServer {
    /// Create a new DirectoryServer over the given state.
    pub fn new(state: DirectoryState) -> Self {
        Self {
            state: Arc::new(state),
            tool_router: Self::tool_router(),
        }
    }

    /// Get a reference to the shared state.
    pub fn state(&self) -> &Arc<DirectoryState> {
        &self.state
    }

    #[tool(
        description = "Explain how a free-text query is understood: detected cuisine/nationality, category, atmosphere, occasion, time, price tier and dietary needs, with a confidence score and related searches.",
        input_schema = inline_schema_for_type::<AnalyzeQueryRequest>()
    )]
    async fn analyze_query(
        &self,
        Parameters(request): Parameters<AnalyzeQueryRequest>,
    ) -> std::result::Result<String, String> {
        handle_analyze_query(&self.state, request).await
    }

    #[tool(
        description = "Search the local business directory in natural language, e.g. 'cozy Turkish place for Sunday brunch'. Returns businesses ranked by relevance with the reasons each one matched.",
        input_schema = inline_schema_for_type::<SearchRequest>()
    )]
    async fn search_directory(
        &self,
        Parameters(request): Parameters<SearchRequest>,
    ) -> std::result::Result<String, String> {
        handle_search(&self.state, request).await
    }

    #[tool(
        description = "Rank the directory against an explicit structured intent (nationality, category, atmosphere, occasion, timeContext, priceRange, dietary) plus optional free text.",
        input_schema = inline_schema_for_type::<ScoreWithIntentRequest>()
    )]
    async fn score_with_intent(
        &self,
        Parameters(request): Parameters<ScoreWithIntentRequest>,
    ) -> std::result::Result<String, String> {
        handle_score_with_intent(&self.state, request).await
    }

    #[tool(
        description = "Show full details for one business by id or name. Suggests close names when there is no exact match.",
        input_schema = inline_schema_for_type::<InspectBusinessRequest>()
    )]
    async fn inspect_business(
        &self,
        Parameters(request): Parameters<InspectBusinessRequest>,
    ) -> std::result::Result<String, String> {
        handle_inspect_business(&self.state, request).await
    }
}

#[tool_handler]
impl ServerHandler for DirectoryServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_protocol_version(ProtocolVersion::V_2024_11_05)
            .with_server_info(Implementation::from_build_env())
            .with_instructions(format!(
                "directory-mcp: natural-language search over a local business directory \
                 ({} listings). Use search_directory for queries like 'authentic Caribbean \
                 grocery store', analyze_query to see how a query is understood, and \
                 inspect_business for details.",
                self.state.catalog().len()
            ))
    }
}

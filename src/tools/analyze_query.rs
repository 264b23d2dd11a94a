//! Intent analysis handler: shows how a query is understood without searching.

use crate::format::format_analysis;
use crate::search::extract_intent;
use crate::state::DirectoryState;
use rmcp::schemars;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AnalyzeQueryRequest {
    /// Free-text query, e.g. "cozy Turkish place for Sunday brunch"
    pub query: String,
    /// Return the analysis as JSON instead of text
    #[serde(default)]
    pub json: bool,
}

/// Extract the search intent of a query and render it.
pub async fn handle_analyze_query(
    _state: &Arc<DirectoryState>,
    request: AnalyzeQueryRequest,
) -> Result<String, String> {
    let analysis = extract_intent(&request.query);

    if request.json {
        return serde_json::to_string_pretty(&analysis)
            .map_err(|e| format!("Failed to serialize analysis: {}", e));
    }

    Ok(format_analysis(&request.query, &analysis))
}

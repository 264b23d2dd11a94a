//! Directory search handlers.

use crate::format::format_results;
use crate::search::{SearchIntent, extract_intent, score_catalog};
use crate::state::DirectoryState;
use rmcp::schemars;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchRequest {
    /// Natural-language query. Empty lists the whole directory.
    #[serde(default)]
    pub query: String,
    /// Maximum number of results to return (default: configured limit)
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ScoreWithIntentRequest {
    /// Free text matched against names, descriptions and addresses
    #[serde(default)]
    pub query: String,
    /// Structured intent to rank by
    #[serde(default)]
    pub intent: SearchIntent,
    /// Maximum number of results to return (default: configured limit)
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Understand the query, then rank the catalog against it.
pub async fn handle_search(
    state: &Arc<DirectoryState>,
    request: SearchRequest,
) -> Result<String, String> {
    let analysis = extract_intent(&request.query);
    let results = score_catalog(state.catalog().businesses(), &request.query, &analysis.intent);

    tracing::info!(
        "Search '{}' ranked {} businesses (confidence {:.2})",
        request.query,
        results.len(),
        analysis.confidence
    );

    let mut output = format_results(&request.query, &results, state.limit(request.limit));
    if !analysis.reasoning.is_empty() {
        output.push_str(&format!("Understood: {}\n", analysis.reasoning));
    }
    Ok(output)
}

/// Rank the catalog against an intent supplied by the caller.
pub async fn handle_score_with_intent(
    state: &Arc<DirectoryState>,
    request: ScoreWithIntentRequest,
) -> Result<String, String> {
    let results = score_catalog(state.catalog().businesses(), &request.query, &request.intent);
    Ok(format_results(
        &request.query,
        &results,
        state.limit(request.limit),
    ))
}

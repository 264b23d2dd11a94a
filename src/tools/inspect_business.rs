use crate::catalog::Lookup;
use crate::format::{format_business, format_lookup_miss};
use crate::state::DirectoryState;
use rmcp::schemars;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct InspectBusinessRequest {
    /// Business id (e.g. "3") or exact name (case-insensitive)
    pub business: String,
}

/// Show a single business, or close name matches if it cannot be found.
pub async fn handle_inspect_business(
    state: &Arc<DirectoryState>,
    request: InspectBusinessRequest,
) -> Result<String, String> {
    match state.catalog().find(&request.business) {
        Lookup::Found(business) => Ok(format_business(business)),
        Lookup::NotFound(suggestions) => Ok(format_lookup_miss(&request.business, &suggestions)),
    }
}

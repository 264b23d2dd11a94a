use serde::{Deserialize, Serialize};

/// A directory listing. Read-only to the search engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    pub id: u32,
    pub name: String,
    pub nationality: String,
    /// Free-form category label, compared verbatim against [`crate::search::Category`]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<String>,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,
    pub rating: f64,
    pub description: String,
    /// Price tier, 1 (cheapest) to 4
    pub price_range: u8,
}

impl Business {
    /// Price tier rendered as currency symbols ("££").
    pub fn price_symbols(&self) -> String {
        "£".repeat(usize::from(self.price_range))
    }
}

/// A scored catalog entry. Recomputed for every query; never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult<'a> {
    pub business: &'a Business,
    /// Relevance in `[0, 1]`
    pub relevance_score: f64,
    /// Reasons in rule-evaluation order
    pub match_reasons: Vec<String>,
}

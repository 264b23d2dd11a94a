//! Relevance scoring of catalog entries against a search intent.
//!
//! Scoring is an ordered list of additive rules producing a running total, clamped
//! to `[0, 1]`. Each rule that fires may attach a human-readable match reason.

use super::intent::SearchIntent;
use super::vocabulary::{Atmosphere, PriceRange, contains_any};
use crate::types::{Business, MatchResult};

/// Score assigned to every entry when there is nothing to rank by.
pub const NEUTRAL_SCORE: f64 = 0.5;

const NATIONALITY_WEIGHT: f64 = 0.4;
const CATEGORY_WEIGHT: f64 = 0.3;
const ATMOSPHERE_WEIGHT: f64 = 0.2;
const PRICE_WEIGHT: f64 = 0.1;
const TERM_WEIGHT: f64 = 0.05;
const QUALITY_WEIGHT: f64 = 0.1;

/// Running score must exceed this before the rating boost applies.
const QUALITY_THRESHOLD: f64 = 0.3;
const QUALITY_MIN_RATING: f64 = 4.5;

/// Query tokens must be longer than this (in characters) to count as free-text terms.
/// Terms must be longer than this, counted in UTF-16 code units.
const MIN_TERM_UNITS: usize = 2;

const COZY_INDICATORS: &[&str] = &["family", "intimate", "small", "traditional", "home", "warm"];
const AUTHENTIC_INDICATORS: &[&str] = &["authentic", "traditional", "genuine", "family recipe"];

/// Lowercased searchable text of a business, computed once per scoring pass.
struct Haystack {
    name: String,
    description: String,
    address: String,
}

impl Haystack {
    fn new(business: &Business) -> Self {
        Self {
            name: business.name.to_lowercase(),
            description: business.description.to_lowercase(),
            address: business.address.to_lowercase(),
        }
    }

    fn contains(&self, term: &str) -> bool {
        self.name.contains(term) || self.description.contains(term) || self.address.contains(term)
    }
}

/// Running total and reasons for one business.
#[derive(Default)]
struct Tally {
    score: f64,
    reasons: Vec<String>,
}

impl Tally {
    fn add(&mut self, weight: f64, reason: impl Into<String>) {
        self.score += weight;
        self.reasons.push(reason.into());
    }
}

/// Check if an atmosphere tag is satisfied by a business.
///
/// Only cozy, authentic and upscale are observable from catalog data; the other tags
/// never contribute.
fn atmosphere_reason(
    atmosphere: Atmosphere,
    business: &Business,
    haystack: &Haystack,
) -> Option<&'static str> {
    match atmosphere {
        Atmosphere::Cozy => {
            let indicated = COZY_INDICATORS.iter().any(|indicator| {
                haystack.description.contains(indicator) || haystack.name.contains(indicator)
            });
            (indicated || business.price_range <= 2).then_some("Cozy, intimate atmosphere")
        }
        Atmosphere::Authentic => contains_any(&haystack.description, AUTHENTIC_INDICATORS)
            .then_some("Authentic cultural experience"),
        Atmosphere::Upscale => (business.price_range >= 3).then_some("Upscale dining experience"),
        Atmosphere::Vibrant | Atmosphere::Casual => None,
    }
}

/// Split a query into free-text terms: lowercase, single-space separated, longer than
/// two UTF-16 code units (so "🦀🦀" counts as four). Repeated terms are kept and count
/// once each.
pub fn query_terms(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split(' ')
        .filter(|term| term.encode_utf16().count() > MIN_TERM_UNITS)
        .map(str::to_string)
        .collect()
}

/// Score a single business. Pure; independent of every other catalog entry.
pub fn score_business<'a>(
    business: &'a Business,
    terms: &[String],
    intent: &SearchIntent,
) -> MatchResult<'a> {
    let haystack = Haystack::new(business);
    let mut tally = Tally::default();

    if let Some(nationality) = &intent.nationality
        && business.nationality.to_lowercase() == nationality.to_lowercase()
    {
        tally.add(
            NATIONALITY_WEIGHT,
            format!("Matches {} cuisine", nationality),
        );
    }

    if let Some(category) = intent.category
        && business.category == category.as_str()
    {
        tally.add(CATEGORY_WEIGHT, format!("{} as requested", category));
    }

    for atmosphere in &intent.atmosphere {
        if let Some(reason) = atmosphere_reason(*atmosphere, business, &haystack) {
            tally.add(ATMOSPHERE_WEIGHT, reason);
        }
    }

    match intent.price_range {
        Some(range @ PriceRange::Budget) if range.admits(business.price_range) => {
            tally.add(PRICE_WEIGHT, "Budget-friendly pricing");
        }
        Some(range @ PriceRange::Upscale) if range.admits(business.price_range) => {
            tally.add(PRICE_WEIGHT, "Premium pricing tier");
        }
        _ => {}
    }

    for term in terms {
        if haystack.contains(term) {
            tally.score += TERM_WEIGHT;
        }
    }

    if tally.score > QUALITY_THRESHOLD && business.rating >= QUALITY_MIN_RATING {
        tally.add(QUALITY_WEIGHT, "Highly rated by community");
    }

    MatchResult {
        business,
        relevance_score: tally.score.min(1.0),
        match_reasons: tally.reasons,
    }
}

/// Score every catalog entry against a query and its intent, best first.
///
/// With an empty query and an empty intent there is nothing to rank by: every entry is
/// returned in catalog order with [`NEUTRAL_SCORE`] and no reasons. Otherwise results
/// are stably sorted by descending score, so ties keep catalog order.
pub fn score_catalog<'a>(
    catalog: &'a [Business],
    query: &str,
    intent: &SearchIntent,
) -> Vec<MatchResult<'a>> {
    if query.is_empty() && intent.is_empty() {
        return catalog
            .iter()
            .map(|business| MatchResult {
                business,
                relevance_score: NEUTRAL_SCORE,
                match_reasons: Vec::new(),
            })
            .collect();
    }

    let terms = query_terms(query);
    let mut results: Vec<_> = catalog
        .iter()
        .map(|business| score_business(business, &terms, intent))
        .collect();

    results.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));

    tracing::debug!(
        query = %query,
        scored = results.len(),
        top = results.first().map(|r| r.relevance_score),
        "Scored catalog"
    );

    results
}

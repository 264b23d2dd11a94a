//! Natural-language search over the business directory.
//!
//! This module provides intent extraction from free-text queries and relevance
//! scoring of catalog entries against the extracted intent. Both are pure,
//! synchronous functions.

// Module declarations
pub(crate) mod intent;
pub(crate) mod scoring;
pub(crate) mod vocabulary;

// Public re-exports (used via lib.rs)
pub use intent::{
    BASE_CONFIDENCE, IntentAnalysis, MAX_SUGGESTIONS, REASONING_SEPARATOR, SearchIntent,
    extract_intent, generate_suggestions,
};
pub use scoring::{NEUTRAL_SCORE, query_terms, score_business, score_catalog};
pub use vocabulary::{
    Atmosphere, Category, Dietary, NATIONALITIES, Occasion, PriceRange, TimeContext, TimeSlot,
    canonical_nationality, contains_any,
};

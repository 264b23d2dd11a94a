//! directory-mcp: natural-language search over a local business directory.
//!
//! The engine lives in [`search`]: [`extract_intent`] turns a free-text query into a
//! structured [`SearchIntent`], and [`score_catalog`] ranks catalog entries against
//! it with explainable match reasons. The remaining modules load the catalog and
//! expose the engine as MCP tools.

pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod schema;
pub mod search;
pub mod server;
pub mod state;
pub mod tools;
pub mod tracing;
pub mod types;

pub use catalog::{Catalog, Lookup};
pub use config::{CatalogSource, Config};
pub use error::CatalogError;
pub use search::{
    Atmosphere, Category, Dietary, IntentAnalysis, Occasion, PriceRange, SearchIntent,
    TimeContext, extract_intent, score_business, score_catalog,
};
pub use server::DirectoryServer;
pub use state::DirectoryState;
pub use types::{Business, MatchResult};

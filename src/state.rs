//! Shared state for tool handlers.

use crate::catalog::Catalog;
use crate::config::{Config, DEFAULT_LIMIT};

/// Catalog and defaults shared by every tool call.
///
/// Immutable after startup: each query recomputes intent and scores from scratch,
/// so there is nothing to cache or invalidate.
#[derive(Debug, Clone)]
pub struct DirectoryState {
    catalog: Catalog,
    default_limit: usize,
}

impl DirectoryState {
    pub const fn new(catalog: Catalog, default_limit: usize) -> Self {
        Self {
            catalog,
            default_limit,
        }
    }

    /// Build state from configuration, loading the configured catalog.
    pub async fn from_config(config: &Config) -> crate::error::Result<Self> {
        let catalog = config.load_catalog().await?;
        Ok(Self::new(catalog, config.default_limit))
    }

    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub const fn default_limit(&self) -> usize {
        self.default_limit
    }

    /// Resolve a requested limit, falling back to the configured default.
    pub fn limit(&self, requested: Option<usize>) -> usize {
        requested.filter(|&limit| limit > 0).unwrap_or(self.default_limit)
    }
}

impl Default for DirectoryState {
    fn default() -> Self {
        Self::new(Catalog::sample(), DEFAULT_LIMIT)
    }
}

//! Runtime configuration from the environment.

use crate::catalog::Catalog;
use crate::error::Result;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Path to a catalog file (`.toml` or `.json`).
pub const CATALOG_ENV: &str = "DIRECTORY_MCP_CATALOG";
/// Default number of results returned by search tools.
pub const LIMIT_ENV: &str = "DIRECTORY_MCP_LIMIT";

pub const DEFAULT_LIMIT: usize = 10;

/// Where the catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Sample,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub catalog: CatalogSource,
    pub default_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: CatalogSource::Sample,
            default_limit: DEFAULT_LIMIT,
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// Catalog resolution: `DIRECTORY_MCP_CATALOG`, then
    /// `<config dir>/directory-mcp/catalog.toml` if it exists, then the built-in sample.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(CATALOG_ENV).ok().as_deref(),
            std::env::var(LIMIT_ENV).ok().as_deref(),
            dirs::config_dir().as_deref(),
        )
    }

    /// Resolve configuration from explicit values.
    pub fn from_vars(catalog: Option<&str>, limit: Option<&str>, config_dir: Option<&Path>) -> Self {
        let catalog = match catalog.map(str::trim).filter(|path| !path.is_empty()) {
            Some(path) => CatalogSource::File(PathBuf::from(&*expand_tilde(path))),
            None => config_dir
                .map(|dir| dir.join("directory-mcp").join("catalog.toml"))
                .filter(|path| path.is_file())
                .map_or(CatalogSource::Sample, CatalogSource::File),
        };

        let default_limit = match limit.map(|raw| (raw, raw.trim().parse::<usize>())) {
            Some((_, Ok(limit))) if limit > 0 => limit,
            Some((raw, _)) => {
                tracing::warn!(
                    "Ignoring invalid {}='{}', using {}",
                    LIMIT_ENV,
                    raw,
                    DEFAULT_LIMIT
                );
                DEFAULT_LIMIT
            }
            None => DEFAULT_LIMIT,
        };

        Self {
            catalog,
            default_limit,
        }
    }

    /// Load the configured catalog.
    pub async fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            CatalogSource::File(path) => Catalog::load(path).await,
            CatalogSource::Sample => {
                tracing::info!("No catalog configured, using the built-in sample directory");
                Ok(Catalog::sample())
            }
        }
    }
}

/// Resolves a leading `~` in a catalog path taken from the environment, so
/// `DIRECTORY_MCP_CATALOG=~/listings/london.toml` points into the home directory.
/// Paths without a leading `~`, or with no known home directory, are borrowed as given.
pub fn expand_tilde(path: &str) -> Cow<'_, str> {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Cow::Owned(home.join(stripped).display().to_string());
        }
    } else if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return Cow::Owned(home.display().to_string());
    }
    Cow::Borrowed(path)
}

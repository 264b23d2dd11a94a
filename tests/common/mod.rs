//! Shared test fixtures and utilities for integration tests.
//!
//! # Available Fixtures
//!
//! - `sample_state`: `DirectoryState` over the built-in sample directory
//! - `lebanese_catalog`: a small catalog with a Lebanese-nationality restaurant, for
//!   exercising the nationality rule end to end
//!
//! [`TempCatalog`] writes catalog files into a temporary directory that is removed on drop.

use directory_mcp::{Business, Catalog, DirectoryState};
use rstest::fixture;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// Builds a business with neutral defaults; override fields as needed.
#[allow(dead_code)] // Used across different integration test crates
pub fn business(id: u32, name: &str, nationality: &str, category: &str) -> Business {
    Business {
        id,
        name: name.to_string(),
        nationality: nationality.to_string(),
        category: category.to_string(),
        cuisine: None,
        services: None,
        address: "London".to_string(),
        phone: None,
        hours: None,
        rating: 4.0,
        description: String::new(),
        price_range: 2,
    }
}

#[fixture]
pub fn sample_state() -> Arc<DirectoryState> {
    Arc::new(DirectoryState::default())
}

#[fixture]
pub fn lebanese_catalog() -> Vec<Business> {
    let mut cedar = business(10, "Cedar House", "Lebanese", "Restaurant");
    cedar.description =
        "Legendary Lebanese restaurant with authentic mezze, perfect for date nights and celebrations"
            .to_string();
    cedar.address = "Edgware Road, London W2".to_string();
    cedar.rating = 4.5;
    cedar.price_range = 3;

    let mut lagos = business(11, "Little Lagos", "African", "Grocery Store");
    lagos.description = "Nigerian groceries and spices".to_string();
    lagos.price_range = 1;

    let mut fade = business(12, "Fade Factory", "Turkish", "Salon & Barber");
    fade.description = "Walk-in barber".to_string();
    fade.price_range = 1;

    vec![lagos, cedar, fade]
}

/// A temporary directory holding catalog files.
#[allow(dead_code)] // Used across different integration test crates
pub struct TempCatalog {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)] // Used across different integration test crates
impl TempCatalog {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Writes `contents` to `name` and returns the full path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.root.join(name);
        std::fs::write(&path, contents).expect("Failed to write catalog file");
        path
    }

    /// Writes the sample catalog as JSON and returns the path.
    pub fn write_sample_json(&self, name: &str) -> PathBuf {
        let json = serde_json::to_string_pretty(Catalog::sample().businesses())
            .expect("Failed to serialize sample catalog");
        self.write(name, &json)
    }
}

//! Error handling types and utilities.

use std::path::PathBuf;

/// A specialized Result type for directory-mcp operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods at the I/O and configuration edges. The search engine
/// itself never fails.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when a catalog file cannot be loaded or fails validation.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The file extension does not name a supported format.
    #[error("Unsupported catalog format for {}: expected .toml or .json", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// The catalog file could not be parsed.
    #[error("Failed to parse catalog {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// A price tier outside 1..=4.
    #[error("Business {id} ('{name}') has price tier {price_range}; expected 1 to 4")]
    InvalidPriceRange { id: u32, name: String, price_range: u8 },

    /// A rating that is not a finite number in 0..=5.
    #[error("Business {id} ('{name}') has rating {rating}; expected 0 to 5")]
    InvalidRating { id: u32, name: String, rating: f64 },

    /// Two entries share an identifier.
    #[error("Duplicate business id {id}")]
    DuplicateId { id: u32 },

    /// An entry without a name.
    #[error("Business {id} has an empty name")]
    EmptyName { id: u32 },
}

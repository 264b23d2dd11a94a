//! The in-memory business catalog: loading, validation and lookup.
//!
//! Catalog files are TOML (`[[business]]` tables) or JSON (a bare array, or an
//! object with a `business` array). Files are validated on load so the search
//! engine can treat every record as well-formed.

use crate::error::{CatalogError, Result};
use crate::types::Business;
use ahash::AHashSet;
use anyhow::Context;
use rapidfuzz::distance::jaro_winkler;
use serde::Deserialize;
use std::path::Path;

/// Suggestions below this similarity are not worth showing.
const SUGGESTION_THRESHOLD: f64 = 0.7;
const MAX_SUGGESTIONS: usize = 5;

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    business: Vec<Business>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonCatalog {
    Bare(Vec<Business>),
    Wrapped(CatalogFile),
}

/// A validated, read-only list of businesses in a fixed order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    businesses: Vec<Business>,
}

/// Outcome of looking a business up by id or name.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<'a> {
    Found(&'a Business),
    /// No exact match; closest names with their similarity, best first.
    NotFound(Vec<(&'a Business, f64)>),
}

impl Catalog {
    /// Build a catalog from records, validating each one.
    pub fn new(businesses: Vec<Business>) -> std::result::Result<Self, CatalogError> {
        let mut seen = AHashSet::with_capacity(businesses.len());
        for business in &businesses {
            validate(business)?;
            if !seen.insert(business.id) {
                return Err(CatalogError::DuplicateId { id: business.id });
            }
        }
        Ok(Self { businesses })
    }

    /// Load and validate a catalog file. The format is chosen by extension.
    pub async fn load(path: &Path) -> Result<Self> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;
        let catalog = Self::parse(path, &contents)?;
        tracing::info!(
            "Loaded {} businesses from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Parse catalog text; `path` only selects the format and labels errors.
    pub fn parse(path: &Path, contents: &str) -> std::result::Result<Self, CatalogError> {
        let parse_error = |message: String| CatalogError::Parse {
            path: path.to_path_buf(),
            message,
        };

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let businesses = match extension.as_deref() {
            Some("toml") => {
                toml::from_str::<CatalogFile>(contents)
                    .map_err(|e| parse_error(e.to_string()))?
                    .business
            }
            Some("json") => match serde_json::from_str::<JsonCatalog>(contents)
                .map_err(|e| parse_error(e.to_string()))?
            {
                JsonCatalog::Bare(businesses) => businesses,
                JsonCatalog::Wrapped(file) => file.business,
            },
            _ => {
                return Err(CatalogError::UnsupportedFormat {
                    path: path.to_path_buf(),
                });
            }
        };

        Self::new(businesses)
    }

    /// The built-in demo directory of London businesses.
    pub fn sample() -> Self {
        Self {
            businesses: vec![
                Business {
                    id: 1,
                    name: "Zoe's Ghana Kitchen".to_string(),
                    nationality: "African".to_string(),
                    category: "Restaurant".to_string(),
                    cuisine: Some("Ghanaian".to_string()),
                    services: None,
                    address: "Hackney, London E8".to_string(),
                    phone: Some("+44 20 7254 1234".to_string()),
                    hours: Some("12:00 - 22:00".to_string()),
                    rating: 4.8,
                    description: "Authentic Ghanaian cuisine in the heart of Hackney with traditional family recipes".to_string(),
                    price_range: 2,
                },
                Business {
                    id: 2,
                    name: "Turkish Barber Deluxe".to_string(),
                    nationality: "Turkish".to_string(),
                    category: "Salon & Barber".to_string(),
                    cuisine: None,
                    services: Some("Hot towel shaves, beard styling, hair cuts".to_string()),
                    address: "Green Lanes, London N4".to_string(),
                    phone: Some("+44 20 8802 3456".to_string()),
                    hours: Some("08:00 - 20:00".to_string()),
                    rating: 4.8,
                    description: "Traditional Turkish barbering with authentic hot towel shaves and cozy family atmosphere".to_string(),
                    price_range: 1,
                },
                Business {
                    id: 3,
                    name: "Pierogi Palace".to_string(),
                    nationality: "Polish".to_string(),
                    category: "Restaurant".to_string(),
                    cuisine: Some("Polish".to_string()),
                    services: None,
                    address: "Ealing, London W5".to_string(),
                    phone: Some("+44 20 8567 1234".to_string()),
                    hours: Some("12:00 - 21:00".to_string()),
                    rating: 4.6,
                    description: "Traditional Polish pierogi and hearty comfort food in a cozy family-run atmosphere".to_string(),
                    price_range: 2,
                },
                Business {
                    id: 4,
                    name: "Casa Madeira".to_string(),
                    nationality: "Latino".to_string(),
                    category: "Restaurant".to_string(),
                    cuisine: Some("Brazilian".to_string()),
                    services: None,
                    address: "Stockwell, London SW9".to_string(),
                    phone: Some("+44 20 7737 1234".to_string()),
                    hours: Some("12:00 - 23:00".to_string()),
                    rating: 4.6,
                    description: "Authentic Brazilian steakhouse with traditional churrasco and upscale dining experience".to_string(),
                    price_range: 3,
                },
                Business {
                    id: 5,
                    name: "Maroush".to_string(),
                    nationality: "Middle Eastern".to_string(),
                    category: "Restaurant".to_string(),
                    cuisine: Some("Lebanese".to_string()),
                    services: None,
                    address: "Edgware Road, London W2".to_string(),
                    phone: Some("+44 20 7723 0773".to_string()),
                    hours: Some("12:00 - 02:00".to_string()),
                    rating: 4.5,
                    description: "Legendary Lebanese restaurant with authentic mezze, perfect for date nights and celebrations".to_string(),
                    price_range: 3,
                },
            ],
        }
    }

    pub fn businesses(&self) -> &[Business] {
        &self.businesses
    }

    pub fn len(&self) -> usize {
        self.businesses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.businesses.is_empty()
    }

    /// Look a business up by numeric id or case-insensitive name.
    ///
    /// On a miss, returns the closest names by Jaro-Winkler similarity.
    pub fn find(&self, needle: &str) -> Lookup<'_> {
        let needle = needle.trim();

        if let Ok(id) = needle.parse::<u32>()
            && let Some(business) = self.businesses.iter().find(|b| b.id == id)
        {
            return Lookup::Found(business);
        }

        let lowered = needle.to_lowercase();
        if let Some(business) = self
            .businesses
            .iter()
            .find(|b| b.name.to_lowercase() == lowered)
        {
            return Lookup::Found(business);
        }

        let mut suggestions: Vec<_> = self
            .businesses
            .iter()
            .map(|b| {
                let score =
                    jaro_winkler::similarity(lowered.chars(), b.name.to_lowercase().chars());
                (b, score)
            })
            .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        suggestions.sort_by(|(_, a), (_, b)| b.total_cmp(a));
        suggestions.truncate(MAX_SUGGESTIONS);

        tracing::debug!(
            "No business matches '{}', {} suggestions",
            needle,
            suggestions.len()
        );
        Lookup::NotFound(suggestions)
    }
}

fn validate(business: &Business) -> std::result::Result<(), CatalogError> {
    if business.name.trim().is_empty() {
        return Err(CatalogError::EmptyName { id: business.id });
    }
    if !(1..=4).contains(&business.price_range) {
        return Err(CatalogError::InvalidPriceRange {
            id: business.id,
            name: business.name.clone(),
            price_range: business.price_range,
        });
    }
    if !business.rating.is_finite() || !(0.0..=5.0).contains(&business.rating) {
        return Err(CatalogError::InvalidRating {
            id: business.id,
            name: business.name.clone(),
            rating: business.rating,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};
    use rstest::rstest;

    const TOML_CATALOG: &str = r#"
[[business]]
id = 7
name = "Little Lagos"
nationality = "African"
category = "Grocery Store"
address = "Peckham, London SE15"
rating = 4.2
description = "Nigerian groceries and spices"
priceRange = 1
"#;

    #[test]
    fn test_sample_is_valid() {
        let sample = Catalog::sample();
        check!(sample.len() == 5);
        check!(Catalog::new(sample.businesses().to_vec()).is_ok());
    }

    #[test]
    fn test_parse_toml() {
        let_assert!(Ok(catalog) = Catalog::parse(Path::new("dir.toml"), TOML_CATALOG));
        check!(catalog.len() == 1);
        check!(catalog.businesses()[0].name == "Little Lagos");
        check!(catalog.businesses()[0].cuisine.is_none());
    }

    #[rstest]
    #[case(r#"[{"id":1,"name":"A","nationality":"Irish","category":"Restaurant","address":"x","rating":4.0,"description":"d","priceRange":2}]"#)]
    #[case(r#"{"business":[{"id":1,"name":"A","nationality":"Irish","category":"Restaurant","address":"x","rating":4.0,"description":"d","priceRange":2}]}"#)]
    fn test_parse_json_shapes(#[case] contents: &str) {
        let_assert!(Ok(catalog) = Catalog::parse(Path::new("dir.json"), contents));
        check!(catalog.len() == 1);
    }

    #[rstest]
    #[case("DIR.TOML")]
    #[case("dir.Toml")]
    fn test_extension_is_case_insensitive(#[case] name: &str) {
        let_assert!(Ok(catalog) = Catalog::parse(Path::new(name), TOML_CATALOG));
        check!(catalog.len() == 1);
    }

    #[test]
    fn test_unsupported_extension() {
        let_assert!(
            Err(CatalogError::UnsupportedFormat { .. }) =
                Catalog::parse(Path::new("dir.yaml"), TOML_CATALOG)
        );
    }

    #[test]
    fn test_rejects_invalid_price_tier() {
        let mut business = Catalog::sample().businesses()[0].clone();
        business.price_range = 5;
        let_assert!(
            Err(CatalogError::InvalidPriceRange { price_range: 5, .. }) =
                Catalog::new(vec![business])
        );
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let business = Catalog::sample().businesses()[0].clone();
        let_assert!(
            Err(CatalogError::DuplicateId { id: 1 }) =
                Catalog::new(vec![business.clone(), business])
        );
    }

    #[rstest]
    #[case("3", "Pierogi Palace")]
    #[case("maroush", "Maroush")]
    #[case("  Casa Madeira ", "Casa Madeira")]
    fn test_find_exact(#[case] needle: &str, #[case] expected: &str) {
        let catalog = Catalog::sample();
        let_assert!(Lookup::Found(business) = catalog.find(needle));
        check!(business.name == expected);
    }

    #[test]
    fn test_find_suggests_close_names() {
        let catalog = Catalog::sample();
        let_assert!(Lookup::NotFound(suggestions) = catalog.find("Pierogi Place"));
        check!(suggestions.first().map(|(b, _)| b.name.as_str()) == Some("Pierogi Palace"));
    }
}

//! Fixed vocabularies recognised in free-text queries, with their trigger tables.
//!
//! Every table is an ordered mapping from a label to the substrings that trigger it.
//! Iteration order matters: it decides which label wins where a field holds a single
//! value, and the order in which reasoning notes are emitted.

use rmcp::schemars;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Nationality tokens in detection order. The first token contained in the query wins.
pub const NATIONALITIES: &[&str] = &[
    "turkish",
    "african",
    "caribbean",
    "polish",
    "irish",
    "asian",
    "latino",
    "middle eastern",
    "chinese",
    "japanese",
    "lebanese",
    "persian",
    "brazilian",
    "mexican",
    "ghanaian",
    "ethiopian",
    "romanian",
];

/// Canonical label for a nationality given in any case ("LEBANESE" → "Lebanese"),
/// or `None` when it is not in [`NATIONALITIES`].
pub fn canonical_nationality(label: &str) -> Option<String> {
    let lowered = label.trim().to_lowercase();
    NATIONALITIES
        .iter()
        .find(|token| **token == lowered)
        .map(|token| capitalize_first(token))
}

/// Returns true if `haystack` contains any of `triggers` as a substring.
///
/// Both sides are expected to be lowercase already.
pub fn contains_any(haystack: &str, triggers: &[&str]) -> bool {
    triggers.iter().any(|trigger| haystack.contains(trigger))
}

/// Capitalise the first character, leaving the rest untouched ("middle eastern" → "Middle eastern").
pub(crate) fn capitalize_first(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Business category.
///
/// DO NOT add doc comments to individual variants - this causes schemars to generate
/// `oneOf` schemas instead of simple `enum` arrays, breaking MCP client enum handling.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, schemars::JsonSchema,
)]
pub enum Category {
    Restaurant,
    #[serde(rename = "Grocery Store")]
    GroceryStore,
    #[serde(rename = "Salon & Barber")]
    SalonBarber,
}

impl Category {
    /// Categories in detection priority order.
    pub const ALL: [Self; 3] = [Self::Restaurant, Self::GroceryStore, Self::SalonBarber];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Restaurant => "Restaurant",
            Self::GroceryStore => "Grocery Store",
            Self::SalonBarber => "Salon & Barber",
        }
    }

    /// Query keywords that select this category.
    pub const fn triggers(self) -> &'static [&'static str] {
        match self {
            Self::Restaurant => &["restaurant", "place", "food"],
            Self::GroceryStore => &["grocery", "store", "shop"],
            Self::SalonBarber => &["barber", "salon", "hair"],
        }
    }
}

/// Atmosphere tag. Declaration order is detection order.
///
/// DO NOT add doc comments to individual variants - this causes schemars to generate
/// `oneOf` schemas instead of simple `enum` arrays, breaking MCP client enum handling.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, schemars::JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Atmosphere {
    Cozy,
    Vibrant,
    Authentic,
    Upscale,
    Casual,
}

impl Atmosphere {
    pub const ALL: [Self; 5] = [
        Self::Cozy,
        Self::Vibrant,
        Self::Authentic,
        Self::Upscale,
        Self::Casual,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cozy => "cozy",
            Self::Vibrant => "vibrant",
            Self::Authentic => "authentic",
            Self::Upscale => "upscale",
            Self::Casual => "casual",
        }
    }

    /// Synonyms that trigger the tag in addition to the tag word itself.
    pub const fn synonyms(self) -> &'static [&'static str] {
        match self {
            Self::Cozy => &["intimate", "warm", "comfortable", "small", "family-run"],
            Self::Vibrant => &["lively", "energetic", "bustling", "popular", "busy"],
            Self::Authentic => &[
                "traditional",
                "genuine",
                "original",
                "family-recipe",
                "cultural",
            ],
            Self::Upscale => &[
                "fine-dining",
                "elegant",
                "sophisticated",
                "premium",
                "luxury",
            ],
            Self::Casual => &["relaxed", "informal", "laid-back", "friendly", "neighborhood"],
        }
    }
}

/// Occasion a visit is planned for. Declaration order is detection order.
///
/// DO NOT add doc comments to individual variants - this causes schemars to generate
/// `oneOf` schemas instead of simple `enum` arrays, breaking MCP client enum handling.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, schemars::JsonSchema,
)]
pub enum Occasion {
    #[serde(rename = "date night")]
    DateNight,
    #[serde(rename = "family meal")]
    FamilyMeal,
    #[serde(rename = "business lunch")]
    BusinessLunch,
    #[serde(rename = "celebration")]
    Celebration,
    #[serde(rename = "brunch")]
    Brunch,
}

impl Occasion {
    pub const ALL: [Self; 5] = [
        Self::DateNight,
        Self::FamilyMeal,
        Self::BusinessLunch,
        Self::Celebration,
        Self::Brunch,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DateNight => "date night",
            Self::FamilyMeal => "family meal",
            Self::BusinessLunch => "business lunch",
            Self::Celebration => "celebration",
            Self::Brunch => "brunch",
        }
    }

    pub const fn synonyms(self) -> &'static [&'static str] {
        match self {
            Self::DateNight => &["romantic", "intimate", "quiet", "special"],
            Self::FamilyMeal => &["family-friendly", "spacious", "kids", "large portions"],
            Self::BusinessLunch => &["quick", "professional", "central", "reliable"],
            Self::Celebration => &["special occasion", "festive", "group dining", "memorable"],
            Self::Brunch => &["weekend", "morning", "breakfast", "coffee"],
        }
    }
}

/// Day/meal phrase. Only the exact phrase triggers it.
///
/// DO NOT add doc comments to individual variants - this causes schemars to generate
/// `oneOf` schemas instead of simple `enum` arrays, breaking MCP client enum handling.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, schemars::JsonSchema,
)]
pub enum TimeContext {
    #[serde(rename = "sunday brunch")]
    SundayBrunch,
    #[serde(rename = "weekday lunch")]
    WeekdayLunch,
    #[serde(rename = "friday night")]
    FridayNight,
    #[serde(rename = "weekend dinner")]
    WeekendDinner,
}

/// What a time phrase implies about the visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub day: &'static str,
    pub meal: &'static str,
    pub time_of_day: &'static str,
}

impl TimeContext {
    pub const ALL: [Self; 4] = [
        Self::SundayBrunch,
        Self::WeekdayLunch,
        Self::FridayNight,
        Self::WeekendDinner,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SundayBrunch => "sunday brunch",
            Self::WeekdayLunch => "weekday lunch",
            Self::FridayNight => "friday night",
            Self::WeekendDinner => "weekend dinner",
        }
    }

    pub const fn slot(self) -> TimeSlot {
        match self {
            Self::SundayBrunch => TimeSlot {
                day: "sunday",
                meal: "brunch",
                time_of_day: "morning",
            },
            Self::WeekdayLunch => TimeSlot {
                day: "weekday",
                meal: "lunch",
                time_of_day: "afternoon",
            },
            Self::FridayNight => TimeSlot {
                day: "friday",
                meal: "dinner",
                time_of_day: "evening",
            },
            Self::WeekendDinner => TimeSlot {
                day: "weekend",
                meal: "dinner",
                time_of_day: "evening",
            },
        }
    }
}

/// Requested price tier.
///
/// DO NOT add doc comments to individual variants - this causes schemars to generate
/// `oneOf` schemas instead of simple `enum` arrays, breaking MCP client enum handling.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, schemars::JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum PriceRange {
    Budget,
    Upscale,
}

impl PriceRange {
    /// Checked in this order; the first family present in the query wins.
    pub const ALL: [Self; 2] = [Self::Budget, Self::Upscale];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Budget => "budget",
            Self::Upscale => "upscale",
        }
    }

    pub const fn triggers(self) -> &'static [&'static str] {
        match self {
            Self::Budget => &["cheap", "budget", "affordable"],
            Self::Upscale => &["expensive", "upscale", "fine dining"],
        }
    }

    /// Whether a catalog price tier (1–4) falls within this range.
    pub const fn admits(self, tier: u8) -> bool {
        match self {
            Self::Budget => tier <= 2,
            Self::Upscale => tier >= 3,
        }
    }
}

/// Dietary constraint.
///
/// DO NOT add doc comments to individual variants - this causes schemars to generate
/// `oneOf` schemas instead of simple `enum` arrays, breaking MCP client enum handling.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, schemars::JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum Dietary {
    Halal,
    Kosher,
    Vegan,
    Vegetarian,
    GlutenFree,
}

impl Dietary {
    pub const ALL: [Self; 5] = [
        Self::Halal,
        Self::Kosher,
        Self::Vegan,
        Self::Vegetarian,
        Self::GlutenFree,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Halal => "halal",
            Self::Kosher => "kosher",
            Self::Vegan => "vegan",
            Self::Vegetarian => "vegetarian",
            Self::GlutenFree => "gluten-free",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(Category, Atmosphere, Occasion, TimeContext, PriceRange, Dietary);

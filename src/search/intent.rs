//! Query intent extraction.
//!
//! Turns a free-text query such as "cozy Turkish place for Sunday brunch" into a
//! [`SearchIntent`] over fixed vocabularies, together with a confidence estimate,
//! human-readable reasoning and follow-up query suggestions.

use super::vocabulary::{
    Atmosphere, Category, Dietary, NATIONALITIES, Occasion, PriceRange, TimeContext,
    canonical_nationality, capitalize_first, contains_any,
};
use rmcp::schemars;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

/// Confidence reported for a query that matched nothing.
pub const BASE_CONFIDENCE: f64 = 0.7;

/// Separator between reasoning notes.
pub const REASONING_SEPARATOR: &str = " • ";

/// Maximum number of follow-up suggestions returned.
pub const MAX_SUGGESTIONS: usize = 3;

const NATIONALITY_WEIGHT: f64 = 0.1;
const ATMOSPHERE_WEIGHT: f64 = 0.1;
const OCCASION_WEIGHT: f64 = 0.1;
const TIME_CONTEXT_WEIGHT: f64 = 0.1;
const DIETARY_WEIGHT: f64 = 0.05;

/// Structured interpretation of a query. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchIntent {
    /// Cuisine/nationality label, first letter capitalised (e.g. "Turkish")
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_nationality"
    )]
    #[schemars(with = "Option<String>")]
    pub nationality: Option<String>,
    /// Requested business category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// Requested atmosphere tags
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub atmosphere: BTreeSet<Atmosphere>,
    /// Occasion the visit is for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occasion: Option<Occasion>,
    /// Day/meal phrase
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_context: Option<TimeContext>,
    /// Requested price tier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,
    /// Dietary constraints
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub dietary: BTreeSet<Dietary>,
}

impl SearchIntent {
    /// True when no field is populated.
    pub fn is_empty(&self) -> bool {
        self.nationality.is_none()
            && self.category.is_none()
            && self.atmosphere.is_empty()
            && self.occasion.is_none()
            && self.time_context.is_none()
            && self.price_range.is_none()
            && self.dietary.is_empty()
    }

    /// Whether the intent asks for a brunch visit, either as occasion or time phrase.
    pub fn wants_brunch(&self) -> bool {
        self.occasion == Some(Occasion::Brunch)
            || self
                .time_context
                .is_some_and(|time| time.as_str().contains("brunch"))
    }
}

/// Accepts any case of a known nationality and stores its canonical label.
fn deserialize_nationality<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(label) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    canonical_nationality(&label).map(Some).ok_or_else(|| {
        serde::de::Error::custom(format!(
            "unknown nationality '{}', expected one of: {}",
            label,
            NATIONALITIES.join(", ")
        ))
    })
}

/// Output of [`extract_intent`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntentAnalysis {
    /// Confidence in `[0.7, 1.0]`
    pub confidence: f64,
    /// Reasoning notes joined by [`REASONING_SEPARATOR`]
    pub reasoning: String,
    pub intent: SearchIntent,
    /// Up to [`MAX_SUGGESTIONS`] follow-up queries
    pub suggestions: Vec<String>,
}

/// Accumulates detections while a query is scanned.
struct Extraction {
    intent: SearchIntent,
    notes: Vec<String>,
    confidence: f64,
}

impl Extraction {
    fn new() -> Self {
        Self {
            intent: SearchIntent::default(),
            notes: Vec::new(),
            confidence: BASE_CONFIDENCE,
        }
    }

    fn note(&mut self, note: String, weight: f64) {
        self.notes.push(note);
        self.confidence += weight;
    }

    fn detect_nationality(&mut self, query: &str) {
        if let Some(token) = NATIONALITIES.iter().find(|token| query.contains(*token)) {
            self.intent.nationality = Some(capitalize_first(token));
            self.note(
                format!("Detected {} cuisine preference", token),
                NATIONALITY_WEIGHT,
            );
        }
    }

    fn detect_category(&mut self, query: &str) {
        self.intent.category = Category::ALL
            .into_iter()
            .find(|category| contains_any(query, category.triggers()));
    }

    fn detect_atmosphere(&mut self, query: &str) {
        for atmosphere in Atmosphere::ALL {
            if query.contains(atmosphere.as_str()) || contains_any(query, atmosphere.synonyms()) {
                self.intent.atmosphere.insert(atmosphere);
                self.note(
                    format!("Looking for {} atmosphere", atmosphere),
                    ATMOSPHERE_WEIGHT,
                );
            }
        }
    }

    // Single-valued: a later match overwrites an earlier one.
    fn detect_occasion(&mut self, query: &str) {
        for occasion in Occasion::ALL {
            if query.contains(occasion.as_str()) || contains_any(query, occasion.synonyms()) {
                self.intent.occasion = Some(occasion);
                self.note(
                    format!("Occasion identified as {}", occasion),
                    OCCASION_WEIGHT,
                );
            }
        }
    }

    fn detect_time_context(&mut self, query: &str) {
        for time in TimeContext::ALL {
            if query.contains(time.as_str()) {
                self.intent.time_context = Some(time);
                self.note(format!("Time context: {}", time), TIME_CONTEXT_WEIGHT);
            }
        }
    }

    fn detect_price_range(&mut self, query: &str) {
        let Some(range) = PriceRange::ALL
            .into_iter()
            .find(|range| contains_any(query, range.triggers()))
        else {
            return;
        };

        self.intent.price_range = Some(range);
        let note = match range {
            PriceRange::Budget => "Budget-friendly options preferred",
            PriceRange::Upscale => "Premium dining experience sought",
        };
        self.note(note.to_string(), 0.0);
    }

    fn detect_dietary(&mut self, query: &str) {
        for dietary in Dietary::ALL {
            if query.contains(dietary.as_str()) {
                self.intent.dietary.insert(dietary);
                self.note(format!("Dietary requirement: {}", dietary), DIETARY_WEIGHT);
            }
        }
    }

    fn finish(self) -> IntentAnalysis {
        let suggestions = generate_suggestions(&self.intent);
        IntentAnalysis {
            confidence: self.confidence.min(1.0),
            reasoning: self.notes.join(REASONING_SEPARATOR),
            intent: self.intent,
            suggestions,
        }
    }
}

/// Extract a structured search intent from a free-text query.
///
/// Matching is case-insensitive substring matching against the vocabularies in
/// [`super::vocabulary`]. Nationality takes the first match in list order, occasion and
/// time context take the last. Never fails: an empty or unrecognised query yields an
/// empty intent with [`BASE_CONFIDENCE`].
pub fn extract_intent(query: &str) -> IntentAnalysis {
    let query = query.to_lowercase();
    let mut extraction = Extraction::new();

    extraction.detect_nationality(&query);
    extraction.detect_category(&query);
    extraction.detect_atmosphere(&query);
    extraction.detect_occasion(&query);
    extraction.detect_time_context(&query);
    extraction.detect_price_range(&query);
    extraction.detect_dietary(&query);

    let analysis = extraction.finish();
    tracing::debug!(
        query = %query,
        confidence = analysis.confidence,
        intent = ?analysis.intent,
        "Extracted search intent"
    );
    analysis
}

/// Derive follow-up queries from the populated intent fields.
pub fn generate_suggestions(intent: &SearchIntent) -> Vec<String> {
    let mut suggestions = Vec::new();

    if let Some(nationality) = &intent.nationality {
        suggestions.push(format!("Show all {} restaurants", nationality));
        suggestions.push(format!("{} grocery stores near me", nationality));
    }

    if intent.atmosphere.contains(&Atmosphere::Cozy) {
        suggestions.push("Small family-run restaurants".to_string());
        suggestions.push("Intimate dining spots".to_string());
    }

    if intent.wants_brunch() {
        suggestions.push("Weekend brunch specials".to_string());
        suggestions.push("Places open for breakfast".to_string());
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};
    use rstest::rstest;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_empty_query_yields_floor() {
        let analysis = extract_intent("");
        check!(analysis.intent.is_empty());
        check!(approx(analysis.confidence, BASE_CONFIDENCE));
        check!(analysis.reasoning.is_empty());
        check!(analysis.suggestions.is_empty());
    }

    #[test]
    fn test_lebanese_date_night() {
        let analysis = extract_intent("Authentic Lebanese restaurant for date night");
        let intent = &analysis.intent;
        check!(intent.nationality.as_deref() == Some("Lebanese"));
        check!(intent.category == Some(Category::Restaurant));
        check!(intent.atmosphere.contains(&Atmosphere::Authentic));
        check!(intent.occasion == Some(Occasion::DateNight));
        // nationality + authentic + date night
        check!(approx(analysis.confidence, 1.0));
        check!(analysis.reasoning.starts_with("Detected lebanese cuisine preference • "));
    }

    #[test]
    fn test_first_nationality_wins() {
        // "turkish" precedes "lebanese" in the token list
        let analysis = extract_intent("lebanese or turkish");
        check!(analysis.intent.nationality.as_deref() == Some("Turkish"));
    }

    #[test]
    fn test_multiword_nationality_capitalises_first_char_only() {
        let analysis = extract_intent("halal middle eastern food near me");
        check!(analysis.intent.nationality.as_deref() == Some("Middle eastern"));
        check!(analysis.intent.dietary == BTreeSet::from([Dietary::Halal]));
    }

    #[rstest]
    #[case("a food shop", Some(Category::Restaurant))]
    #[case("grocery for hair products", Some(Category::GroceryStore))]
    #[case("barber", Some(Category::SalonBarber))]
    #[case("somewhere nice", None)]
    fn test_category_priority(#[case] query: &str, #[case] expected: Option<Category>) {
        check!(extract_intent(query).intent.category == expected);
    }

    #[test]
    fn test_last_occasion_wins() {
        // matches date night (romantic) and brunch (coffee)
        let analysis = extract_intent("romantic coffee");
        check!(analysis.intent.occasion == Some(Occasion::Brunch));
        check!(approx(analysis.confidence, 0.9));
    }

    #[test]
    fn test_multiple_atmospheres() {
        let analysis = extract_intent("lively but elegant");
        check!(
            analysis.intent.atmosphere == BTreeSet::from([Atmosphere::Vibrant, Atmosphere::Upscale])
        );
    }

    #[rstest]
    #[case("cheap eats", Some(PriceRange::Budget))]
    #[case("cheap or expensive", Some(PriceRange::Budget))]
    #[case("fine dining", Some(PriceRange::Upscale))]
    #[case("dinner", None)]
    fn test_price_range(#[case] query: &str, #[case] expected: Option<PriceRange>) {
        check!(extract_intent(query).intent.price_range == expected);
    }

    #[test]
    fn test_cheap_sets_only_price() {
        let analysis = extract_intent("cheap");
        let expected = SearchIntent {
            price_range: Some(PriceRange::Budget),
            ..SearchIntent::default()
        };
        check!(analysis.intent == expected);
        check!(approx(analysis.confidence, BASE_CONFIDENCE));
        check!(analysis.reasoning == "Budget-friendly options preferred");
    }

    #[test]
    fn test_confidence_is_clamped() {
        let analysis = extract_intent(
            "cozy vibrant authentic upscale casual turkish halal kosher vegan gluten-free sunday brunch",
        );
        check!(approx(analysis.confidence, 1.0));
    }

    #[test]
    fn test_time_context_last_wins() {
        let analysis = extract_intent("sunday brunch or friday night");
        check!(analysis.intent.time_context == Some(TimeContext::FridayNight));
    }

    #[test]
    fn test_dietary_weight() {
        // "vegetarian" does not contain "vegan"
        let analysis = extract_intent("vegetarian");
        check!(analysis.intent.dietary == BTreeSet::from([Dietary::Vegetarian]));
        check!(approx(analysis.confidence, 0.75));
    }

    #[test]
    fn test_suggestions_truncated_in_generation_order() {
        let analysis = extract_intent("Cozy Turkish place for Sunday brunch");
        check!(
            analysis.suggestions
                == vec![
                    "Show all Turkish restaurants".to_string(),
                    "Turkish grocery stores near me".to_string(),
                    "Small family-run restaurants".to_string(),
                ]
        );
    }

    #[test]
    fn test_brunch_suggestions() {
        let analysis = extract_intent("sunday brunch");
        check!(
            analysis.suggestions
                == vec![
                    "Weekend brunch specials".to_string(),
                    "Places open for breakfast".to_string(),
                ]
        );
    }

    #[test]
    fn test_intent_json_field_names() {
        let intent = extract_intent("cheap sunday brunch").intent;
        let json = serde_json::to_value(&intent).unwrap();
        check!(json["priceRange"] == "budget");
        check!(json["timeContext"] == "sunday brunch");
        check!(json.get("nationality").is_none());
    }

    #[rstest]
    #[case(r#"{"nationality": "lebanese"}"#, Some("Lebanese"))]
    #[case(r#"{"nationality": "MIDDLE EASTERN"}"#, Some("Middle eastern"))]
    #[case(r#"{"nationality": null}"#, None)]
    #[case(r#"{}"#, None)]
    fn test_nationality_deserializes_to_canonical_label(
        #[case] json: &str,
        #[case] expected: Option<&str>,
    ) {
        let intent: SearchIntent = serde_json::from_str(json).unwrap();
        check!(intent.nationality.as_deref() == expected);
    }

    #[rstest]
    #[case(r#"{"nationality": "Klingon"}"#)]
    #[case(r#"{"nationality": ""}"#)]
    fn test_unknown_nationality_is_rejected(#[case] json: &str) {
        let_assert!(Err(error) = serde_json::from_str::<SearchIntent>(json));
        check!(error.to_string().contains("unknown nationality"));
    }
}

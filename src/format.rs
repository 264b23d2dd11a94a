//! Plain-text rendering of engine output for tool responses.

use crate::search::{IntentAnalysis, SearchIntent};
use crate::types::{Business, MatchResult};
use std::fmt::Write as _;

/// Render an intent analysis: confidence, reasoning, detected fields and related searches.
pub fn format_analysis(query: &str, analysis: &IntentAnalysis) -> String {
    let mut output = format!(
        "Understanding of '{}' ({}% confidence)\n\n",
        query,
        percent(analysis.confidence)
    );

    if !analysis.reasoning.is_empty() {
        let _ = writeln!(output, "{}\n", analysis.reasoning);
    }

    let fields = intent_fields(&analysis.intent);
    if fields.is_empty() {
        output.push_str("No specific preferences detected.\n");
    } else {
        for (label, value) in fields {
            let _ = writeln!(output, "• {}: {}", label, value);
        }
    }

    if !analysis.suggestions.is_empty() {
        output.push_str("\nRelated searches:\n");
        for suggestion in &analysis.suggestions {
            let _ = writeln!(output, "• {}", suggestion);
        }
    }

    output
}

/// Populated intent fields as `(label, value)` pairs in display order.
pub fn intent_fields(intent: &SearchIntent) -> Vec<(&'static str, String)> {
    let mut fields = Vec::new();

    if let Some(nationality) = &intent.nationality {
        fields.push(("Nationality", nationality.clone()));
    }
    if let Some(category) = intent.category {
        fields.push(("Category", category.to_string()));
    }
    if !intent.atmosphere.is_empty() {
        fields.push(("Atmosphere", join(intent.atmosphere.iter())));
    }
    if let Some(time) = intent.time_context {
        let slot = time.slot();
        fields.push((
            "Time",
            format!("{} ({} {}, {})", time, slot.day, slot.meal, slot.time_of_day),
        ));
    }
    if let Some(occasion) = intent.occasion {
        fields.push(("Occasion", occasion.to_string()));
    }
    if let Some(price) = intent.price_range {
        fields.push(("Price", price.to_string()));
    }
    if !intent.dietary.is_empty() {
        fields.push(("Dietary", join(intent.dietary.iter())));
    }

    fields
}

/// Render ranked results, at most `limit` of them.
pub fn format_results(query: &str, results: &[MatchResult<'_>], limit: usize) -> String {
    if results.is_empty() {
        return format!(
            "No businesses found for '{}'.\n\n\
             Search tips:\n\
             • Name a cuisine or nationality, e.g. 'Turkish' or 'Caribbean'\n\
             • Say what you need: restaurant, grocery store, barber\n\
             • Add a mood or occasion: cozy, authentic, date night, brunch\n",
            query
        );
    }

    let heading = if query.is_empty() {
        "Directory listings".to_string()
    } else {
        format!("Results for '{}'", query)
    };
    let shown = results.len().min(limit);
    let mut output = format!("{} (showing {} of {}):\n\n", heading, shown, results.len());

    for (idx, result) in results.iter().take(limit).enumerate() {
        let business = result.business;
        let _ = writeln!(
            output,
            "{}. **{}** ({} · {} · {}) - relevance: {}%",
            idx + 1,
            business.name,
            business.nationality,
            business.category,
            business.price_symbols(),
            percent(result.relevance_score)
        );
        let _ = writeln!(output, "   {}", business.description);
        if !result.match_reasons.is_empty() {
            let _ = writeln!(output, "   Why: {}", result.match_reasons.join("; "));
        }
        output.push('\n');
    }

    output
}

/// Render a full business record.
pub fn format_business(business: &Business) -> String {
    let mut output = format!("# {} (#{})\n\n", business.name, business.id);
    let _ = writeln!(output, "{}\n", business.description);
    let _ = writeln!(output, "• Nationality: {}", business.nationality);
    let _ = writeln!(output, "• Category: {}", business.category);
    if let Some(cuisine) = &business.cuisine {
        let _ = writeln!(output, "• Cuisine: {}", cuisine);
    }
    if let Some(services) = &business.services {
        let _ = writeln!(output, "• Services: {}", services);
    }
    let _ = writeln!(output, "• Address: {}", business.address);
    if let Some(phone) = &business.phone {
        let _ = writeln!(output, "• Phone: {}", phone);
    }
    if let Some(hours) = &business.hours {
        let _ = writeln!(output, "• Hours: {}", hours);
    }
    let _ = writeln!(output, "• Rating: {:.1}", business.rating);
    let _ = writeln!(output, "• Price: {}", business.price_symbols());
    output
}

/// Render "did you mean" suggestions for a failed lookup.
pub fn format_lookup_miss(needle: &str, suggestions: &[(&Business, f64)]) -> String {
    let mut output = format!("No business named '{}'.", needle);
    if suggestions.is_empty() {
        output.push_str(" Use an id or the exact business name.\n");
        return output;
    }

    output.push_str(" Did you mean one of these?\n\n");
    for (business, _) in suggestions {
        let _ = writeln!(output, "• `{}` (#{})", business.name, business.id);
    }
    output
}

fn percent(value: f64) -> u8 {
    // Inputs are clamped to [0, 1] by the engine.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let pct = (value.clamp(0.0, 1.0) * 100.0).round() as u8;
    pct
}

fn join<T: std::fmt::Display>(items: impl Iterator<Item = T>) -> String {
    items.map(|item| item.to_string()).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::search::{extract_intent, score_catalog};
    use assert2::check;

    #[test]
    fn test_analysis_lists_fields_and_suggestions() {
        let analysis = extract_intent("Cozy Turkish place for Sunday brunch");
        let output = format_analysis("Cozy Turkish place for Sunday brunch", &analysis);
        check!(output.contains("100% confidence"));
        check!(output.contains("• Nationality: Turkish"));
        check!(output.contains("• Time: sunday brunch (sunday brunch, morning)"));
        check!(output.contains("Related searches:"));
    }

    #[test]
    fn test_empty_analysis() {
        let output = format_analysis("", &extract_intent(""));
        check!(output.contains("70% confidence"));
        check!(output.contains("No specific preferences detected."));
    }

    #[test]
    fn test_results_respect_limit() {
        let catalog = Catalog::sample();
        let analysis = extract_intent("authentic restaurant");
        let results = score_catalog(catalog.businesses(), "authentic restaurant", &analysis.intent);
        let output = format_results("authentic restaurant", &results, 2);
        check!(output.contains("(showing 2 of 5)"));
        check!(output.contains("1. **"));
        check!(!output.contains("3. **"));
    }

    #[test]
    fn test_no_results_tips() {
        check!(format_results("x", &[], 10).contains("Search tips:"));
    }

    #[test]
    fn test_business_details() {
        let catalog = Catalog::sample();
        let output = format_business(&catalog.businesses()[1]);
        check!(output.contains("# Turkish Barber Deluxe (#2)"));
        check!(output.contains("• Services: Hot towel shaves"));
        check!(output.contains("• Price: £"));
        check!(!output.contains("Cuisine"));
    }
}

use rmcp::model::JsonObject;
use rmcp::schemars::{self, JsonSchema, generate::SchemaSettings};
use std::sync::Arc;

/// Generate an inline JSON schema for MCP tools
///
/// Unlike rmcp's default `schema_for_type()`, this function sets `inline_subschemas = true`
/// to generate inline enum definitions instead of $ref patterns. This matters for the
/// intent vocabularies: MCP clients show them as dropdowns rather than raw JSON fields.
pub fn inline_schema_for_type<T: JsonSchema>() -> Arc<JsonObject> {
    let mut settings = SchemaSettings::draft07();
    settings.transforms = vec![Box::new(schemars::transform::AddNullable::default())];
    settings.inline_subschemas = true;

    let generator = settings.into_generator();
    let schema = generator.into_root_schema_for::<T>();

    // A root schema always serializes to a JSON object.
    let json_object = match serde_json::to_value(schema) {
        Ok(serde_json::Value::Object(object)) => object,
        Ok(_) | Err(_) => JsonObject::new(),
    };

    Arc::new(json_object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::search::ScoreWithIntentRequest;
    use assert2::check;

    #[test]
    fn test_intent_vocabularies_are_inlined() {
        let schema = inline_schema_for_type::<ScoreWithIntentRequest>();
        let text = serde_json::to_string(&*schema).unwrap();
        check!(text.contains("\"Salon & Barber\""));
        check!(text.contains("\"date night\""));
        check!(!text.contains("$ref"));
    }
}

//! Prompt assembly for the day-itinerary JSON chain.
//!
//! The schema example is embedded as literal text so the model sees the
//! exact key set it must return.

/// Literal JSON example injected into the system instruction.
pub const SCHEMA_EXAMPLE: &str = concat!(
    "{",
    "\"language_code\": \"fr|en|es|ar|...\", ",
    "\"overview\": \"string\", ",
    "\"morning\": [\"bullet1\"], ",
    "\"lunch\": [\"bullet1\"], ",
    "\"afternoon\": [\"bullet1\"], ",
    "\"evening\": [\"bullet1\"], ",
    "\"logistics\": [\"bullet1\"], ",
    "\"rain_plan\": [\"bullet1\"], ",
    "\"recap\": [\"bullet1\"], ",
    "\"pois\": [",
    "{\"name\":\"string\",\"address\":\"string\",",
    "\"category\":\"sight|museum|food|view|park\",\"est_cost_eur\": 0}",
    "]",
    "}"
);

/// System turn: language detection, strict-JSON requirement, schema.
pub fn system_instruction() -> String {
    format!(
        "You are a travel expert. You MUST detect the language of the last \
         user message and answer only in that language. Return STRICTLY one \
         JSON object with no surrounding text. Expected structure: {SCHEMA_EXAMPLE}"
    )
}

/// Human turn: city, comma-joined interests, POI-count constraint.
/// Empty interests fall back to "general".
pub fn human_instruction(city: &str, interests: &[String]) -> String {
    let interests_txt = {
        let joined = interests
            .iter()
            .map(|i| i.trim())
            .filter(|i| !i.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        if joined.is_empty() {
            "general".to_string()
        } else {
            joined
        }
    };

    format!(
        "City: {city}\nInterests: {interests_txt}\n\
         Constraints: 6-10 POIs max, recognizable addresses or places. \
         Short, concrete bullets (indicative times, logical order)."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_instruction_embeds_schema() {
        let system = system_instruction();
        assert!(system.contains("\"language_code\""));
        assert!(system.contains("\"pois\""));
        assert!(system.contains("STRICTLY one JSON object"));
    }

    #[test]
    fn schema_example_is_valid_json() {
        let parsed: serde_json::Value = serde_json::from_str(SCHEMA_EXAMPLE).unwrap();
        assert!(parsed.get("rain_plan").is_some());
        assert!(parsed["pois"][0].get("est_cost_eur").is_some());
    }

    #[test]
    fn human_instruction_joins_interests() {
        let interests = vec!["museums".to_string(), "coffee".to_string()];
        let human = human_instruction("Paris", &interests);
        assert!(human.contains("City: Paris"));
        assert!(human.contains("Interests: museums, coffee"));
        assert!(human.contains("6-10 POIs"));
    }

    #[test]
    fn empty_interests_fall_back_to_general() {
        let human = human_instruction("Lyon", &[" ".to_string()]);
        assert!(human.contains("Interests: general"));
    }
}

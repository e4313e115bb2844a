use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Lenient view of the model's single-day JSON object.
///
/// Every field is optional: missing or null values default rather than
/// reject, and a bullet section that arrives as a bare string is promoted
/// to a one-element list. Only structurally unparseable payloads error.
#[derive(Debug, Default, Deserialize)]
pub struct RawDayResponse {
    #[serde(default)]
    pub language_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_bullets")]
    pub overview: Vec<String>,
    #[serde(default, deserialize_with = "lenient_bullets")]
    pub morning: Vec<String>,
    #[serde(default, deserialize_with = "lenient_bullets")]
    pub lunch: Vec<String>,
    #[serde(default, deserialize_with = "lenient_bullets")]
    pub afternoon: Vec<String>,
    #[serde(default, deserialize_with = "lenient_bullets")]
    pub evening: Vec<String>,
    #[serde(default, deserialize_with = "lenient_bullets")]
    pub logistics: Vec<String>,
    #[serde(default, deserialize_with = "lenient_bullets")]
    pub rain_plan: Vec<String>,
    #[serde(default, deserialize_with = "lenient_bullets")]
    pub recap: Vec<String>,
    #[serde(default)]
    pub pois: Option<Vec<RawPoi>>,
}

/// A POI as the model emits it, before link derivation and defaulting.
#[derive(Debug, Default, Deserialize)]
pub struct RawPoi {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_cost")]
    pub est_cost_eur: Option<f64>,
}

/// Accepts null, a string, or an array; non-string array items are
/// stringified so one sloppy entry does not reject the whole day.
fn lenient_bullets<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => Vec::new(),
        Value::String(s) => {
            if s.trim().is_empty() {
                Vec::new()
            } else {
                vec![s]
            }
        }
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::Null => None,
                Value::String(s) => Some(s),
                other => Some(other.to_string()),
            })
            .collect(),
        other => vec![other.to_string()],
    })
}

/// Accepts a number or a numeric string; anything else defaults to None.
fn lenient_cost<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_sections_default_to_empty() {
        let raw: RawDayResponse = serde_json::from_value(json!({
            "language_code": "en",
            "morning": ["Walk the Marais"]
        }))
        .unwrap();

        assert_eq!(raw.language_code.as_deref(), Some("en"));
        assert_eq!(raw.morning, vec!["Walk the Marais"]);
        assert!(raw.evening.is_empty());
        assert!(raw.pois.is_none());
    }

    #[test]
    fn string_section_becomes_single_bullet() {
        let raw: RawDayResponse = serde_json::from_value(json!({
            "overview": "A relaxed museum day"
        }))
        .unwrap();

        assert_eq!(raw.overview, vec!["A relaxed museum day"]);
    }

    #[test]
    fn null_sections_and_string_costs_are_tolerated() {
        let raw: RawDayResponse = serde_json::from_value(json!({
            "lunch": null,
            "pois": [{"name": "Louvre", "est_cost_eur": "22"}]
        }))
        .unwrap();

        assert!(raw.lunch.is_empty());
        let pois = raw.pois.unwrap();
        assert_eq!(pois[0].est_cost_eur, Some(22.0));
    }
}

//! Video parameters — the five editable fields shared by extraction and enhancement.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::video::prompts::NOT_SPECIFIED;

/// Structured video parameters. Every field is a free-form string; blank means unknown.
///
/// `size` is usually Landscape, Vertical or Square but is not enforced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoOptions {
    #[serde(deserialize_with = "lenient_string")]
    pub duration: String,
    #[serde(deserialize_with = "lenient_string")]
    pub language: String,
    #[serde(deserialize_with = "lenient_string")]
    pub platform: String,
    #[serde(deserialize_with = "lenient_string")]
    pub size: String,
    #[serde(deserialize_with = "lenient_string")]
    pub category: String,
}

impl VideoOptions {
    /// Builds options from an extracted JSON object. Missing, null, empty, or
    /// non-scalar fields become `""`; numbers and booleans keep their JSON text.
    pub fn from_extracted(map: &Map<String, Value>) -> Self {
        let field = |key: &str| map.get(key).map(scalar_text).unwrap_or_default();

        Self {
            duration: field("duration"),
            language: field("language"),
            platform: field("platform"),
            size: field("size"),
            category: field("category"),
        }
    }

    /// One `Label: value` line per field, `Not specified` for blanks.
    pub fn parameters_block(&self) -> String {
        [
            ("Duration", &self.duration),
            ("Language", &self.language),
            ("Platform", &self.platform),
            ("Size", &self.size),
            ("Category", &self.category),
        ]
        .iter()
        .map(|(label, value)| {
            let value = value.trim();
            let value = if value.is_empty() { NOT_SPECIFIED } else { value };
            format!("{label}: {value}")
        })
        .collect::<Vec<_>>()
        .join("\n")
    }
}

/// Accepts any JSON value for a field, so `null` or `30` from a client is not a 422.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|v| scalar_text(&v))
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn test_from_extracted_full() {
        let map = object(json!({
            "duration": "30 sec",
            "language": "English",
            "platform": "YouTube",
            "size": "Vertical",
            "category": "Kids Education"
        }));
        let options = VideoOptions::from_extracted(&map);
        assert_eq!(options.duration, "30 sec");
        assert_eq!(options.language, "English");
        assert_eq!(options.platform, "YouTube");
        assert_eq!(options.size, "Vertical");
        assert_eq!(options.category, "Kids Education");
    }

    #[test]
    fn test_from_extracted_missing_and_null_fields_are_blank() {
        let map = object(json!({"duration": null, "platform": "TikTok"}));
        let options = VideoOptions::from_extracted(&map);
        assert_eq!(options.duration, "");
        assert_eq!(options.language, "");
        assert_eq!(options.platform, "TikTok");
        assert_eq!(options.size, "");
    }

    #[test]
    fn test_from_extracted_number_and_bool_keep_json_text() {
        let map = object(json!({"duration": 30, "category": true}));
        let options = VideoOptions::from_extracted(&map);
        assert_eq!(options.duration, "30");
        assert_eq!(options.category, "true");
    }

    #[test]
    fn test_from_extracted_nested_values_are_blank() {
        let map = object(json!({"language": ["English", "Tamil"], "size": {"w": 1080}}));
        let options = VideoOptions::from_extracted(&map);
        assert_eq!(options.language, "");
        assert_eq!(options.size, "");
    }

    #[test]
    fn test_from_empty_map_is_default() {
        assert_eq!(VideoOptions::from_extracted(&Map::new()), VideoOptions::default());
    }

    #[test]
    fn test_parameters_block_fills_blanks() {
        let options = VideoOptions {
            duration: "1 min".to_string(),
            language: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(
            options.parameters_block(),
            "Duration: 1 min\n\
             Language: Not specified\n\
             Platform: Not specified\n\
             Size: Not specified\n\
             Category: Not specified"
        );
    }

    #[test]
    fn test_lenient_deserialize_accepts_null_and_numbers() {
        let options: VideoOptions =
            serde_json::from_str(r#"{"duration": 45, "language": null}"#).unwrap();
        assert_eq!(options.duration, "45");
        assert_eq!(options.language, "");
    }

    #[test]
    fn test_partial_options_deserialize_with_defaults() {
        let options: VideoOptions = serde_json::from_str(r#"{"size": "Square"}"#).unwrap();
        assert_eq!(options.size, "Square");
        assert_eq!(options.duration, "");
    }
}

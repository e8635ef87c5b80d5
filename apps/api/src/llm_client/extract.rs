//! Best-effort JSON extraction from free-form completion text.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};

/// First `{` through last `}`, across newlines.
fn object_span() -> &'static Regex {
    static OBJECT_SPAN: OnceLock<Regex> = OnceLock::new();
    OBJECT_SPAN.get_or_init(|| Regex::new(r"\{[\s\S]*\}").expect("static regex"))
}

/// Pulls a JSON object out of model output.
///
/// Parses the widest `{...}` span. Returns an empty map when there is no
/// span or it does not parse to an object. Never fails.
pub fn extract_json_object(text: &str) -> Map<String, Value> {
    object_span()
        .find(text)
        .and_then(|m| parse_object(m.as_str()))
        .unwrap_or_default()
}

fn parse_object(candidate: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(candidate) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

//! Problem payloads embedded in problem-marker rectangles (`data-info`).

use serde::Deserialize;
use serde_json::Value;

/// One incident overlapping a span of the time axis.
///
/// Time fields arrive preformatted by the graph renderer; numbers are accepted too and kept in
/// their JSON text form.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Problem {
    #[serde(deserialize_with = "string_like")]
    pub clock: String,
    #[serde(deserialize_with = "string_like")]
    pub r_clock: String,
    /// Recovery event id. Only a truthy id turns the recovery clock into a link.
    pub r_eventid: Value,
    #[serde(deserialize_with = "string_like")]
    pub url: String,
    #[serde(deserialize_with = "string_like")]
    pub status: String,
    #[serde(deserialize_with = "string_like")]
    pub status_color: String,
    #[serde(deserialize_with = "string_like")]
    pub severity: String,
    #[serde(deserialize_with = "string_like")]
    pub name: String,
}

impl Problem {
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    pub fn has_recovery_event(&self) -> bool {
        is_truthy(&self.r_eventid)
    }
}

/// JSON truthiness as the dashboard scripts see it: `null`, `false`, `0`, `""` and `"0"` are
/// false.
pub fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn string_like<'de, D>(de: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Value::deserialize(de)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

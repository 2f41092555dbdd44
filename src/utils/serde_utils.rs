use serde::Deserialize;
use serde_json::Value;

/// Accepts strings and numbers; everything else becomes `None`.
pub fn deserialize_as_option_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Value = Deserialize::deserialize(deserializer)?;

    match value {
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        _ => Ok(None),
    }
}

/// Provider ids come as strings or numbers. Empty strings, `0`, `null`
/// and `false` count as a missing id.
pub fn deserialize_as_option_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Value = Deserialize::deserialize(deserializer)?;

    match value {
        Value::String(s) if !s.is_empty() => Ok(Some(s)),
        Value::Number(n) if n.as_f64() != Some(0.0) => Ok(Some(n.to_string())),
        _ => Ok(None),
    }
}

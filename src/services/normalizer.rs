// src/services/normalizer.rs
//! Cleanup applied to raw model output before it is shown to a user.
//!
//! Models sometimes answer with a JSON object, a JSON string literal, or text
//! carrying literal `\n` / `\"` escapes. `normalize` folds all of these into
//! one display string and never fails.

use serde_json::Value;

/// Parse `s` as JSON, or `None` if it isn't.
pub fn try_parse_json(s: &str) -> Option<Value> {
    serde_json::from_str(s).ok()
}

/// Run the full pipeline: unwrap, strip wrapping, strip quotes, unescape, trim.
pub fn normalize(raw: &str) -> String {
    let unwrapped = unwrap_structured(raw);
    let stripped = strip_wrapping_quotes(strip_structural_wrapping(&unwrapped));
    unescape(stripped).trim().to_string()
}

/// Replace `raw` with the display text it encodes, if it is valid JSON.
fn unwrap_structured(raw: &str) -> String {
    match try_parse_json(raw) {
        None => raw.to_string(),
        Some(value) => display_text(&value),
    }
}

/// Objects yield their `reply`, else `message`, else all values joined by a
/// space. Arrays join their elements. Applied recursively.
pub fn display_text(value: &Value) -> String {
    match value {
        Value::Object(map) => {
            let picked = ["reply", "message"]
                .iter()
                .filter_map(|key| map.get(*key))
                .find(|v| !is_blank(v));

            match picked {
                Some(value) => display_text(value),
                None => join_values(map.values()),
            }
        }
        Value::Array(items) => join_values(items.iter()),
        scalar => value_to_text(scalar),
    }
}

fn join_values<'a>(values: impl Iterator<Item = &'a Value>) -> String {
    values.map(display_text).collect::<Vec<_>>().join(" ")
}

// `null` and `""` both count as a missing field.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Scalar form: strings verbatim, `null` as empty, numbers and booleans as JSON text.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn strip_structural_wrapping(s: &str) -> &str {
    s.trim_start_matches(['{', '['])
        .trim_end_matches(['}', ']'])
}

fn strip_wrapping_quotes(s: &str) -> &str {
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

// Order matters: `\\` must collapse last.
fn unescape(s: &str) -> String {
    s.replace("\\n", "\n")
        .replace("\\\"", "\"")
        .replace("\\\\", "\\")
}

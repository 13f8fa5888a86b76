//! Uniform result envelopes for tool output.
//!
//! Every tool call returns `{"status", "message", "data"}` so clients can
//! branch on `status` without knowing which endpoint was called.

use serde_json::{Value, json};

#[must_use]
pub fn success(message: impl Into<String>, data: Value) -> Value {
    json!({
        "status": "success",
        "message": message.into(),
        "data": data,
    })
}

#[must_use]
pub fn error(message: impl Into<String>) -> Value {
    json!({
        "status": "error",
        "message": message.into(),
    })
}

/// Human-readable message for a tool result: counts array payloads, keeps a
/// plain confirmation otherwise.
#[must_use]
pub fn describe(noun: &str, data: &Value) -> String {
    match data {
        Value::Array(items) if items.len() == 1 => format!("Found 1 {noun}"),
        Value::Array(items) => format!("Found {} {}", items.len(), pluralize(noun)),
        _ => format!("Retrieved {noun}"),
    }
}

// Covers the catalog's nouns; sibilant endings take "es" ("address" ->
// "addresses"), everything else a plain "s".
fn pluralize(noun: &str) -> String {
    let sibilant = ["s", "x", "z", "ch", "sh"]
        .iter()
        .any(|suffix| noun.ends_with(suffix));
    if sibilant {
        format!("{noun}es")
    } else {
        format!("{noun}s")
    }
}

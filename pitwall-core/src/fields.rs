//! Typed accessors over loosely typed [`Metadata`] objects.
//!
//! Vendor files disagree on field types (`"year": "2004"` vs `2004`,
//! `"pitboxes": 30` vs `"30"`), so every accessor is lenient.

use serde_json::Value;

use crate::metadata::Metadata;

/// A non-empty, trimmed string field.
pub fn string_field(metadata: &Metadata, key: &str) -> Option<String> {
    match metadata.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

/// A string or number field rendered as text.
pub fn text_field(metadata: &Metadata, key: &str) -> Option<String> {
    match metadata.get(key)? {
        Value::Number(n) => Some(n.to_string()),
        _ => string_field(metadata, key),
    }
}

/// The string entries of an array field. Missing or non-array fields are empty.
pub fn tags_field(metadata: &Metadata, key: &str) -> Vec<String> {
    match metadata.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| v.as_str())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}

/// An object field, or an empty object.
pub fn object_field(metadata: &Metadata, key: &str) -> Metadata {
    match metadata.get(key) {
        Some(Value::Object(map)) => map.clone(),
        _ => Metadata::new(),
    }
}

/// The manufacturer of a car.
///
/// Explicit `brand`, else the first word of `name`, else `"Unknown"`.
pub fn derive_brand(metadata: &Metadata) -> String {
    string_field(metadata, "brand")
        .or_else(|| {
            string_field(metadata, "name")
                .and_then(|name| name.split_whitespace().next().map(str::to_string))
        })
        .unwrap_or_else(|| crate::UNKNOWN.to_string())
}

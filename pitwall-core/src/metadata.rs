//! Tolerant parser for vendor-authored `ui_car.json` / `ui_track.json` files.
//!
//! These files are hand-edited and routinely contain raw line breaks or
//! unescaped quotes inside free-text fields. Parsing first tries strict JSON,
//! then a chain of increasingly lossy text repairs, and finally settles for a
//! minimal object built from the `name` and `brand` fields alone.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::error::MetadataError;

/// A parsed metadata object: string keys to loosely typed values.
pub type Metadata = Map<String, Value>;

/// Description stored in the minimal fallback object.
pub const DESCRIPTION_PLACEHOLDER: &str = "*** Error parsing description ***";

/// Why a single repair strategy gave up. Never surfaces past [`parse_metadata`].
#[derive(Debug, thiserror::Error)]
enum RepairError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("no description field")]
    NoDescription,

    #[error("text is not wrapped in braces")]
    NotAnObject,

    #[error("no key/value pairs recovered")]
    NoPairs,
}

type Repair = fn(&str) -> Result<Metadata, RepairError>;

/// Repairs tried in order after the strict parse fails.
const REPAIRS: &[(&str, Repair)] = &[
    ("collapse line breaks", collapse_line_breaks),
    ("escape description", escape_description),
    ("rebuild pairs", rebuild_pairs),
];

static DESCRIPTION_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)"description"\s*:\s*"(.*?)"\s*[,}]"#).expect("static pattern")
});

/// A comma that starts the next `"key":` of the top-level object.
static KEY_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#",\s*"[^"]*"\s*:"#).expect("static pattern"));

static PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?s)^\s*"([^"]+)"\s*:\s*(.*?)\s*$"#).expect("static pattern"));

static NAME_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""name"\s*:\s*"([^"]*)""#).expect("static pattern"));

static BRAND_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""brand"\s*:\s*"([^"]*)""#).expect("static pattern"));

/// Parse metadata text, repairing it when it is not valid JSON.
///
/// Well-formed input is returned exactly as `serde_json` parses it. When all
/// repairs fail but a `"name"` string can still be found, a minimal object
/// with placeholder fields is returned instead.
///
/// # Errors
/// [`MetadataError::Parse`] with the strict-parse error when nothing at all
/// can be recovered.
pub fn parse_metadata(text: &str) -> Result<Metadata, MetadataError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let strict_error = match serde_json::from_str::<Metadata>(text) {
        Ok(metadata) => return Ok(metadata),
        Err(e) => e,
    };

    for (name, repair) in REPAIRS {
        match repair(text) {
            Ok(metadata) => {
                log::debug!("Recovered malformed metadata with '{}' repair", name);
                return Ok(metadata);
            }
            Err(e) => log::trace!("'{}' repair failed: {}", name, e),
        }
    }

    match fallback_metadata(text) {
        Some(metadata) => {
            log::debug!("Using minimal fallback metadata");
            Ok(metadata)
        }
        None => Err(MetadataError::Parse(strict_error)),
    }
}

fn collapse_line_breaks(text: &str) -> Result<Metadata, RepairError> {
    Ok(serde_json::from_str(&normalize_line_breaks(text))?)
}

/// Replace every run of `\r`/`\n` with a single space.
///
/// Raw line breaks are legal whitespace between tokens but illegal inside
/// string literals, so the same replacement applies on both sides of a quote.
fn normalize_line_breaks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_break = false;
    for c in text.chars() {
        if matches!(c, '\n' | '\r') {
            if !in_break {
                out.push(' ');
                in_break = true;
            }
        } else {
            in_break = false;
            out.push(c);
        }
    }
    out
}

fn escape_description(text: &str) -> Result<Metadata, RepairError> {
    let content = DESCRIPTION_FIELD
        .captures(text)
        .and_then(|caps| caps.get(1))
        .ok_or(RepairError::NoDescription)?;

    let mut repaired = String::with_capacity(text.len() + 32);
    repaired.push_str(&text[..content.start()]);
    repaired.push_str(&escape_string_content(content.as_str()));
    repaired.push_str(&text[content.end()..]);
    Ok(serde_json::from_str(&repaired)?)
}

/// Escape raw text so it can sit between the quotes of a JSON string.
fn escape_string_content(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 8);
    for c in raw.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '"' => out.push_str("\\\""),
            _ => out.push(c),
        }
    }
    out
}

fn rebuild_pairs(text: &str) -> Result<Metadata, RepairError> {
    let body = text
        .trim()
        .strip_prefix('{')
        .and_then(|t| t.strip_suffix('}'))
        .ok_or(RepairError::NotAnObject)?;
    let body = body.trim_end().trim_end_matches(',');

    let mut metadata = Metadata::new();
    for segment in split_pairs(body) {
        let Some(caps) = PAIR.captures(segment) else {
            continue;
        };
        metadata.insert(caps[1].to_string(), recover_value(&caps[2]));
    }

    if metadata.is_empty() {
        return Err(RepairError::NoPairs);
    }
    Ok(metadata)
}

/// Split an object body at every comma that precedes a quoted key.
fn split_pairs(body: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    for m in KEY_BOUNDARY.find_iter(body) {
        segments.push(&body[start..m.start()]);
        start = m.start() + 1;
    }
    segments.push(&body[start..]);
    segments
}

/// Best-effort JSON value for the raw text on the right of a `"key":`.
fn recover_value(raw: &str) -> Value {
    let candidate = if raw.starts_with('"') && raw.contains(|c: char| matches!(c, '\n' | '\r')) {
        escape_multiline_string(raw)
    } else {
        raw.to_string()
    };

    if let Ok(value) = serde_json::from_str(&candidate) {
        return value;
    }

    if raw.starts_with('[') {
        let flattened: String = raw.chars().filter(|&c| !matches!(c, '\n' | '\r')).collect();
        return serde_json::from_str(&flattened).unwrap_or(Value::Null);
    }

    Value::String(raw.replace('"', "").trim().to_string())
}

/// Escape the line breaks between the opening quote and the last quote.
fn escape_multiline_string(raw: &str) -> String {
    let close = raw.rfind('"').filter(|&i| i > 0).unwrap_or(raw.len());
    let inner = &raw[1..close];
    let rest = raw.get(close + 1..).unwrap_or("");

    let mut out = String::with_capacity(raw.len() + 8);
    out.push('"');
    for c in inner.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out.push_str(rest);
    out
}

/// Minimal object from the `name` (required) and `brand` (optional) fields.
fn fallback_metadata(text: &str) -> Option<Metadata> {
    let name = NAME_FIELD.captures(text)?.get(1)?.as_str();

    let mut metadata = Metadata::new();
    metadata.insert("name".into(), Value::String(name.to_string()));
    if let Some(brand) = BRAND_FIELD.captures(text).and_then(|c| c.get(1)) {
        metadata.insert("brand".into(), Value::String(brand.as_str().to_string()));
    }
    metadata.insert(
        "description".into(),
        Value::String(DESCRIPTION_PLACEHOLDER.to_string()),
    );
    metadata.insert("class".into(), Value::String(crate::UNKNOWN.to_string()));
    metadata.insert("specs".into(), Value::Object(Map::new()));
    metadata.insert("tags".into(), Value::Array(Vec::new()));
    Some(metadata)
}

#[cfg(test)]
#[path = "tests/metadata_tests.rs"]
mod tests;

use super::*;
use serde_json::json;

#[test]
fn test_valid_json_matches_strict_parse() {
    let text = r#"{"name": "Ford GT", "class": "GT3", "year": 2023, "specs": {"bhp": "600"}, "tags": ["gt3", "race"]}"#;
    let expected: Metadata = serde_json::from_str(text).unwrap();
    assert_eq!(parse_metadata(text).unwrap(), expected);
}

#[test]
fn test_byte_order_mark_is_ignored() {
    let text = "\u{feff}{\"name\": \"Abarth 500\"}";
    let metadata = parse_metadata(text).unwrap();
    assert_eq!(metadata["name"], json!("Abarth 500"));
}

#[test]
fn test_raw_line_breaks_in_strings_become_spaces() {
    let text = "{\"name\": \"Line one\nLine two\", \"description\": \"a\r\n\r\nb\", \"class\": \"GT3\"}";
    let metadata = parse_metadata(text).unwrap();
    assert_eq!(metadata["name"], json!("Line one Line two"));
    assert_eq!(metadata["description"], json!("a b"));
    assert_eq!(metadata["class"], json!("GT3"));
}

#[test]
fn test_normalize_line_breaks_collapses_runs() {
    assert_eq!(normalize_line_breaks("a\r\n\r\nb\nc"), "a b c");
    assert_eq!(normalize_line_breaks("no breaks"), "no breaks");
}

#[test]
fn test_description_with_unescaped_quotes_is_escaped() {
    let text = "{\"name\": \"Lotus 49\", \"description\": \"He said \"fast\"\nand left\", \"class\": \"F1\"}";
    let metadata = parse_metadata(text).unwrap();
    assert_eq!(metadata["description"], json!("He said \"fast\"\nand left"));
    assert_eq!(metadata["name"], json!("Lotus 49"));
    assert_eq!(metadata["class"], json!("F1"));
}

#[test]
fn test_description_as_last_field() {
    let text = "{\"name\": \"KTM X-Bow\", \"description\": \"C:\\temp \"R\" edition\"}";
    let metadata = parse_metadata(text).unwrap();
    assert_eq!(metadata["description"], json!("C:\\temp \"R\" edition"));
}

#[test]
fn test_rebuild_recovers_other_broken_fields() {
    let text = r#"{"name": "Zonda", "class": "street", "specs": {"bhp": "552bhp"}, "notes": "a "b" c"}"#;
    let metadata = parse_metadata(text).unwrap();
    assert_eq!(metadata["name"], json!("Zonda"));
    assert_eq!(metadata["class"], json!("street"));
    assert_eq!(metadata["specs"], json!({"bhp": "552bhp"}));
    assert_eq!(metadata["notes"], json!("a b c"));
}

#[test]
fn test_rebuild_handles_multiline_values() {
    let text = "{\n  \"name\": \"Multi\",\n  \"notes\": \"first\nsecond \"x\"\",\n  \"tags\": [\"a\",\n \"b\"],\n}";
    let metadata = parse_metadata(text).unwrap();
    assert_eq!(metadata["name"], json!("Multi"));
    assert_eq!(metadata["notes"], json!("first\nsecond x"));
    assert_eq!(metadata["tags"], json!(["a", "b"]));
}

#[test]
fn test_recover_value_multiline_string() {
    assert_eq!(recover_value("\"line one\nline two\""), json!("line one\nline two"));
}

#[test]
fn test_recover_value_arrays() {
    assert_eq!(recover_value("[\"a\nb\"]"), json!(["ab"]));
    assert_eq!(recover_value("[1, 2"), Value::Null);
}

#[test]
fn test_recover_value_bare_text() {
    assert_eq!(recover_value("550 hp"), json!("550 hp"));
    assert_eq!(recover_value("12"), json!(12));
}

#[test]
fn test_split_pairs_only_at_key_commas() {
    let body = r#""name": "A, B", "tags": ["x", "y"], "year": 1990"#;
    let segments = split_pairs(body);
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0], r#""name": "A, B""#);
    assert_eq!(segments[1].trim(), r#""tags": ["x", "y"]"#);
    assert_eq!(segments[2].trim(), r#""year": 1990"#);
}

#[test]
fn test_rebuild_requires_braces_and_pairs() {
    assert!(matches!(
        rebuild_pairs("\"name\": \"x\""),
        Err(RepairError::NotAnObject)
    ));
    assert!(matches!(
        rebuild_pairs("{ nonsense }"),
        Err(RepairError::NoPairs)
    ));
}

#[test]
fn test_fallback_extracts_name_and_brand() {
    let text = r#"garbage "name": "X" more garbage "brand": "Y" trailing"#;
    let metadata = parse_metadata(text).unwrap();
    assert_eq!(metadata["name"], json!("X"));
    assert_eq!(metadata["brand"], json!("Y"));
    assert_eq!(metadata["description"], json!(DESCRIPTION_PLACEHOLDER));
    assert_eq!(metadata["class"], json!("Unknown"));
    assert_eq!(metadata["specs"], json!({}));
    assert_eq!(metadata["tags"], json!([]));
}

#[test]
fn test_fallback_for_truncated_file() {
    let text = r#"{"name": "Truncated", "brand": "Acme", "description": "cut off"#;
    let metadata = parse_metadata(text).unwrap();
    assert_eq!(metadata["name"], json!("Truncated"));
    assert_eq!(metadata["brand"], json!("Acme"));
}

#[test]
fn test_fallback_without_brand_omits_key() {
    let text = r#"<<"name": "Only Name">>"#;
    let metadata = parse_metadata(text).unwrap();
    assert_eq!(metadata["name"], json!("Only Name"));
    assert!(!metadata.contains_key("brand"));
}

#[test]
fn test_garbage_without_name_is_an_error() {
    let err = parse_metadata("<<< definitely not json >>>").unwrap_err();
    assert!(matches!(err, MetadataError::Parse(_)));
}

#[test]
fn test_non_object_json_is_an_error() {
    assert!(parse_metadata("[1, 2, 3]").is_err());
}

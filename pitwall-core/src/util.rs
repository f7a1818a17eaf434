/// Maximum number of characters of bad content quoted in diagnostics.
pub const SNIPPET_CHARS: usize = 100;

/// The first `max_chars` characters of `text`, on a single line.
///
/// Used when logging metadata that could not be parsed, so a corrupt file
/// can be recognized without dumping it whole.
pub fn snippet(text: &str, max_chars: usize) -> String {
    let mut out: String = text
        .chars()
        .take(max_chars)
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    if text.chars().nth(max_chars).is_some() {
        out.push_str("...");
    }
    out
}

/// Decode file bytes as text, replacing invalid UTF-8 sequences.
///
/// Older content packs were saved in legacy code pages; the ASCII structure
/// still parses even when accented characters do not survive.
pub fn decode_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_truncates_and_flattens() {
        assert_eq!(snippet("short", 100), "short");
        assert_eq!(snippet("a\nb", 100), "a b");
        assert_eq!(snippet("abcdef", 3), "abc...");
        assert_eq!(snippet("abc", 3), "abc");
    }

    #[test]
    fn test_decode_text_is_lossy() {
        assert_eq!(decode_text(b"{\"name\": \"Caf\xe9\"}"), "{\"name\": \"Caf\u{fffd}\"}");
    }
}

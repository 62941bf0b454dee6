//! Line parser for env files.
//!
//! Responsibilities:
//! - Split env-file text into lines and parse each `KEY=VALUE` assignment.
//! - Strip matching quotes and decode escape sequences in double-quoted
//!   values.
//!
//! Does NOT handle:
//! - File I/O or merging into an environment table (see `loader.rs`).
//!
//! Invariants:
//! - Names match `[A-Za-z_][A-Za-z0-9_]*`.
//! - Lines that do not match the grammar are skipped silently; the format is
//!   forgiving of stray text and blank scaffolding.
//! - Single-quoted values receive no escape processing.

/// One parsed name/value assignment, prior to merge into an environment
/// table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    pub name: String,
    pub value: String,
}

/// Parse env-file text into assignments, in file order.
///
/// Empty lines and lines whose first non-whitespace character is `#` are
/// skipped. Lines that do not match the `KEY=VALUE` grammar are skipped with
/// a debug log. Both `\n` and `\r\n` line endings are accepted.
pub fn parse_str(content: &str) -> Vec<ConfigEntry> {
    let mut entries = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let Some((raw_name, raw_value)) = trimmed.split_once('=') else {
            tracing::debug!(line = index + 1, "skipping line without '='");
            continue;
        };
        let name = raw_name.trim();
        if !is_valid_name(name) {
            tracing::debug!(line = index + 1, "skipping line with invalid name");
            continue;
        }
        entries.push(ConfigEntry {
            name: name.to_string(),
            value: parse_value(raw_value),
        });
    }
    entries
}

/// Check a name against `[A-Za-z_][A-Za-z0-9_]*`.
fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Parse the value portion of an assignment.
///
/// A value wrapped in matching single or double quotes has the quotes
/// stripped; double-quoted contents additionally have `\n`, `\r`, `\t`,
/// `\\` and `\"` decoded. An unquoted value is trimmed of surrounding
/// whitespace.
fn parse_value(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.len() >= 2 {
        if trimmed.starts_with('"') && trimmed.ends_with('"') {
            return decode_escapes(&trimmed[1..trimmed.len() - 1]);
        }
        if trimmed.starts_with('\'') && trimmed.ends_with('\'') {
            return trimmed[1..trimmed.len() - 1].to_string();
        }
    }
    trimmed.to_string()
}

/// Decode the escape sequences recognized inside double quotes. Unknown
/// sequences are preserved literally, backslash included.
fn decode_escapes(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, value: &str) -> ConfigEntry {
        ConfigEntry {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_parses_plain_assignment() {
        assert_eq!(parse_str("API_KEY=secret123"), vec![entry("API_KEY", "secret123")]);
    }

    #[test]
    fn test_skips_comments_and_blank_lines() {
        let content = "# leading comment\n\n   \n  # indented comment\nKEY=value\n";
        assert_eq!(parse_str(content), vec![entry("KEY", "value")]);
    }

    #[test]
    fn test_skips_line_without_equals() {
        let content = "NOTVALID\nKEY=value\n";
        assert_eq!(parse_str(content), vec![entry("KEY", "value")]);
    }

    #[test]
    fn test_skips_invalid_names() {
        // Leading digit, embedded space, and empty name are all rejected.
        let content = "1KEY=a\nSOME KEY=b\n=c\nOK_2=d\n";
        assert_eq!(parse_str(content), vec![entry("OK_2", "d")]);
    }

    #[test]
    fn test_trims_unquoted_value_and_name() {
        assert_eq!(parse_str("  KEY  =  value  "), vec![entry("KEY", "value")]);
    }

    #[test]
    fn test_value_keeps_text_after_first_equals() {
        assert_eq!(
            parse_str("URL=postgres://u:p@host/db?a=1"),
            vec![entry("URL", "postgres://u:p@host/db?a=1")]
        );
    }

    #[test]
    fn test_empty_value_is_allowed() {
        assert_eq!(parse_str("EMPTY="), vec![entry("EMPTY", "")]);
    }

    #[test]
    fn test_double_quotes_decode_escapes() {
        assert_eq!(
            parse_str(r#"FOO="a\nb""#),
            vec![entry("FOO", "a\nb")]
        );
        assert_eq!(
            parse_str(r#"BAR="tab\there \"quoted\" back\\slash""#),
            vec![entry("BAR", "tab\there \"quoted\" back\\slash")]
        );
    }

    #[test]
    fn test_single_quotes_stay_literal() {
        assert_eq!(parse_str(r"FOO='a\nb'"), vec![entry("FOO", r"a\nb")]);
    }

    #[test]
    fn test_quoted_value_preserves_inner_whitespace() {
        assert_eq!(
            parse_str("MSG=\"  spaced out  \""),
            vec![entry("MSG", "  spaced out  ")]
        );
    }

    #[test]
    fn test_unknown_escape_is_preserved() {
        assert_eq!(parse_str(r#"X="a\xb""#), vec![entry("X", r"a\xb")]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let content = "A=1\r\nB=2\r\n";
        assert_eq!(parse_str(content), vec![entry("A", "1"), entry("B", "2")]);
    }

    #[test]
    fn test_lone_quote_is_not_stripped() {
        // A single quote character is not a quoted value.
        assert_eq!(parse_str("Q=\""), vec![entry("Q", "\"")]);
    }

    #[test]
    fn test_mismatched_quotes_stay_literal() {
        assert_eq!(parse_str("Q=\"half"), vec![entry("Q", "\"half")]);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn parse_never_panics(content in ".*") {
                let _ = parse_str(&content);
            }

            #[test]
            fn well_formed_unquoted_lines_parse_exactly(
                name in "[A-Za-z_][A-Za-z0-9_]{0,15}",
                value in "[a-zA-Z0-9:/_.-]{0,20}",
            ) {
                let content = format!("{name}={value}");
                prop_assert_eq!(parse_str(&content), vec![entry(&name, &value)]);
            }
        }
    }
}

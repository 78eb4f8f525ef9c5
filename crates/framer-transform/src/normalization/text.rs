//! Text normalization.

use std::sync::LazyLock;

use regex::Regex;

static NEWLINE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\r\n]+").expect("valid newline pattern"));

/// Salesperson recorded when the legacy field is empty.
pub const DEFAULT_SALESPERSON: &str = "RS";

/// Uppercase and trim an identifier.
pub fn upper(value: Option<&str>) -> Option<String> {
    value.map(|raw| raw.to_uppercase().trim().to_string())
}

/// Fold line breaks and stray control bytes into `replacement`.
///
/// Each run of CR/LF and every vertical tab (0x0B) or DLE (0x10) byte is
/// replaced, then surrounding whitespace and backticks are stripped.
pub fn replace_newline(value: Option<&str>, replacement: &str) -> Option<String> {
    let raw = value?;
    let folded = NEWLINE_RUN
        .replace_all(raw, replacement)
        .replace(['\u{0b}', '\u{10}'], replacement);
    Some(folded.trim().trim_matches('`').to_string())
}

/// Map legacy salesperson initials onto current staff codes.
pub fn salesperson(value: Option<&str>) -> String {
    match value {
        None | Some("") => DEFAULT_SALESPERSON.to_string(),
        Some("SN") => "SB".to_string(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_newline_collapses_runs() {
        assert_eq!(
            replace_newline(Some("line one\r\n\r\nline two\u{0b}end`"), " ").as_deref(),
            Some("line one line two end")
        );
        assert_eq!(
            replace_newline(Some(" a\nb "), "\n").as_deref(),
            Some("a\nb")
        );
        assert_eq!(replace_newline(None, " "), None);
    }

    #[test]
    fn salesperson_defaults() {
        assert_eq!(salesperson(None), "RS");
        assert_eq!(salesperson(Some("")), "RS");
        assert_eq!(salesperson(Some("SN")), "SB");
        assert_eq!(salesperson(Some("JD")), "JD");
    }
}

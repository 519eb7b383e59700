//! Input sanitizing utilities

use std::sync::LazyLock;

use regex::Regex;

/// Characters that are not allowed in file names on common filesystems
static UNSAFE_FILE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[/\\:*?"<>|\x00-\x1f]"#).expect("valid file name pattern"));

/// Stem used when a title sanitizes to nothing
const FALLBACK_STEM: &str = "benchmark";

/// Sanitize string input (remove control characters, trim whitespace)
pub fn sanitize_string(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .trim()
        .to_string()
}

/// File stem for a study title.
///
/// Path separators and other reserved characters become `_`; spaces are kept.
pub fn file_stem_for(title: &str) -> String {
    let replaced = UNSAFE_FILE_CHARS.replace_all(title, "_");
    let stem = sanitize_string(&replaced);
    let stem = stem.trim_matches('.');

    if stem.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        stem.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_string() {
        assert_eq!(sanitize_string("  Sum\u{7}  "), "Sum");
        assert_eq!(sanitize_string("a\tb"), "ab");
    }

    #[test]
    fn test_file_stem_keeps_plain_titles() {
        assert_eq!(
            file_stem_for("Iterator Sum vs Fold Sum"),
            "Iterator Sum vs Fold Sum"
        );
    }

    #[test]
    fn test_file_stem_replaces_reserved_characters() {
        assert_eq!(file_stem_for("a/b\\c: d?"), "a_b_c_ d_");
        assert_eq!(file_stem_for("../etc/passwd"), "_etc_passwd");
    }

    #[test]
    fn test_file_stem_fallback() {
        assert_eq!(file_stem_for("   "), "benchmark");
        assert_eq!(file_stem_for(".."), "benchmark");
    }
}

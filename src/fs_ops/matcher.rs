//! Case-insensitive matching of candidate files.

use std::path::Path;

use regex::{Regex, RegexBuilder};

use crate::errors::GatherError;

/// Compiled, case-insensitive test against file base names.
///
/// The configured text is tried as a regular expression first; if it does not
/// compile it is demoted to an escaped literal, which gives plain substring
/// semantics for texts like `v2 [draft`.
#[derive(Debug, Clone)]
pub struct NamePattern {
    regex: Regex,
}

impl NamePattern {
    pub fn new(pattern: &str) -> Result<Self, GatherError> {
        let regex = match RegexBuilder::new(pattern).case_insensitive(true).build() {
            Ok(re) => re,
            Err(_) => RegexBuilder::new(&regex::escape(pattern))
                .case_insensitive(true)
                .build()
                .map_err(|e| GatherError::InvalidPattern {
                    pattern: pattern.to_string(),
                    reason: e.to_string(),
                })?,
        };
        Ok(Self { regex })
    }

    /// Unanchored search over the base name, like a substring test.
    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

/// Case-insensitive comparison of a path's extension with the configured one.
/// The configured extension carries no leading dot.
pub fn extension_matches(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn pattern_is_case_insensitive() {
        let pat = NamePattern::new("final").unwrap();
        assert!(pat.matches("report_FINAL.zip"));
        assert!(pat.matches("Final_cut.zip"));
        assert!(!pat.matches("draft.zip"));
    }

    #[test]
    fn pattern_accepts_regex_syntax() {
        let pat = NamePattern::new(r"report_\d+").unwrap();
        assert!(pat.matches("report_42.zip"));
        assert!(!pat.matches("report_x.zip"));
    }

    #[test]
    fn invalid_regex_falls_back_to_literal() {
        // An unclosed character class is not a valid regex.
        let pat = NamePattern::new("v2 [draft").unwrap();
        assert!(pat.matches("notes v2 [draft].txt"));
        assert!(!pat.matches("notes v2 draft.txt"));
    }

    #[test]
    fn extension_comparison_ignores_case() {
        let p = PathBuf::from("dir/file.ZIP");
        assert!(extension_matches(&p, "zip"));
        assert!(!extension_matches(&p, "txt"));
        assert!(!extension_matches(&PathBuf::from("dir/noext"), "zip"));
    }
}

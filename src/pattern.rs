//! Compiled pattern matchers.
//!
//! Patterns are classified once at registration time into a tagged matcher,
//! so emit never re-parses marker prefixes or recompiles wildcards.

use regex::Regex;

/// Marker introducing a prefix pattern in the marker-prefixed dialect.
pub(crate) const STARTS_WITH: &str = "starts-with:";
/// Marker introducing a suffix pattern in the marker-prefixed dialect.
pub(crate) const ENDS_WITH: &str = "ends-with:";
/// The literal catch-all pattern.
pub(crate) const CATCH_ALL: &str = "*";

/// A compiled non-exact pattern.
#[derive(Debug, Clone)]
pub(crate) enum Matcher {
    /// Matches event names starting with the literal remainder.
    Prefix(String),
    /// Matches event names ending with the literal remainder.
    Suffix(String),
    /// Anchored, case-insensitive glob matcher.
    Wildcard(Regex),
}

impl Matcher {
    /// Test whether `event` satisfies this pattern.
    pub(crate) fn matches(&self, event: &str) -> bool {
        match self {
            Matcher::Prefix(rest) => event.starts_with(rest),
            Matcher::Suffix(rest) => event.ends_with(rest),
            Matcher::Wildcard(re) => re.is_match(event),
        }
    }
}

/// Compile an inline-wildcard pattern into an anchored, case-insensitive
/// regex, each `*` standing for any sequence of zero or more characters.
///
/// Literal segments are escaped, so event-name metacharacters (`.`, `+`,
/// ...) only match themselves.
pub(crate) fn compile_wildcard(pattern: &str) -> Result<Regex, regex::Error> {
    let mut source = String::with_capacity(pattern.len() + 8);
    source.push_str("(?i)^");
    for (i, segment) in pattern.split('*').enumerate() {
        if i > 0 {
            source.push_str(".*");
        }
        source.push_str(&regex::escape(segment));
    }
    source.push('$');
    Regex::new(&source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_is_anchored() {
        let re = compile_wildcard("debug*").unwrap();
        assert!(re.is_match("debug"));
        assert!(re.is_match("debug-verbose"));
        assert!(!re.is_match("xdebug"));
    }

    #[test]
    fn wildcard_folds_case() {
        let re = compile_wildcard("debug*").unwrap();
        assert!(re.is_match("DEBUG-Verbose"));
    }

    #[test]
    fn wildcard_escapes_metacharacters() {
        let re = compile_wildcard("metrics.cpu*").unwrap();
        assert!(re.is_match("metrics.cpu-load"));
        assert!(!re.is_match("metricsXcpu"));
    }

    #[test]
    fn multiple_wildcards() {
        let re = compile_wildcard("a*b*c").unwrap();
        assert!(re.is_match("abc"));
        assert!(re.is_match("a-long-b-middle-c"));
        assert!(!re.is_match("ab"));
    }

    #[test]
    fn bare_star_matches_everything() {
        let re = compile_wildcard("*").unwrap();
        assert!(re.is_match(""));
        assert!(re.is_match("anything-at-all"));
    }

    #[test]
    fn prefix_and_suffix_are_literal_and_case_sensitive() {
        let prefix = Matcher::Prefix("debug".to_string());
        assert!(prefix.matches("debug"));
        assert!(prefix.matches("debug-verbose"));
        assert!(!prefix.matches("Debug-verbose"));
        assert!(!prefix.matches("production"));

        let suffix = Matcher::Suffix("verbose".to_string());
        assert!(suffix.matches("debug-verbose"));
        assert!(!suffix.matches("debug"));
        assert!(!suffix.matches("debug-VERBOSE"));
    }

    #[test]
    fn empty_prefix_remainder_matches_all() {
        let prefix = Matcher::Prefix(String::new());
        assert!(prefix.matches("anything"));
    }
}

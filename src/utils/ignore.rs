//! Name and directory exclusion rules
//!
//! Two rule kinds share this module: regex patterns that drop struct names from
//! generation (`--exclude`), and directory base names that recursive mode never
//! descends into (`--skipdir`). Both come from comma-separated flag values.

use crate::error::{Error, Result};
use regex::Regex;
use std::collections::BTreeSet;
use tracing::debug;

/// Ordered, OR'd set of struct-name exclusion patterns
///
/// Patterns are unanchored: `Struct2` excludes `MyStruct2` because the regex
/// finds a match anywhere in the name. Anchor explicitly (`^Foo$`) for exact names.
#[derive(Debug, Clone, Default)]
pub struct ExclusionRuleSet {
    patterns: Vec<Regex>,
}

impl ExclusionRuleSet {
    /// Compile a comma-separated pattern list
    ///
    /// Empty segments are ignored, so `""` and `"foo,"` never produce a
    /// match-everything empty pattern.
    pub fn compile(raw: &str) -> Result<Self> {
        let mut patterns = Vec::new();
        for pattern in raw.split(',').filter(|p| !p.is_empty()) {
            let re = Regex::new(pattern).map_err(|e| {
                Error::config(format!("invalid exclude pattern '{}': {}", pattern, e))
            })?;
            patterns.push(re);
        }

        if !patterns.is_empty() {
            debug!("Compiled {} exclude patterns", patterns.len());
        }

        Ok(Self { patterns })
    }

    /// Return the first pattern that matches any substring of `name`
    pub fn matching_pattern(&self, name: &str) -> Option<&str> {
        self.patterns
            .iter()
            .find(|re| re.is_match(name))
            .map(|re| re.as_str())
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.matching_pattern(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Directory base names pruned from a recursive walk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PruneSet {
    names: BTreeSet<String>,
}

impl PruneSet {
    /// Parse a comma-separated directory list, trimming whitespace and dropping empty names
    pub fn parse(raw: &str) -> Self {
        let names = raw
            .split(',')
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .map(|name| name.to_string())
            .collect();
        Self { names }
    }

    /// Directory base names match exactly; `vendor` does not prune `vendored`
    pub fn contains(&self, dir_name: &str) -> bool {
        self.names.contains(dir_name)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_single_and_multiple_patterns() {
        assert_eq!(ExclusionRuleSet::compile("foo").unwrap().len(), 1);
        assert_eq!(ExclusionRuleSet::compile("foo,bar").unwrap().len(), 2);
        assert_eq!(
            ExclusionRuleSet::compile(r"^foo$,\d+").unwrap().len(),
            2,
            "Anchors and character classes should compile"
        );
    }

    #[test]
    fn test_compile_empty_input_yields_no_patterns() {
        let rules = ExclusionRuleSet::compile("").unwrap();
        assert!(rules.is_empty());
        assert!(!rules.is_excluded("Anything"));
    }

    #[test]
    fn test_compile_skips_empty_segments() {
        let rules = ExclusionRuleSet::compile("foo,,").unwrap();
        assert_eq!(rules.len(), 1);
        assert!(
            !rules.is_excluded("Bar"),
            "A trailing comma must not add a match-everything pattern"
        );
    }

    #[test]
    fn test_compile_keeps_whitespace_pattern() {
        let rules = ExclusionRuleSet::compile(" ").unwrap();
        assert_eq!(rules.len(), 1);
        assert!(!rules.is_excluded("NoSpaces"));
    }

    #[test]
    fn test_compile_invalid_pattern_is_config_error() {
        let err = ExclusionRuleSet::compile("foo,(").unwrap_err();
        assert!(matches!(err, Error::Config(_)), "got {:?}", err);
        assert!(err.to_string().contains("'('"));
    }

    #[test]
    fn test_exclusion_is_unanchored_substring_match() {
        let rules = ExclusionRuleSet::compile("Struct2").unwrap();
        assert!(rules.is_excluded("MyStruct2"));
        assert!(!rules.is_excluded("MyStruct1"));
    }

    #[test]
    fn test_exclusion_patterns_are_or_combined() {
        let rules = ExclusionRuleSet::compile("foo,bar").unwrap();
        assert_eq!(rules.matching_pattern("xbarx"), Some("bar"));
        assert_eq!(rules.matching_pattern("foobar"), Some("foo"));
        assert_eq!(rules.matching_pattern("baz"), None);
    }

    #[test]
    fn test_dot_star_excludes_everything() {
        let rules = ExclusionRuleSet::compile(".*").unwrap();
        for name in ["A", "MyStruct", "x"] {
            assert!(rules.is_excluded(name), "{} should be excluded", name);
        }
    }

    #[test]
    fn test_anchored_pattern_only_matches_exact_name() {
        let rules = ExclusionRuleSet::compile("^Config$").unwrap();
        assert!(rules.is_excluded("Config"));
        assert!(!rules.is_excluded("ServerConfig"));
    }

    #[test]
    fn test_prune_set_parse() {
        let prune = PruneSet::parse("vendor, testdata,,");
        assert!(prune.contains("vendor"));
        assert!(prune.contains("testdata"), "Whitespace should be trimmed");
        assert!(!prune.contains(""));
        assert_eq!(prune.names().count(), 2);
    }

    #[test]
    fn test_prune_set_matches_whole_names_only() {
        let prune = PruneSet::parse("vendor");
        assert!(prune.contains("vendor"));
        assert!(!prune.contains("vendored"));
        assert!(!prune.contains("my-vendor"));
    }

    #[test]
    fn test_empty_prune_set() {
        let prune = PruneSet::parse("");
        assert!(prune.is_empty());
        assert!(!prune.contains("vendor"));
    }
}

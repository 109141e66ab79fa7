//! Name tokenization shared by grouping and rendering.
//!
//! Both passes derive group paths through [`GroupPath::of`]; a count lookup
//! in the second pass only hits if it produces the same keys the first pass
//! inserted.

use std::ops::Range;

use regex::Regex;

use crate::config::TreeConfig;
use crate::error::ConfigError;

/// Source form of the default split pattern.
pub const DEFAULT_SPLIT_PATTERN: &str = "_+";

/// Rule deciding where a name is cut into tokens.
///
/// A new token starts at every match of the pattern, so the delimiter stays
/// at the front of the token that follows it (`user__id` is `user`, `__id`).
/// Empty tokens are discarded.
#[derive(Debug, Clone, Default)]
pub enum SplitPattern {
    /// Cut before each run of one or more underscores.
    #[default]
    Underscores,
    /// Cut before each match of a regular expression.
    Regex(Regex),
}

impl SplitPattern {
    /// Compile a split pattern.
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        Regex::new(pattern)
            .map(Self::Regex)
            .map_err(|source| ConfigError::InvalidSplitPattern {
                pattern: pattern.to_string(),
                source,
            })
    }

    /// The pattern in regex syntax.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Underscores => DEFAULT_SPLIT_PATTERN,
            Self::Regex(regex) => regex.as_str(),
        }
    }

    /// Byte ranges of the non-empty tokens of `name`, in order.
    ///
    /// The ranges are contiguous and cover the whole name.
    pub fn token_spans(&self, name: &str) -> Vec<Range<usize>> {
        let cuts: Vec<usize> = match self {
            Self::Underscores => {
                let mut previous = None;
                name.char_indices()
                    .filter_map(|(index, ch)| {
                        let starts_run = ch == '_' && previous != Some('_');
                        previous = Some(ch);
                        starts_run.then_some(index)
                    })
                    .collect()
            }
            Self::Regex(regex) => regex.find_iter(name).map(|m| m.start()).collect(),
        };

        let mut spans = Vec::with_capacity(cuts.len() + 1);
        let mut start = 0;
        for cut in cuts {
            if cut > start {
                spans.push(start..cut);
                start = cut;
            }
        }
        if name.len() > start {
            spans.push(start..name.len());
        }
        spans
    }

    /// Split `name` into its non-empty tokens.
    pub fn tokenize<'a>(&self, name: &'a str) -> Vec<&'a str> {
        self.token_spans(name)
            .into_iter()
            .map(|span| &name[span])
            .collect()
    }
}

impl PartialEq for SplitPattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

/// An item's group path after skip merging and depth capping.
///
/// Segments borrow from the display name: merging adjacent tokens always
/// yields a substring of the name. There is always at least one segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupPath<'a> {
    segments: Vec<&'a str>,
}

impl<'a> GroupPath<'a> {
    /// Derive the group path of `name`.
    pub fn of(name: &'a str, config: &TreeConfig) -> Self {
        // Depth 1 never nests: the whole name is the only level.
        if config.depth() == 1 {
            return Self {
                segments: vec![name],
            };
        }

        let mut spans = config.split().token_spans(name);
        if spans.is_empty() {
            return Self {
                segments: vec![name],
            };
        }

        let merged = config.skip().saturating_add(1).min(spans.len());
        if merged > 1 {
            let head = spans[0].start..spans[merged - 1].end;
            spans.drain(1..merged);
            spans[0] = head;
        }

        let depth = config.depth();
        if depth > 0 && spans.len() > depth {
            let tail = spans[depth - 1].start..spans[spans.len() - 1].end;
            spans.truncate(depth - 1);
            spans.push(tail);
        }

        Self {
            segments: spans.into_iter().map(|span| &name[span]).collect(),
        }
    }

    /// Segments in their original case.
    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }

    /// First segment in its original case, used as a group label.
    pub fn first(&self) -> &'a str {
        self.segments[0]
    }

    /// Lower-cased first segment, the key of the top-level group.
    pub fn first_key(&self) -> String {
        self.first().to_lowercase()
    }

    /// Lower-cased segments, the keys used in the group trie.
    pub fn keys(&self) -> impl Iterator<Item = String> + '_ {
        self.segments.iter().map(|segment| segment.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path<'a>(name: &'a str, config: &TreeConfig) -> Vec<&'a str> {
        GroupPath::of(name, config).segments().to_vec()
    }

    #[test]
    fn test_underscore_runs_start_tokens() {
        let split = SplitPattern::Underscores;
        assert_eq!(split.tokenize("user_id"), vec!["user", "_id"]);
        assert_eq!(split.tokenize("user__id"), vec!["user", "__id"]);
        assert_eq!(split.tokenize("_private_x"), vec!["_private", "_x"]);
        assert_eq!(split.tokenize("trailing_"), vec!["trailing", "_"]);
        assert_eq!(split.tokenize("plain"), vec!["plain"]);
        assert!(split.tokenize("").is_empty());
    }

    #[test]
    fn test_regex_matches_underscore_default() {
        let regex = SplitPattern::new("_+").unwrap();
        for name in ["user_id", "a__b___c", "_x_", "none", "", "ünï_cødé"] {
            assert_eq!(
                regex.tokenize(name),
                SplitPattern::Underscores.tokenize(name),
                "{name}"
            );
        }
        assert_eq!(regex, SplitPattern::Underscores);
    }

    #[test]
    fn test_custom_pattern() {
        let split = SplitPattern::new(r"\.").unwrap();
        assert_eq!(split.tokenize("sales.orders.2024"), vec!["sales", ".orders", ".2024"]);
    }

    #[test]
    fn test_invalid_pattern() {
        let err = SplitPattern::new("(").unwrap_err();
        assert!(err.to_string().contains("invalid split pattern"));
    }

    #[test]
    fn test_depth_cap_merges_tail() {
        let config = TreeConfig::new().with_depth(3);
        assert_eq!(path("a_b_c_d_e", &config), vec!["a", "_b", "_c_d_e"]);
        assert_eq!(path("a_b_c", &config), vec!["a", "_b", "_c"]);
    }

    #[test]
    fn test_unlimited_depth() {
        let config = TreeConfig::new().with_depth(0);
        assert_eq!(path("a_b_c_d", &config), vec!["a", "_b", "_c", "_d"]);
    }

    #[test]
    fn test_depth_one_keeps_whole_name() {
        let config = TreeConfig::new().with_depth(1).with_skip(2);
        assert_eq!(path("User_Name_X", &config), vec!["User_Name_X"]);
    }

    #[test]
    fn test_skip_merges_leading_tokens() {
        let config = TreeConfig::new().with_depth(0).with_skip(1);
        assert_eq!(path("a_b_one", &config), vec!["a_b", "_one"]);

        let config = TreeConfig::new().with_depth(0).with_skip(5);
        assert_eq!(path("a_b_one", &config), vec!["a_b_one"]);
    }

    #[test]
    fn test_huge_skip_merges_everything() {
        let config = TreeConfig::new().with_depth(0).with_skip(usize::MAX);
        assert_eq!(path("a_b_c", &config), vec!["a_b_c"]);
    }

    #[test]
    fn test_skip_then_depth() {
        let config = TreeConfig::new().with_depth(2).with_skip(1);
        assert_eq!(path("a_b_c_d", &config), vec!["a_b", "_c_d"]);
    }

    #[test]
    fn test_empty_name_is_single_segment() {
        let path = GroupPath::of("", &TreeConfig::default());
        assert_eq!(path.segments(), &[""]);
        assert_eq!(path.first_key(), "");
    }

    #[test]
    fn test_keys_are_lowercase() {
        let path = GroupPath::of("User_Email", &TreeConfig::default());
        assert_eq!(path.first(), "User");
        assert_eq!(path.keys().collect::<Vec<_>>(), vec!["user", "_email"]);
    }
}

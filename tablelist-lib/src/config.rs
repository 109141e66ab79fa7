//! Grouping configuration

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::split::SplitPattern;

/// Default minimum size above which a group collapses.
pub const DEFAULT_THRESHOLD: usize = 5;

/// Smallest accepted threshold; lower values are raised to it.
pub const MIN_THRESHOLD: usize = 2;

/// Default number of distinct grouping levels.
pub const DEFAULT_DEPTH: usize = 3;

/// Configuration for grouping and rendering the table list.
///
/// Out-of-range values are clamped, never rejected.
///
/// # Example
///
/// ```
/// use tablelist_lib::TreeConfig;
///
/// let config = TreeConfig::default()
///     .with_threshold(1)
///     .with_depth(0)
///     .with_skip(1);
///
/// assert_eq!(config.threshold(), 2);
/// assert_eq!(config.depth(), 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TreeConfig {
    /// A group collapses when it holds more than this many items.
    ///
    /// Default: 5, minimum 2
    threshold: usize,

    /// Number of distinct levels; deeper tokens merge into the last level.
    /// `0` is unlimited, `1` disables grouping.
    ///
    /// Default: 3
    depth: usize,

    /// Leading token levels merged into the first one.
    ///
    /// Default: 0
    skip: usize,

    /// Where names are cut into tokens.
    ///
    /// Default: before each run of underscores
    split: SplitPattern,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            depth: DEFAULT_DEPTH,
            skip: 0,
            split: SplitPattern::default(),
        }
    }
}

impl TreeConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a config from its serialized form, clamping numbers and
    /// compiling the split pattern.
    pub fn from_raw(raw: RawTreeConfig) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(threshold) = raw.threshold {
            config = config.with_threshold(clamp_non_negative(threshold));
        }
        if let Some(depth) = raw.depth {
            config = config.with_depth(clamp_non_negative(depth));
        }
        if let Some(skip) = raw.skip {
            config = config.with_skip(clamp_non_negative(skip));
        }
        if let Some(pattern) = raw.split.as_deref() {
            config = config.with_split_pattern(pattern)?;
        }
        Ok(config)
    }

    /// Sets the threshold, raising it to [`MIN_THRESHOLD`] if needed.
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold.max(MIN_THRESHOLD);
        self
    }

    /// Sets the depth.
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Sets the number of skipped levels.
    pub fn with_skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }

    /// Sets the split pattern.
    pub fn with_split(mut self, split: SplitPattern) -> Self {
        self.split = split;
        self
    }

    /// Compiles and sets a split pattern.
    pub fn with_split_pattern(self, pattern: &str) -> Result<Self, ConfigError> {
        Ok(self.with_split(SplitPattern::new(pattern)?))
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn skip(&self) -> usize {
        self.skip
    }

    pub fn split(&self) -> &SplitPattern {
        &self.split
    }

    /// Serialized form of this config.
    pub fn to_raw(&self) -> RawTreeConfig {
        RawTreeConfig {
            threshold: i64::try_from(self.threshold).ok(),
            depth: i64::try_from(self.depth).ok(),
            skip: i64::try_from(self.skip).ok(),
            split: Some(self.split.as_str().to_string()),
        }
    }
}

/// Serialized form of [`TreeConfig`], as read from a host's settings.
///
/// Every field is optional; signed numbers let negative values through so
/// they can be clamped instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawTreeConfig {
    pub threshold: Option<i64>,
    pub depth: Option<i64>,
    pub skip: Option<i64>,
    pub split: Option<String>,
}

fn clamp_non_negative(value: i64) -> usize {
    usize::try_from(value.max(0)).unwrap_or(usize::MAX)
}

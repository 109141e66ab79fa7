//! Configuration errors.

use thiserror::Error;

/// Errors raised while building a [`TreeConfig`](crate::TreeConfig).
///
/// Numeric settings are clamped rather than rejected, so the only failure is
/// a split pattern that does not compile.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid split pattern {pattern:?}: {source}")]
    InvalidSplitPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

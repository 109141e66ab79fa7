//! State backend trait.

use crate::error::StateError;

/// Backend trait for group state storage.
///
/// Implementations handle raw byte storage/retrieval.
/// The `GroupStateProvider` wraps this with the JSON group map.
pub trait StateBackend: Send + Sync {
    /// Get raw bytes for a key.
    fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, StateError>;

    /// Set raw bytes for a key.
    fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), StateError>;

    /// Delete a key.
    fn delete(&self, key: &str) -> Result<(), StateError>;
}

//! Remembered open/closed state of groups.
//!
//! All groups of all scopes live in one JSON object stored under
//! `"<tool>_groups"`, mapping `"<scope>.<group>"` to `true` (open) or
//! `false` (closed). A missing or unreadable object means every group is
//! closed.

mod backend;
mod memory;
mod sqlite;

pub use backend::StateBackend;
pub use memory::MemoryBackend;
pub use sqlite::SqliteBackend;

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::StateError;

/// Tool name used for the storage key unless another is set.
pub const DEFAULT_TOOL_NAME: &str = "tablelist";

/// Read and write access to group state, keyed by scope and group key.
///
/// The renderer only reads; toggles write.
pub trait GroupStateStore {
    /// Stored state of a group, `None` if it was never stored.
    fn read_state(&self, scope: &str, group: &str) -> Option<bool>;

    /// Store the state of a group.
    fn write_state(&self, scope: &str, group: &str, open: bool) -> Result<(), StateError>;
}

/// Composite key of a group, `"<scope>.<group>"`.
///
/// Scopes must not contain `.`; the key is split at the first dot when
/// listing a scope's groups. Group keys may contain dots.
pub fn state_key(scope: &str, group: &str) -> String {
    format!("{scope}.{group}")
}

/// Snapshot of all stored group states.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupStates {
    groups: BTreeMap<String, bool>,
}

impl GroupStates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, scope: &str, group: &str) -> Option<bool> {
        self.groups.get(&state_key(scope, group)).copied()
    }

    pub fn set(&mut self, scope: &str, group: &str, open: bool) {
        self.groups.insert(state_key(scope, group), open);
    }

    /// Keys of the groups of `scope` stored as open.
    ///
    /// The scope part of a key is everything before its first `.`.
    pub fn open_groups(&self, scope: &str) -> Vec<String> {
        self.groups
            .iter()
            .filter(|(_, open)| **open)
            .filter_map(|(key, _)| key.split_once('.'))
            .filter(|(key_scope, _)| *key_scope == scope)
            .map(|(_, group)| group.to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Group state store on top of a raw [`StateBackend`].
///
/// # Example
///
/// ```
/// use tablelist_lib::state::{GroupStateProvider, GroupStateStore, MemoryBackend};
///
/// let states = GroupStateProvider::new(MemoryBackend::new());
/// states.write_state("shop", "user", true).unwrap();
/// assert_eq!(states.read_state("shop", "user"), Some(true));
/// assert_eq!(states.read_state("shop", "order"), None);
/// ```
#[derive(Clone)]
pub struct GroupStateProvider {
    backend: Arc<dyn StateBackend>,
    storage_key: String,
}

impl GroupStateProvider {
    /// Create a provider storing under `"tablelist_groups"`.
    pub fn new(backend: impl StateBackend + 'static) -> Self {
        Self::from_arc(Arc::new(backend))
    }

    /// Create a provider sharing an existing backend.
    pub fn from_arc(backend: Arc<dyn StateBackend>) -> Self {
        Self {
            backend,
            storage_key: storage_key(DEFAULT_TOOL_NAME),
        }
    }

    /// Store under `"<tool>_groups"` instead.
    pub fn with_tool_name(mut self, tool: &str) -> Self {
        self.storage_key = storage_key(tool);
        self
    }

    /// Backend key holding the JSON object.
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Load all group states.
    ///
    /// Backend failures and corrupt data yield an empty snapshot.
    pub fn load(&self) -> GroupStates {
        self.try_load().unwrap_or_else(|e| {
            log::warn!("failed to read {}: {}", self.storage_key, e);
            GroupStates::new()
        })
    }

    /// Load all group states, failing only if the backend does.
    ///
    /// Corrupt data still yields an empty snapshot. Writes go through this
    /// so a failed read never overwrites the stored object.
    pub fn try_load(&self) -> Result<GroupStates, StateError> {
        let Some(bytes) = self.backend.get_bytes(&self.storage_key)? else {
            return Ok(GroupStates::new());
        };

        Ok(serde_json::from_slice(&bytes).unwrap_or_else(|e| {
            log::warn!("discarding corrupt {}: {}", self.storage_key, e);
            GroupStates::new()
        }))
    }

    /// Replace all group states.
    pub fn save(&self, states: &GroupStates) -> Result<(), StateError> {
        let bytes = serde_json::to_vec(states)?;
        self.backend.set_bytes(&self.storage_key, bytes)
    }

    /// Forget all group states.
    pub fn clear(&self) -> Result<(), StateError> {
        self.backend.delete(&self.storage_key)
    }

    /// Mark a group open. Returns `true` if the stored state changed.
    pub fn open(&self, scope: &str, group: &str) -> Result<bool, StateError> {
        self.set_if_changed(scope, group, true)
    }

    /// Mark a group closed. Returns `true` if the stored state changed.
    pub fn close(&self, scope: &str, group: &str) -> Result<bool, StateError> {
        self.set_if_changed(scope, group, false)
    }

    /// Flip a group and return its new state. Unknown groups open.
    pub fn toggle(&self, scope: &str, group: &str) -> Result<bool, StateError> {
        let open = !self.try_load()?.get(scope, group).unwrap_or(false);
        self.write_state(scope, group, open)?;
        Ok(open)
    }

    /// Groups of `scope` to open on initial load.
    pub fn open_groups(&self, scope: &str) -> Vec<String> {
        self.load().open_groups(scope)
    }

    fn set_if_changed(&self, scope: &str, group: &str, open: bool) -> Result<bool, StateError> {
        if self.try_load()?.get(scope, group).unwrap_or(false) == open {
            return Ok(false);
        }
        self.write_state(scope, group, open)?;
        Ok(true)
    }
}

impl GroupStateStore for GroupStateProvider {
    fn read_state(&self, scope: &str, group: &str) -> Option<bool> {
        self.load().get(scope, group)
    }

    fn write_state(&self, scope: &str, group: &str, open: bool) -> Result<(), StateError> {
        if scope.contains('.') {
            return Err(StateError::InvalidScope(scope.to_string()));
        }
        let mut states = self.try_load()?;
        states.set(scope, group, open);
        self.save(&states)?;

        log::trace!("stored {} = {}", state_key(scope, group), open);
        Ok(())
    }
}

fn storage_key(tool: &str) -> String {
    format!("{tool}_groups")
}

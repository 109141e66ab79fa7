use crate::config::TreeConfig;
use crate::group::{GroupBuilder, GroupNode};
use crate::model::ListItem;
use crate::split::GroupPath;
use crate::state::GroupStateStore;

use super::{GroupHeader, RenderEvent};

/// Walks the items a second time and decides, per item, between a leaf and
/// a collapsible group.
///
/// A group collapses when the aggregate count of its top-level key is above
/// the threshold. Its body is the next `count` items starting at the current
/// one, so items of a group must be contiguous in the input. Bodies are one
/// level deep; deeper levels of the trie are not expanded.
pub struct TreeRenderer<'a> {
    config: &'a TreeConfig,
    scope: &'a str,
    states: Option<&'a dyn GroupStateStore>,
}

impl<'a> TreeRenderer<'a> {
    /// Create a renderer for the items of `scope` (usually the database name).
    pub fn new(config: &'a TreeConfig, scope: &'a str) -> Self {
        Self {
            config,
            scope,
            states: None,
        }
    }

    /// Read initial open/closed state from `states`.
    pub fn with_states(mut self, states: &'a dyn GroupStateStore) -> Self {
        self.states = Some(states);
        self
    }

    /// Render `items` against the trie `groups` built from the same items.
    pub fn render<'i, T: ListItem>(
        &self,
        items: &'i [T],
        groups: &GroupNode,
    ) -> Vec<RenderEvent<'i, T>> {
        let threshold = self.config.threshold();
        let mut events = Vec::new();
        // Items still to skip because the last body already holds them.
        let mut pending = 0usize;

        for (index, item) in items.iter().enumerate() {
            if pending > 0 {
                pending -= 1;
                continue;
            }

            let path = GroupPath::of(item.display_name(), self.config);
            let key = path.first_key();
            let count = groups.count_of(&key);
            if count <= threshold {
                events.push(RenderEvent::Leaf(item));
                continue;
            }

            let end = (index + count).min(items.len());
            let body: Vec<&T> = items[index..end].iter().collect();
            pending = body.len() - 1;

            log::trace!("group {key:?} collapses {count} items");
            events.push(RenderEvent::GroupHeader(GroupHeader {
                id: format!("{}.{}", self.scope, key),
                label: path.first().to_string(),
                open: self.is_open(&key),
                key,
                count,
            }));
            events.push(RenderEvent::GroupBody(body));
        }

        events
    }

    fn is_open(&self, key: &str) -> bool {
        self.states
            .and_then(|states| states.read_state(self.scope, key))
            .unwrap_or(false)
    }
}

/// Build the group trie for `items` and render them in one call.
pub fn render_tree<'i, T: ListItem>(
    items: &'i [T],
    config: &TreeConfig,
    scope: &str,
    states: Option<&dyn GroupStateStore>,
) -> Vec<RenderEvent<'i, T>> {
    let groups = GroupBuilder::new(config).build(items);
    let mut renderer = TreeRenderer::new(config, scope);
    if let Some(states) = states {
        renderer = renderer.with_states(states);
    }
    let events = renderer.render(items, &groups);

    log::debug!(
        "rendered {} items of {scope:?} as {} events",
        items.len(),
        events.len()
    );
    events
}

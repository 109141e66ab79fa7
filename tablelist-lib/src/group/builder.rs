use crate::config::TreeConfig;
use crate::model::ListItem;
use crate::split::GroupPath;

use super::GroupNode;

/// Builds the group trie for an ordered list of items.
///
/// Construction never fails; a name with no delimiter is a single-segment
/// group at the root.
#[derive(Debug, Clone, Copy)]
pub struct GroupBuilder<'c> {
    config: &'c TreeConfig,
}

impl<'c> GroupBuilder<'c> {
    pub fn new(config: &'c TreeConfig) -> Self {
        Self { config }
    }

    /// Build a fresh trie from `items`.
    pub fn build<T: ListItem>(&self, items: &[T]) -> GroupNode {
        let mut root = GroupNode::new();
        for item in items {
            let name = item.display_name();
            if self.config.depth() == 1 {
                root.insert([name.to_lowercase()]);
            } else {
                root.insert(GroupPath::of(name, self.config).keys());
            }
        }

        log::debug!(
            "grouped {} items into {} top-level groups",
            items.len(),
            root.children().count()
        );
        root
    }
}

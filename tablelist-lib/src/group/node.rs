use std::collections::BTreeMap;

/// A node in the group trie.
///
/// Children are keyed by lower-cased group path segment. `members` counts
/// the items whose path ends exactly here; `count` is the aggregate over the
/// whole subtree and is kept up to date on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupNode {
    children: BTreeMap<String, GroupNode>,
    members: usize,
    count: usize,
}

/// One group in a depth-first listing of the trie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSummary {
    /// Keys from the root down to this group.
    pub path: Vec<String>,
    /// Items ending exactly at this group.
    pub members: usize,
    /// Items in this group and all its subgroups.
    pub count: usize,
}

impl GroupNode {
    /// Create an empty root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one item under `path`, creating nodes as needed.
    ///
    /// An empty path counts the item on this node itself.
    pub fn insert<I>(&mut self, path: I)
    where
        I: IntoIterator<Item = String>,
    {
        let mut node = self;
        node.count += 1;
        for segment in path {
            node = node.children.entry(segment).or_default();
            node.count += 1;
        }
        node.members += 1;
    }

    /// Child group by key.
    pub fn child(&self, key: &str) -> Option<&GroupNode> {
        self.children.get(key)
    }

    /// Descendant group by key path.
    pub fn find<'k>(&self, path: impl IntoIterator<Item = &'k str>) -> Option<&GroupNode> {
        path.into_iter()
            .try_fold(self, |node, segment| node.child(segment))
    }

    /// Children in key order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &GroupNode)> {
        self.children.iter().map(|(key, node)| (key.as_str(), node))
    }

    /// Items ending exactly at this node.
    pub fn members(&self) -> usize {
        self.members
    }

    /// Items in this subtree.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Aggregate count of the child `key`, or 0 if there is no such group.
    pub fn count_of(&self, key: &str) -> usize {
        self.child(key).map_or(0, GroupNode::count)
    }

    /// Check if this node has subgroups.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Check if nothing was inserted.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Every group below this node, depth-first in key order.
    pub fn groups(&self) -> Vec<GroupSummary> {
        fn collect(node: &GroupNode, path: &mut Vec<String>, out: &mut Vec<GroupSummary>) {
            for (key, child) in &node.children {
                path.push(key.clone());
                out.push(GroupSummary {
                    path: path.clone(),
                    members: child.members,
                    count: child.count,
                });
                collect(child, path, out);
                path.pop();
            }
        }

        let mut out = Vec::new();
        collect(self, &mut Vec::new(), &mut out);
        out
    }
}

use super::{GroupHeader, RenderEvent};

/// Host callback producing the per-item output (links, markup, widgets).
///
/// Implemented for closures, so `|item: &TableItem| item.name.clone()` is a
/// valid `ItemActions<TableItem>`.
pub trait ItemActions<T> {
    type Output;

    fn render_item_actions(&self, item: &T) -> Self::Output;
}

impl<T, O, F> ItemActions<T> for F
where
    F: Fn(&T) -> O,
{
    type Output = O;

    fn render_item_actions(&self, item: &T) -> O {
        self(item)
    }
}

/// A rendered top-level entry.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeEntry<O> {
    Leaf(O),
    Group { header: GroupHeader, members: Vec<O> },
}

/// Render events folded into nested entries, with host output per item.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeView<O> {
    entries: Vec<TreeEntry<O>>,
}

impl<O> TreeView<O> {
    /// Fold `events`, calling `actions` once per item.
    pub fn from_events<'i, T, A>(
        events: impl IntoIterator<Item = RenderEvent<'i, T>>,
        actions: &A,
    ) -> Self
    where
        T: 'i,
        A: ItemActions<T, Output = O>,
    {
        let mut entries = Vec::new();
        let mut header: Option<GroupHeader> = None;

        for event in events {
            match event {
                RenderEvent::Leaf(item) => {
                    entries.push(TreeEntry::Leaf(actions.render_item_actions(item)));
                }
                RenderEvent::GroupHeader(next) => {
                    header = Some(next);
                }
                RenderEvent::GroupBody(members) => {
                    let members = members
                        .into_iter()
                        .map(|item| actions.render_item_actions(item));
                    match header.take() {
                        Some(header) => entries.push(TreeEntry::Group {
                            header,
                            members: members.collect(),
                        }),
                        None => entries.extend(members.map(TreeEntry::Leaf)),
                    }
                }
            }
        }

        Self { entries }
    }

    pub fn entries(&self) -> &[TreeEntry<O>] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<TreeEntry<O>> {
        self.entries
    }

    /// Group headers in display order.
    pub fn headers(&self) -> impl Iterator<Item = &GroupHeader> {
        self.entries.iter().filter_map(|entry| match entry {
            TreeEntry::Group { header, .. } => Some(header),
            TreeEntry::Leaf(_) => None,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

use serde::Serialize;

/// Prefix of the element identifier a host gives a group toggle.
pub const ELEMENT_ID_PREFIX: &str = "tablelist";

/// Header of a collapsible group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupHeader {
    /// `"<scope>.<key>"`, also the persisted state key.
    pub id: String,
    /// Lower-cased first group path segment.
    pub key: String,
    /// First group path segment in its original case.
    pub label: String,
    /// Number of items in the group.
    pub count: usize,
    /// Whether the group was left open.
    pub open: bool,
}

impl GroupHeader {
    /// Identifier of the toggle element, `"tablelist.<scope>.<key>"`.
    pub fn element_id(&self) -> String {
        format!("{}.{}", ELEMENT_ID_PREFIX, self.id)
    }
}

/// One step of the rendered list.
///
/// A [`GroupHeader`](RenderEvent::GroupHeader) is always followed by the
/// [`GroupBody`](RenderEvent::GroupBody) holding its members.
#[derive(Debug, PartialEq)]
pub enum RenderEvent<'a, T> {
    /// An item shown on its own.
    Leaf(&'a T),
    /// Start of a collapsible group.
    GroupHeader(GroupHeader),
    /// Members of the group announced by the preceding header.
    GroupBody(Vec<&'a T>),
}

impl<'a, T> RenderEvent<'a, T> {
    pub fn as_leaf(&self) -> Option<&'a T> {
        match self {
            Self::Leaf(item) => Some(*item),
            _ => None,
        }
    }

    pub fn as_header(&self) -> Option<&GroupHeader> {
        match self {
            Self::GroupHeader(header) => Some(header),
            _ => None,
        }
    }

    pub fn as_body(&self) -> Option<&[&'a T]> {
        match self {
            Self::GroupBody(members) => Some(members.as_slice()),
            _ => None,
        }
    }
}

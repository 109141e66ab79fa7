use serde::{Deserialize, Serialize};

/// Trait for items that can be grouped and rendered in the table list.
///
/// [`TableItem`] implements it; hosts with their own table status rows can
/// implement it directly instead of converting.
///
/// # Example
///
/// ```
/// use tablelist_lib::ListItem;
///
/// struct Row {
///     name: String,
/// }
///
/// impl ListItem for Row {
///     fn key(&self) -> &str {
///         &self.name
///     }
///
///     fn display_name(&self) -> &str {
///         &self.name
///     }
/// }
/// ```
pub trait ListItem {
    /// Stable identifier used by the host for links.
    fn key(&self) -> &str;

    /// Name the grouping is derived from.
    fn display_name(&self) -> &str;

    /// Whether this item is a view rather than a table.
    fn is_view(&self) -> bool {
        false
    }
}

/// Kind of database object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    #[default]
    Table,
    View,
}

/// A table or view as listed by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableItem {
    /// Opaque identifier (usually the raw table name).
    pub key: String,
    /// Display name.
    pub name: String,
    #[serde(default)]
    pub kind: TableKind,
    #[serde(default)]
    pub comment: String,
}

impl TableItem {
    /// Create a table whose key and display name are both `name`.
    pub fn table(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            key: name.clone(),
            name,
            kind: TableKind::Table,
            comment: String::new(),
        }
    }

    /// Create a view whose key and display name are both `name`.
    pub fn view(name: impl Into<String>) -> Self {
        Self {
            kind: TableKind::View,
            ..Self::table(name)
        }
    }

    /// Set the key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Set the comment.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}

impl ListItem for TableItem {
    fn key(&self) -> &str {
        &self.key
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn is_view(&self) -> bool {
        self.kind == TableKind::View
    }
}

impl<T: ListItem + ?Sized> ListItem for &T {
    fn key(&self) -> &str {
        (**self).key()
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }

    fn is_view(&self) -> bool {
        (**self).is_view()
    }
}

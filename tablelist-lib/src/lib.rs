//! Prefix-grouped table list
//!
//! Groups an ordered list of table names into collapsible groups based on
//! shared name prefixes, and remembers which groups were left open.

pub mod config;
pub mod error;
pub mod group;
pub mod model;
pub mod render;
pub mod split;
pub mod state;

pub use config::*;
pub use group::{GroupBuilder, GroupNode};
pub use model::{ListItem, TableItem, TableKind};
pub use render::{render_tree, RenderEvent, TreeRenderer};

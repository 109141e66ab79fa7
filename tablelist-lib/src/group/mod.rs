//! Group trie built from item names.

mod builder;
mod node;

pub use builder::*;
pub use node::*;

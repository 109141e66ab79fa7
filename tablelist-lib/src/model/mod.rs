//! Items shown in the table list.

mod item;

pub use item::*;

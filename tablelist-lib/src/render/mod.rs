//! Second pass over the items: leaves and collapsible groups.

mod events;
mod renderer;
mod view;

pub use events::*;
pub use renderer::*;
pub use view::*;

//! Error types

mod config;
mod state;

pub use config::*;
pub use state::*;

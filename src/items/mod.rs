//! Item system: definitions, catalog, tier enhancement and generation.

pub mod catalog;
pub mod enhance;
pub mod generation;
pub mod types;

pub use catalog::*;
pub use enhance::*;
pub use generation::*;
pub use types::*;

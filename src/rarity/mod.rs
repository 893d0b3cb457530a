//! Rarity system: tier registry, weighted selection and tier upgrades.

pub mod selection;
pub mod types;
pub mod upgrade;

pub use selection::*;
pub use types::*;
pub use upgrade::*;

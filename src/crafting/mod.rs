//! Professions: gathering, crafting and craft quality.

pub mod data;
pub mod logic;
pub mod quality;
pub mod types;

pub use data::*;
pub use logic::*;
pub use quality::*;
pub use types::*;

//! Eternal Realms - reward and rarity engine
//!
//! Resolves what a gameplay event yields: which items drop from a monster or
//! a gathering tick, what quality a craft comes out at, and how tier
//! multipliers scale the result. Exposed for the game front end, tests and
//! the loot simulator.

pub mod combat;
pub mod core;
pub mod crafting;
pub mod items;
pub mod loot;
pub mod player;
pub mod rarity;
pub mod simulator;
pub mod stats;
pub mod utils;

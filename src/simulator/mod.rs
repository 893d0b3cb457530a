//! Loot simulator for Monte Carlo analysis.
//!
//! Run many simulated kills, gathers or crafts to measure:
//! - Drop and consolation rates
//! - Rarity distribution of recorded finds
//! - Gold and finder-reward pacing
//!
//! Each run uses a fresh profile and its own seeded RNG, and drives the same
//! resolvers the game uses.

mod config;
mod report;
mod runner;

pub use config::{SimConfig, SimMode};
pub use report::SimReport;
pub use runner::{run_simulation, RunStats, SimError};

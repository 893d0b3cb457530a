//! Lifetime rarity statistics and finder rewards.

pub mod persistence;
pub mod tracker;
pub mod types;

pub use persistence::{JsonStatsStore, MemoryStatsStore, StatsStore, STATS_FILENAME};
pub use tracker::*;
pub use types::*;

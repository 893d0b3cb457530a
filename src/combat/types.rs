use crate::loot::DropEntry;
use crate::rarity::TierId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterStats {
    pub max_hp: u32,
    pub attack: u32,
    #[serde(default)]
    pub defense: u32,
    #[serde(default)]
    pub speed: u32,
    /// Critical hit chance in percent.
    #[serde(default)]
    pub crit: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    pub id: String,
    pub name: String,
    pub level: u32,
    /// Monster tier; scales every drop chance by its multiplier.
    #[serde(default)]
    pub rarity: Option<TierId>,
    pub stats: MonsterStats,
    pub exp: u64,
    /// Inclusive gold range.
    pub gold: (u64, u64),
    #[serde(default)]
    pub drops: Vec<DropEntry>,
}

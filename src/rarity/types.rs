//! Rarity tiers and the static tier registry.

use crate::core::constants::LEVEL_TIER_THRESHOLDS;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rarity tier identifier. Declaration order is rank order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "String", into = "String")]
pub enum TierId {
    #[default]
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    Epic = 3,
    Legendary = 4,
    Mythic = 5,
    Divine = 6,
}

impl TierId {
    /// All tiers in rank order.
    pub const ALL: [TierId; 7] = [
        TierId::Common,
        TierId::Uncommon,
        TierId::Rare,
        TierId::Epic,
        TierId::Legendary,
        TierId::Mythic,
        TierId::Divine,
    ];

    /// Storage key for this tier ("common", "rare", ...).
    pub fn key(&self) -> &'static str {
        match self {
            TierId::Common => "common",
            TierId::Uncommon => "uncommon",
            TierId::Rare => "rare",
            TierId::Epic => "epic",
            TierId::Legendary => "legendary",
            TierId::Mythic => "mythic",
            TierId::Divine => "divine",
        }
    }

    /// Parse a storage key. Unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<TierId> {
        TierId::ALL.iter().copied().find(|t| t.key() == key)
    }

    pub fn rank(&self) -> usize {
        *self as usize
    }

    pub fn is_common(&self) -> bool {
        *self == TierId::Common
    }
}

impl fmt::Display for TierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// Deserialization fails closed: anything unrecognised is common.
impl From<String> for TierId {
    fn from(key: String) -> Self {
        TierId::from_key(&key).unwrap_or(TierId::Common)
    }
}

impl From<TierId> for String {
    fn from(id: TierId) -> Self {
        id.key().to_string()
    }
}

/// Static description of a rarity tier.
#[derive(Debug, Clone, PartialEq)]
pub struct Tier {
    pub id: TierId,
    pub name: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    /// Applied to item stats and value.
    pub multiplier: f64,
    /// Relative weight in global tier rolls. Not a percentage.
    pub drop_weight: f64,
}

pub const TIERS: [Tier; 7] = [
    Tier {
        id: TierId::Common,
        name: "Common",
        color: "#808080",
        icon: "fas fa-circle",
        description: "Basic quality items",
        multiplier: 1.0,
        drop_weight: 60.0,
    },
    Tier {
        id: TierId::Uncommon,
        name: "Uncommon",
        color: "#1eff00",
        icon: "fas fa-leaf",
        description: "Better than common items",
        multiplier: 1.3,
        drop_weight: 25.0,
    },
    Tier {
        id: TierId::Rare,
        name: "Rare",
        color: "#0070dd",
        icon: "fas fa-gem",
        description: "Powerful and valuable items",
        multiplier: 1.7,
        drop_weight: 10.0,
    },
    Tier {
        id: TierId::Epic,
        name: "Epic",
        color: "#a335ee",
        icon: "fas fa-fire",
        description: "Exceptionally powerful items",
        multiplier: 2.2,
        drop_weight: 4.0,
    },
    Tier {
        id: TierId::Legendary,
        name: "Legendary",
        color: "#ff8000",
        icon: "fas fa-crown",
        description: "Legendary artifacts of great power",
        multiplier: 3.0,
        drop_weight: 1.0,
    },
    Tier {
        id: TierId::Mythic,
        name: "Mythic",
        color: "#ff00ff",
        icon: "fas fa-star",
        description: "Mythical items of immense power",
        multiplier: 4.0,
        drop_weight: 0.1,
    },
    Tier {
        id: TierId::Divine,
        name: "Divine",
        color: "#00ffff",
        icon: "fas fa-globe",
        description: "Divine artifacts of godlike power",
        multiplier: 5.0,
        drop_weight: 0.01,
    },
];

pub fn get_tier(id: TierId) -> &'static Tier {
    &TIERS[id.rank()]
}

/// Look up a tier by storage key, falling back to common for unknown or missing keys.
pub fn tier_from_key(key: Option<&str>) -> &'static Tier {
    let id = key.and_then(TierId::from_key).unwrap_or(TierId::Common);
    get_tier(id)
}

pub fn all_tiers() -> &'static [Tier] {
    &TIERS
}

pub fn rank_of(id: TierId) -> usize {
    id.rank()
}

/// The tier one rank above, or `None` at the top.
pub fn next_tier(id: TierId) -> Option<TierId> {
    TierId::ALL.get(id.rank() + 1).copied()
}

/// The tier one rank below, or `None` at common.
pub fn previous_tier(id: TierId) -> Option<TierId> {
    id.rank().checked_sub(1).map(|r| TierId::ALL[r])
}

/// Highest tier whose level threshold is met.
pub fn tier_for_level(level: u32) -> TierId {
    let mut tier = TierId::Common;
    for (idx, threshold) in LEVEL_TIER_THRESHOLDS.iter().enumerate() {
        if level >= *threshold {
            tier = TierId::ALL[idx];
        } else {
            break;
        }
    }
    tier
}

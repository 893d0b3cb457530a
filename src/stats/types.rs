use crate::rarity::TierId;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Lifetime rarity statistics (saved to disk).
///
/// Missing fields load as their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RarityStatistics {
    pub total_drops: u64,
    pub highest_tier: TierId,
    #[serde(deserialize_with = "sum_tier_counts")]
    pub items_found: BTreeMap<TierId, u64>,
}

/// Per-tier counts keyed by tier key. Unknown keys fold into common and are
/// added to it rather than replacing it.
fn sum_tier_counts<'de, D>(deserializer: D) -> Result<BTreeMap<TierId, u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, u64>::deserialize(deserializer)?;
    let mut counts: BTreeMap<TierId, u64> = TierId::ALL.iter().map(|t| (*t, 0)).collect();
    for (key, count) in raw {
        let tier = TierId::from_key(&key).unwrap_or_else(|| {
            tracing::warn!(key = %key, "unknown tier in rarity stats, counted as common");
            TierId::Common
        });
        let slot = counts.entry(tier).or_insert(0);
        *slot = slot.saturating_add(count);
    }
    Ok(counts)
}

impl Default for RarityStatistics {
    fn default() -> Self {
        Self {
            total_drops: 0,
            highest_tier: TierId::Common,
            items_found: TierId::ALL.iter().map(|t| (*t, 0)).collect(),
        }
    }
}

impl RarityStatistics {
    pub fn count(&self, tier: TierId) -> u64 {
        self.items_found.get(&tier).copied().unwrap_or(0)
    }

    /// Share of all drops at `tier`, as a percentage (0.0 - 100.0).
    pub fn share_percent(&self, tier: TierId) -> f64 {
        if self.total_drops == 0 {
            return 0.0;
        }
        self.count(tier) as f64 / self.total_drops as f64 * 100.0
    }
}

/// Read-only snapshot for display.
#[derive(Debug, Clone, PartialEq)]
pub struct TierBreakdown {
    pub tier: TierId,
    pub count: u64,
    pub percentage: f64,
}

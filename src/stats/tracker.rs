//! Lifetime rarity tracking and first-find rewards.

use super::persistence::StatsStore;
use super::types::{RarityStatistics, TierBreakdown};
use crate::core::constants::FINDER_REWARDS;
use crate::player::PlayerState;
use crate::rarity::{get_tier, rank_of, TierId};

/// Reward granted the first time a tier above common is found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderReward {
    pub tier: TierId,
    pub gold: u64,
    pub experience: u64,
}

impl FinderReward {
    /// Feature-unlock key guarding this reward ("rare_finder", ...).
    pub fn unlock_key(tier: TierId) -> String {
        format!("{}_finder", tier.key())
    }

    pub fn for_tier(tier: TierId) -> Option<Self> {
        if tier.is_common() {
            return None;
        }
        let (gold, experience) = FINDER_REWARDS[tier.rank()];
        Some(Self {
            tier,
            gold,
            experience,
        })
    }

    pub fn messages(&self) -> Vec<String> {
        let mut messages = vec![format!(
            "Achievement: Found your first {} item!",
            get_tier(self.tier).name
        )];
        if self.gold > 0 {
            messages.push(format!("Reward: {} Gold", self.gold));
        }
        if self.experience > 0 {
            messages.push(format!("Reward: {} XP", self.experience));
        }
        messages
    }
}

#[derive(Debug, Clone, Default)]
pub struct RarityTracker {
    stats: RarityStatistics,
    dirty: bool,
}

impl RarityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_statistics(stats: RarityStatistics) -> Self {
        Self {
            stats,
            dirty: false,
        }
    }

    pub fn load(store: &dyn StatsStore) -> Self {
        Self::from_statistics(store.load_statistics())
    }

    /// Record one item found at `tier`.
    ///
    /// Returns the finder reward if this find raised the highest tier and the
    /// reward had not been claimed before.
    pub fn record_find(
        &mut self,
        tier: TierId,
        player: &mut dyn PlayerState,
    ) -> Option<FinderReward> {
        self.stats.total_drops += 1;
        *self.stats.items_found.entry(tier).or_insert(0) += 1;
        self.dirty = true;

        if rank_of(tier) <= rank_of(self.stats.highest_tier) {
            return None;
        }
        self.stats.highest_tier = tier;

        let reward = FinderReward::for_tier(tier)?;
        let key = FinderReward::unlock_key(tier);
        if player.is_feature_unlocked(&key) {
            return None;
        }
        player.unlock_feature(&key);
        if reward.gold > 0 {
            player.add_gold(reward.gold);
        }
        if reward.experience > 0 {
            player.grant_experience(reward.experience);
        }
        tracing::info!(
            tier = %tier,
            gold = reward.gold,
            xp = reward.experience,
            "finder reward unlocked"
        );
        Some(reward)
    }

    pub fn statistics(&self) -> &RarityStatistics {
        &self.stats
    }

    pub fn highest_tier(&self) -> TierId {
        self.stats.highest_tier
    }

    /// Per-tier counts and shares in rank order.
    pub fn breakdown(&self) -> Vec<TierBreakdown> {
        TierId::ALL
            .iter()
            .map(|&tier| TierBreakdown {
                tier,
                count: self.stats.count(tier),
                percentage: self.stats.share_percent(tier),
            })
            .collect()
    }

    /// True if finds were recorded since the last save.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn save(&mut self, store: &mut dyn StatsStore) {
        store.save_statistics(&self.stats);
        self.dirty = false;
    }
}

//! Drop table resolution shared by combat and gathering.

use crate::core::constants::{CONSOLATION_BASE_CHANCE, GATHERING_CHANCE_CAP};
use crate::core::GameSession;
use crate::items::{enhance, ItemDrop};
use crate::rarity::{get_tier, rank_of, roll_random_tier, TierId};
use crate::stats::FinderReward;
use rand::Rng;
use serde::{Deserialize, Serialize};

fn default_quantity() -> u32 {
    1
}

/// One independent roll in a drop table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropEntry {
    pub item_id: String,
    /// Base chance in percent (0-100).
    pub chance: f64,
    /// Fixed tier; rolled globally when absent.
    #[serde(default)]
    pub tier: Option<TierId>,
    #[serde(default = "default_quantity")]
    pub min_quantity: u32,
    #[serde(default = "default_quantity")]
    pub max_quantity: u32,
}

impl DropEntry {
    pub fn new(item_id: impl Into<String>, chance: f64) -> Self {
        Self {
            item_id: item_id.into(),
            chance,
            tier: None,
            min_quantity: 1,
            max_quantity: 1,
        }
    }

    pub fn with_tier(mut self, tier: TierId) -> Self {
        self.tier = Some(tier);
        self
    }

    pub fn with_quantity(mut self, min: u32, max: u32) -> Self {
        self.min_quantity = min;
        self.max_quantity = max;
        self
    }
}

/// Which call site is resolving a table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropSource {
    /// Monster defeat. Chances are scaled by the enemy's tier and never capped.
    Combat { enemy_tier: Option<TierId> },
    /// Gathering tick. Chances grow with skill and are capped at 95%.
    Gathering { skill_level: u32 },
}

/// Outcome of resolving one drop table.
#[derive(Debug, Clone, Default)]
pub struct DropResult {
    pub drops: Vec<ItemDrop>,
    /// Messages to display to the player
    pub messages: Vec<String>,
    /// True if the table came up empty and the bonus roll paid out.
    pub consolation: bool,
    pub finder_rewards: Vec<FinderReward>,
}

impl DropResult {
    pub fn is_empty(&self) -> bool {
        self.drops.is_empty()
    }
}

/// Percentage used for an entry's Bernoulli roll.
pub fn effective_chance(base_chance: f64, source: DropSource, modifier: f64) -> f64 {
    match source {
        DropSource::Combat { enemy_tier } => {
            let chance = base_chance + modifier;
            match enemy_tier {
                Some(tier) => chance * get_tier(tier).multiplier,
                None => chance,
            }
        }
        DropSource::Gathering { skill_level } => {
            let skill_bonus = skill_level as f64 - 1.0;
            (base_chance + skill_bonus + modifier).min(GATHERING_CHANCE_CAP)
        }
    }
}

/// Roll every entry of `table` independently and build the resulting drops.
///
/// Successful drops are recorded with the rarity tracker. The caller decides
/// what to do with the items (normally adding them to the inventory). If
/// nothing drops, a consolation roll at `30 + modifier` percent may grant one
/// random common item, which is not recorded.
pub fn resolve_drops<R: Rng>(
    session: &mut GameSession<'_, R>,
    table: &[DropEntry],
    source: DropSource,
) -> DropResult {
    let catalog = session.catalog;
    let modifier = session.modifier();
    let mut result = DropResult::default();

    for entry in table {
        let chance = effective_chance(entry.chance, source, modifier);
        if !session.chance(chance) {
            continue;
        }

        let Some(def) = catalog.item(&entry.item_id) else {
            tracing::warn!(item_id = %entry.item_id, "drop table references unknown item");
            continue;
        };

        let tier = match entry.tier {
            Some(tier) => tier,
            None => roll_random_tier(modifier, &mut *session.rng),
        };
        let item = enhance(def, tier);
        let quantity = session.random_int(entry.min_quantity, entry.max_quantity);

        tracing::debug!(item = %item.item_id, tier = %tier, quantity, chance, "drop");
        let tier_name = get_tier(tier).name;
        result.messages.push(match source {
            DropSource::Combat { .. } => format!("Obtained: {} ({})", item.name, tier_name),
            DropSource::Gathering { .. } => {
                format!("Found {}x {} ({})!", quantity, item.name, tier_name)
            }
        });
        if rank_of(tier) >= rank_of(TierId::Legendary) {
            result
                .messages
                .push(format!("A {} treasure shines: {}!", tier_name, item.name));
        }

        if let Some(reward) = session.record_find(tier) {
            result.messages.extend(reward.messages());
            result.finder_rewards.push(reward);
        }
        result.drops.push(ItemDrop { item, quantity });
    }

    if result.drops.is_empty() {
        roll_consolation(session, modifier, &mut result);
    }

    result
}

fn roll_consolation<R: Rng>(
    session: &mut GameSession<'_, R>,
    modifier: f64,
    result: &mut DropResult,
) {
    if !session.chance(CONSOLATION_BASE_CHANCE + modifier) {
        return;
    }
    let catalog = session.catalog;
    let pool = catalog.items_with_tier(TierId::Common);
    if pool.is_empty() {
        return;
    }
    let def = pool[session.random_index(pool.len())];
    let item = enhance(def, TierId::Common);
    result.messages.push(format!("Obtained: {}", item.name));
    result.drops.push(ItemDrop { item, quantity: 1 });
    result.consolation = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::Catalog;
    use crate::player::PlayerProfile;
    use crate::stats::RarityTracker;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// A generator whose every `gen::<f64>()` returns `roll`.
    fn constant_roll(roll: f64) -> StepRng {
        let bits = (roll * (1u64 << 53) as f64) as u64;
        StepRng::new(bits << 11, 0)
    }

    #[test]
    fn test_combat_chance_scaled_by_enemy_tier() {
        let chance = effective_chance(
            10.0,
            DropSource::Combat {
                enemy_tier: Some(TierId::Rare),
            },
            0.0,
        );
        assert!((chance - 17.0).abs() < 1e-9);

        let chance = effective_chance(10.0, DropSource::Combat { enemy_tier: None }, 0.5);
        assert!((chance - 10.5).abs() < 1e-9);
    }

    #[test]
    fn test_combat_chance_is_not_capped() {
        let chance = effective_chance(
            80.0,
            DropSource::Combat {
                enemy_tier: Some(TierId::Legendary),
            },
            0.0,
        );
        assert!((chance - 240.0).abs() < 1e-9);
    }

    #[test]
    fn test_gathering_chance_capped_at_95() {
        let source = DropSource::Gathering { skill_level: 1 };
        assert!((effective_chance(60.0, source, 0.01) - 60.01).abs() < 1e-9);

        let source = DropSource::Gathering { skill_level: 50 };
        assert_eq!(effective_chance(80.0, source, 3.0), 95.0);
        assert_eq!(effective_chance(100.0, source, 0.0), 95.0);
    }

    #[test]
    fn test_single_entry_success_at_common() {
        let catalog = Catalog::builtin();
        let mut player = PlayerProfile::default();
        let mut tracker = RarityTracker::new();
        let mut rng = constant_roll(0.29);
        let mut session = GameSession::new(&mut player, &catalog, &mut tracker, &mut rng);

        let table = [DropEntry::new("small_potion", 30.0)];
        let result = resolve_drops(
            &mut session,
            &table,
            DropSource::Combat { enemy_tier: None },
        );

        assert_eq!(result.drops.len(), 1);
        let drop = &result.drops[0];
        assert_eq!(drop.item.name, "Common Small Potion");
        assert_eq!(drop.item.tier, TierId::Common);
        assert_eq!(drop.item.stats.get("hp"), Some(&30));
        assert_eq!(drop.quantity, 1);
        assert!(!result.consolation);
        assert_eq!(tracker.statistics().total_drops, 1);
    }

    #[test]
    fn test_fixed_tier_is_respected() {
        let catalog = Catalog::builtin();
        let mut player = PlayerProfile::default();
        let mut tracker = RarityTracker::new();
        let mut rng = constant_roll(0.0);
        let mut session = GameSession::new(&mut player, &catalog, &mut tracker, &mut rng);

        let table = [DropEntry::new("iron_sword", 1.0).with_tier(TierId::Epic)];
        let result = resolve_drops(
            &mut session,
            &table,
            DropSource::Combat { enemy_tier: None },
        );

        assert_eq!(result.drops[0].item.tier, TierId::Epic);
        assert_eq!(result.drops[0].item.stats.get("atk"), Some(&26));
        assert_eq!(result.finder_rewards.len(), 1);
        assert_eq!(player.gold, 50 + 500);
    }

    #[test]
    fn test_unknown_item_is_skipped_without_consolation_loss() {
        let catalog = Catalog::builtin();
        let mut player = PlayerProfile::default();
        let mut tracker = RarityTracker::new();
        // every chance succeeds, including the consolation roll
        let mut rng = constant_roll(0.0);
        let mut session = GameSession::new(&mut player, &catalog, &mut tracker, &mut rng);

        let table = [DropEntry::new("no_such_item", 100.0)];
        let result = resolve_drops(
            &mut session,
            &table,
            DropSource::Combat { enemy_tier: None },
        );

        // The skipped entry does not count, so the bonus roll fires.
        assert!(result.consolation);
        assert_eq!(result.drops.len(), 1);
        assert_eq!(result.drops[0].item.tier, TierId::Common);
        assert_eq!(tracker.statistics().total_drops, 0);
    }

    #[test]
    fn test_empty_table_with_failed_bonus_is_empty() {
        let catalog = Catalog::builtin();
        let mut player = PlayerProfile::default();
        let mut tracker = RarityTracker::new();
        let mut rng = constant_roll(0.99);
        let mut session = GameSession::new(&mut player, &catalog, &mut tracker, &mut rng);

        let result = resolve_drops(&mut session, &[], DropSource::Combat { enemy_tier: None });
        assert!(result.is_empty());
        assert!(result.messages.is_empty());
        assert!(!result.consolation);
    }

    #[test]
    fn test_gathering_quantity_within_range() {
        let catalog = Catalog::builtin();
        let mut player = PlayerProfile::default();
        let mut tracker = RarityTracker::new();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut session = GameSession::new(&mut player, &catalog, &mut tracker, &mut rng);

        let table = [DropEntry::new("wood", 95.0)
            .with_tier(TierId::Common)
            .with_quantity(2, 5)];
        let mut seen_wood = false;
        let mut seen_consolation = false;
        for _ in 0..200 {
            let result = resolve_drops(
                &mut session,
                &table,
                DropSource::Gathering { skill_level: 1 },
            );
            if result.consolation {
                // The bonus item is always a single unit, whatever it is.
                assert_eq!(result.drops.len(), 1);
                assert_eq!(result.drops[0].quantity, 1);
                seen_consolation = true;
                continue;
            }
            for drop in result.drops.iter().filter(|d| d.item.item_id == "wood") {
                assert!((2..=5).contains(&drop.quantity));
                seen_wood = true;
            }
        }
        assert!(seen_wood);
        // Seed 11 misses the 95% entry at least once and the bonus roll pays out.
        assert!(seen_consolation);
    }

    #[test]
    fn test_gathering_never_exceeds_95_percent() {
        let catalog = Catalog::builtin();
        let mut player = PlayerProfile::default();
        player.set_profession_level("mining", 0);
        let mut tracker = RarityTracker::new();
        // 0.96 * 100 = 96 > 95 cap, so a 100% entry still fails when gathering
        let mut rng = constant_roll(0.96);
        let mut session = GameSession::new(&mut player, &catalog, &mut tracker, &mut rng);

        let table = [DropEntry::new("tin_ore", 100.0).with_tier(TierId::Common)];
        let result = resolve_drops(
            &mut session,
            &table,
            DropSource::Gathering { skill_level: 99 },
        );
        assert!(result.is_empty());

        let result = resolve_drops(
            &mut session,
            &table,
            DropSource::Combat { enemy_tier: None },
        );
        assert_eq!(result.drops.len(), 1);
    }

    #[test]
    fn test_drop_entry_json_defaults() {
        let entry: DropEntry =
            serde_json::from_str(r#"{"item_id":"herb","chance":70.0}"#).unwrap();
        assert_eq!(entry.tier, None);
        assert_eq!((entry.min_quantity, entry.max_quantity), (1, 1));

        let entry: DropEntry =
            serde_json::from_str(r#"{"item_id":"herb","chance":5.0,"tier":"shiny"}"#).unwrap();
        assert_eq!(entry.tier, Some(TierId::Common));
    }
}

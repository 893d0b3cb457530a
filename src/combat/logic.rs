//! Combat victory rewards.

use super::data::monster;
use super::types::Monster;
use crate::core::GameSession;
use crate::items::ItemDrop;
use crate::loot::{resolve_drops, DropSource};
use crate::stats::FinderReward;
use rand::Rng;

/// Everything granted for defeating a monster.
#[derive(Debug, Clone, Default)]
pub struct VictoryRewards {
    pub experience: u64,
    pub gold: u64,
    pub drops: Vec<ItemDrop>,
    /// True if the drop table missed and the bonus roll paid out.
    pub consolation: bool,
    pub finder_rewards: Vec<FinderReward>,
    /// Messages to display to the player
    pub messages: Vec<String>,
}

/// Grant experience, gold and loot for defeating `monster`.
///
/// Drops are resolved on the combat path (chances scaled by the monster's
/// tier, uncapped) and added to the player's inventory.
pub fn award_victory<R: Rng>(
    session: &mut GameSession<'_, R>,
    monster: &Monster,
) -> VictoryRewards {
    let (gold_min, gold_max) = monster.gold;
    let gold = if gold_max <= gold_min {
        gold_min
    } else {
        // Gold ranges fit comfortably in u32.
        let span = (gold_max - gold_min).min(u32::MAX as u64) as u32;
        gold_min + session.random_int(0, span) as u64
    };

    session.player.grant_experience(monster.exp);
    session.player.add_gold(gold);

    let drop_result = resolve_drops(
        session,
        &monster.drops,
        DropSource::Combat {
            enemy_tier: monster.rarity,
        },
    );
    for drop in &drop_result.drops {
        session.player.add_item(drop.item.clone(), drop.quantity);
    }

    let mut messages = drop_result.messages;
    messages.push(format!(
        "You defeated {}! Gained {} XP and {} Gold.",
        monster.name, monster.exp, gold
    ));

    tracing::debug!(
        monster = %monster.id,
        gold,
        drops = drop_result.drops.len(),
        consolation = drop_result.consolation,
        "victory"
    );
    VictoryRewards {
        experience: monster.exp,
        gold,
        drops: drop_result.drops,
        consolation: drop_result.consolation,
        finder_rewards: drop_result.finder_rewards,
        messages,
    }
}

/// Defeat a built-in monster by id. Unknown ids yield `None`.
pub fn defeat_enemy<R: Rng>(
    session: &mut GameSession<'_, R>,
    monster_id: &str,
) -> Option<VictoryRewards> {
    let monster = monster(monster_id)?;
    Some(award_victory(session, &monster))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::Catalog;
    use crate::player::{PlayerProfile, PlayerState};
    use crate::rarity::TierId;
    use crate::stats::RarityTracker;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_unknown_monster() {
        let catalog = Catalog::builtin();
        let mut player = PlayerProfile::default();
        let mut tracker = RarityTracker::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut session = GameSession::new(&mut player, &catalog, &mut tracker, &mut rng);
        assert!(defeat_enemy(&mut session, "slime").is_none());
    }

    #[test]
    fn test_goblin_rewards_in_range() {
        let catalog = Catalog::builtin();
        let mut player = PlayerProfile::default();
        let mut tracker = RarityTracker::new();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut session = GameSession::new(&mut player, &catalog, &mut tracker, &mut rng);

        let mut total_gold = 0;
        for _ in 0..100 {
            let rewards = defeat_enemy(&mut session, "goblin").unwrap();
            assert_eq!(rewards.experience, 15);
            assert!((2..=10).contains(&rewards.gold));
            assert!(rewards
                .messages
                .last()
                .unwrap()
                .starts_with("You defeated Goblin!"));
            total_gold += rewards.gold;
        }
        assert_eq!(player.gold, 50 + total_gold + finder_gold(&player));
    }

    fn finder_gold(player: &PlayerProfile) -> u64 {
        // Goblins can drop an uncommon iron sword, which pays the finder reward.
        if player.is_feature_unlocked("uncommon_finder") {
            50
        } else {
            0
        }
    }

    #[test]
    fn test_dragon_always_drops_elixir() {
        let catalog = Catalog::builtin();
        let mut player = PlayerProfile::default();
        let mut tracker = RarityTracker::new();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut session = GameSession::new(&mut player, &catalog, &mut tracker, &mut rng);

        for _ in 0..20 {
            let rewards = defeat_enemy(&mut session, "ancient_dragon").unwrap();
            // 100% * 3.0 is uncapped, so it never misses.
            assert!(rewards
                .drops
                .iter()
                .any(|d| d.item.item_id == "elixir_of_life" && d.item.tier == TierId::Legendary));
            // 80% * 3.0 also always succeeds
            assert!(rewards
                .drops
                .iter()
                .any(|d| d.item.item_id == "dragon_scale"));
            assert!(!rewards.consolation);
        }
        assert!(player.item_count("elixir_of_life") >= 20);
        assert!(player.is_feature_unlocked("legendary_finder"));
    }
}

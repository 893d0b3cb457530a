//! Integration test: rarity statistics and first-find rewards across saves.
//!
//! Statistics live in their own JSON file while finder unlocks live in the
//! player profile, so wiping one must not re-grant rewards tracked by the other.

use eternal_realms::core::GameSession;
use eternal_realms::items::{generate_random_item, Catalog, ItemType};
use eternal_realms::player::{PlayerProfile, PlayerState, SaveManager};
use eternal_realms::rarity::{global_tier_weights, roll_random_tier, TierId};
use eternal_realms::stats::{FinderReward, JsonStatsStore, RarityTracker, StatsStore};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs;
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join("eternal-realms-tests")
        .join(format!("{name}-{}", std::process::id()))
}

// =========================================================================
// Global tier roll
// =========================================================================

#[test]
fn test_global_roll_matches_weights() {
    let weights = global_tier_weights(0.01);
    let total: f64 = weights.iter().map(|(_, w)| w).sum();
    let mut rng = ChaCha8Rng::seed_from_u64(77);
    let rolls = 100_000;
    let mut counts = [0u32; 7];
    for _ in 0..rolls {
        counts[roll_random_tier(0.01, &mut rng).rank()] += 1;
    }

    for (tier, weight) in weights {
        let share = counts[tier.rank()] as f64 / rolls as f64;
        assert!(
            (share - weight / total).abs() < 0.01,
            "{tier:?}: got {share:.4}, expected {:.4}",
            weight / total
        );
    }
}

// =========================================================================
// Tracker behaviour over a play session
// =========================================================================

#[test]
fn test_highest_tier_never_regresses() {
    let mut player = PlayerProfile::default();
    let mut tracker = RarityTracker::new();
    let sequence = [
        TierId::Uncommon,
        TierId::Common,
        TierId::Epic,
        TierId::Rare,
        TierId::Common,
        TierId::Epic,
    ];

    let mut highest = TierId::Common;
    let mut rewards = Vec::new();
    for tier in sequence {
        if let Some(reward) = tracker.record_find(tier, &mut player) {
            rewards.push(reward.tier);
        }
        highest = highest.max(tier);
        assert_eq!(tracker.highest_tier(), highest);
    }

    // Rare came after Epic, so it never raised the highest tier.
    assert_eq!(rewards, vec![TierId::Uncommon, TierId::Epic]);
    assert_eq!(tracker.statistics().total_drops, sequence.len() as u64);
    assert_eq!(tracker.statistics().count(TierId::Common), 2);
    assert!(!player.is_feature_unlocked(&FinderReward::unlock_key(TierId::Rare)));
}

#[test]
fn test_breakdown_sums_to_total() {
    let catalog = Catalog::builtin();
    let mut player = PlayerProfile::default();
    let mut tracker = RarityTracker::new();
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut session = GameSession::new(&mut player, &catalog, &mut tracker, &mut rng);

    for _ in 0..500 {
        assert!(generate_random_item(&mut session, ItemType::Armor).is_some());
    }

    let breakdown = tracker.breakdown();
    assert_eq!(breakdown.len(), 7);
    assert_eq!(breakdown.iter().map(|b| b.count).sum::<u64>(), 500);
    let pct: f64 = breakdown.iter().map(|b| b.percentage).sum();
    assert!((pct - 100.0).abs() < 1e-6);
}

// =========================================================================
// Persistence
// =========================================================================

#[test]
fn test_statistics_and_unlocks_survive_reload() {
    let stats_path = temp_path("progress-stats.json");
    let save_path = temp_path("progress-save.dat");
    let _ = fs::remove_file(&stats_path);
    let _ = fs::remove_file(&save_path);

    let mut store = JsonStatsStore::with_path(&stats_path);
    let saves = SaveManager::with_path(&save_path);

    let mut player = PlayerProfile::new("Keeper");
    let mut tracker = RarityTracker::load(&store);
    assert!(tracker.record_find(TierId::Rare, &mut player).is_some());
    tracker.record_find(TierId::Common, &mut player);
    assert!(tracker.is_dirty());
    tracker.save(&mut store);
    assert!(!tracker.is_dirty());
    saves.save(&player).expect("save profile");

    let mut player = saves.load().expect("load profile");
    let tracker = RarityTracker::load(&store);
    assert_eq!(tracker.statistics().total_drops, 2);
    assert_eq!(tracker.highest_tier(), TierId::Rare);
    assert!(player.is_feature_unlocked(&FinderReward::unlock_key(TierId::Rare)));

    // Statistics wiped, profile kept: the rare find raises the highest tier
    // again but the reward was already claimed.
    store.save_statistics(&Default::default());
    let mut tracker = RarityTracker::load(&store);
    let gold_before = player.gold;
    assert!(tracker.record_find(TierId::Rare, &mut player).is_none());
    assert_eq!(tracker.highest_tier(), TierId::Rare);
    assert_eq!(player.gold, gold_before);

    let _ = fs::remove_file(&stats_path);
    let _ = fs::remove_file(&save_path);
}

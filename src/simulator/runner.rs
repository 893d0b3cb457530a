//! Simulation runner driving the real resolvers.
//!
//! Every event goes through the same orchestration functions the game uses
//! (`award_victory`, `complete_gathering`, `craft_item`), so simulated rates
//! match real play.

use super::config::{SimConfig, SimMode};
use super::report::SimReport;
use crate::combat::{award_victory, monster, Monster};
use crate::core::GameSession;
use crate::crafting::{
    complete_gathering, craft_item, profession, CraftOutcome, GatherOutcome, Profession,
};
use crate::items::{enhance, Catalog, ItemCatalog, ItemDrop};
use crate::player::{PlayerProfile, PlayerState};
use crate::rarity::TierId;
use crate::stats::{FinderReward, RarityTracker};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("unknown monster '{0}'")]
    UnknownMonster(String),
    #[error("unknown profession '{0}'")]
    UnknownProfession(String),
    #[error("'{0}' is not a gathering profession")]
    NotGathering(String),
    #[error("profession '{profession}' has no recipe '{recipe}'")]
    UnknownRecipe { profession: String, recipe: String },
}

/// Statistics for a single run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStats {
    pub events: u64,
    /// Events where the drop table produced at least one item
    pub drop_events: u64,
    /// Events where only the consolation roll paid out
    pub consolation_events: u64,
    /// Events that could not run (missing ingredients, requirements)
    pub failed_events: u64,
    /// Total item quantity received, consolation included
    pub items_received: u64,
    pub gold_earned: u64,
    pub finder_rewards: u64,
    /// Recorded finds per tier, in rank order
    pub tier_counts: [u64; 7],
    pub highest_tier: TierId,
}

impl RunStats {
    fn record_drops(&mut self, drops: &[ItemDrop], consolation: bool) {
        self.items_received += drops.iter().map(|d| d.quantity as u64).sum::<u64>();
        if consolation {
            self.consolation_events += 1;
        } else if !drops.is_empty() {
            self.drop_events += 1;
        }
    }
}

/// Resolved game data for the configured mode.
enum Plan {
    Combat(Monster),
    Gather(Profession),
    Craft(Profession, String),
}

fn plan_for(mode: &SimMode) -> Result<Plan, SimError> {
    match mode {
        SimMode::Combat { monster_id } => monster(monster_id)
            .map(Plan::Combat)
            .ok_or_else(|| SimError::UnknownMonster(monster_id.clone())),
        SimMode::Gather { profession_id } => {
            let p = profession(profession_id)
                .ok_or_else(|| SimError::UnknownProfession(profession_id.clone()))?;
            if !p.is_gathering() {
                return Err(SimError::NotGathering(profession_id.clone()));
            }
            Ok(Plan::Gather(p))
        }
        SimMode::Craft {
            profession_id,
            recipe_id,
        } => {
            let p = profession(profession_id)
                .ok_or_else(|| SimError::UnknownProfession(profession_id.clone()))?;
            if p.recipe(recipe_id).is_none() {
                return Err(SimError::UnknownRecipe {
                    profession: profession_id.clone(),
                    recipe: recipe_id.clone(),
                });
            }
            Ok(Plan::Craft(p, recipe_id.clone()))
        }
    }
}

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport, SimError> {
    let plan = plan_for(&config.mode)?;
    let catalog = Catalog::builtin();
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        // Create RNG for this run
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let stats = simulate_single_run(config, &plan, &catalog, &mut rng);
        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - drops {}, consolation {}, items {}, highest {}",
                run_idx + 1,
                config.num_runs,
                stats.drop_events,
                stats.consolation_events,
                stats.items_received,
                stats.highest_tier
            );
        }
        all_runs.push(stats);
    }

    tracing::info!(runs = config.num_runs, mode = %config.mode.label(), "simulation finished");
    Ok(SimReport::from_runs(config, all_runs))
}

fn new_profile(config: &SimConfig) -> PlayerProfile {
    let mut profile = PlayerProfile::new("Simulated");
    profile.luck = config.luck;
    profile.dungeon_depth = config.dungeon_depth;
    profile.set_profession_level("mining", config.mining_level);
    profile
}

fn give_common(
    player: &mut dyn PlayerState,
    catalog: &dyn ItemCatalog,
    item_id: &str,
    quantity: u32,
) {
    if let Some(def) = catalog.item(item_id) {
        player.add_item(enhance(def, TierId::Common), quantity);
    }
}

fn simulate_single_run(
    config: &SimConfig,
    plan: &Plan,
    catalog: &Catalog,
    rng: &mut ChaCha8Rng,
) -> RunStats {
    let mut player = new_profile(config);
    let mut tracker = RarityTracker::new();
    let mut stats = RunStats::default();
    let gold_before = player.gold;

    if let Plan::Gather(p) | Plan::Craft(p, _) = plan {
        for tool in &p.required_tools {
            give_common(&mut player, catalog, tool, 1);
        }
    }

    for _ in 0..config.events_per_run {
        stats.events += 1;
        // Skill is held fixed so rates describe one level.
        if let Plan::Gather(p) | Plan::Craft(p, _) = plan {
            player.set_profession_level(&p.id, config.skill_level);
        }
        if let Plan::Craft(p, recipe_id) = plan {
            if let Some(recipe) = p.recipe(recipe_id) {
                for ing in &recipe.ingredients {
                    give_common(&mut player, catalog, &ing.item_id, ing.quantity);
                }
            }
        }

        let mut session = GameSession::new(&mut player, catalog, &mut tracker, &mut *rng);
        match plan {
            Plan::Combat(m) => {
                let rewards = award_victory(&mut session, m);
                stats.record_drops(&rewards.drops, rewards.consolation);
            }
            Plan::Gather(p) => match complete_gathering(&mut session, p) {
                GatherOutcome::Completed(result) => {
                    stats.record_drops(&result.drops, result.consolation);
                }
                GatherOutcome::NotGathering | GatherOutcome::Blocked(_) => {
                    stats.failed_events += 1;
                }
            },
            Plan::Craft(p, recipe_id) => match craft_item(&mut session, p, recipe_id) {
                CraftOutcome::Crafted(result) => {
                    stats.items_received += result.quantity as u64;
                    stats.drop_events += 1;
                }
                other => {
                    tracing::debug!(outcome = ?other, "craft failed");
                    stats.failed_events += 1;
                }
            },
        }
    }

    let recorded = tracker.statistics();
    for tier in TierId::ALL {
        stats.tier_counts[tier.rank()] = recorded.count(tier);
    }
    stats.highest_tier = recorded.highest_tier;
    stats.finder_rewards = TierId::ALL
        .iter()
        .filter(|&&tier| player.is_feature_unlocked(&FinderReward::unlock_key(tier)))
        .count() as u64;
    stats.gold_earned = player.gold.saturating_sub(gold_before);
    stats
}

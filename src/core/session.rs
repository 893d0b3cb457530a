//! Explicit context passed into every resolver.

use super::rolls;
use crate::items::ItemCatalog;
use crate::loot::drop_chance_modifier;
use crate::player::PlayerState;
use crate::rarity::TierId;
use crate::stats::{FinderReward, RarityTracker};
use rand::Rng;

/// Borrowed collaborators for one resolution: the player, the item catalog,
/// the rarity tracker and the shared random source.
pub struct GameSession<'a, R: Rng> {
    pub player: &'a mut dyn PlayerState,
    pub catalog: &'a dyn ItemCatalog,
    pub tracker: &'a mut RarityTracker,
    pub rng: &'a mut R,
}

impl<'a, R: Rng> GameSession<'a, R> {
    pub fn new(
        player: &'a mut dyn PlayerState,
        catalog: &'a dyn ItemCatalog,
        tracker: &'a mut RarityTracker,
        rng: &'a mut R,
    ) -> Self {
        Self {
            player,
            catalog,
            tracker,
            rng,
        }
    }

    /// Current luck/depth/profession modifier for this player.
    pub fn modifier(&self) -> f64 {
        drop_chance_modifier(&*self.player)
    }

    pub fn chance(&mut self, percent: f64) -> bool {
        rolls::chance(&mut *self.rng, percent)
    }

    pub fn random_int(&mut self, min: u32, max: u32) -> u32 {
        rolls::random_int(&mut *self.rng, min, max)
    }

    pub fn random_index(&mut self, len: usize) -> usize {
        rolls::random_index(&mut *self.rng, len)
    }

    /// Record a find with the tracker, paying out any finder reward.
    pub fn record_find(&mut self, tier: TierId) -> Option<FinderReward> {
        self.tracker.record_find(tier, &mut *self.player)
    }
}

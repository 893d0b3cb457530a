//! In-memory player profile implementing [`PlayerState`].

use super::state::PlayerState;
use crate::core::constants::{
    STARTING_DUNGEON_DEPTH, STARTING_GOLD, STARTING_PROFESSION_LEVEL, XP_CURVE_BASE,
    XP_CURVE_GROWTH,
};
use crate::items::EnhancedItem;
use crate::rarity::TierId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Experience needed to advance from `level` to `level + 1`.
pub fn xp_for_next_level(level: u32) -> u64 {
    (XP_CURVE_BASE * XP_CURVE_GROWTH.powi(level.saturating_sub(1) as i32)).floor() as u64
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfessionProgress {
    pub level: u32,
    pub experience: u64,
}

impl Default for ProfessionProgress {
    fn default() -> Self {
        Self {
            level: STARTING_PROFESSION_LEVEL,
            experience: 0,
        }
    }
}

/// One inventory slot: identical items of the same tier stack together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryStack {
    pub item: EnhancedItem,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnlockedFeature {
    pub unlocked_at: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub name: String,
    pub level: u32,
    pub experience: u64,
    pub gold: u64,
    pub luck: Option<f64>,
    pub dungeon_depth: u32,
    pub professions: BTreeMap<String, ProfessionProgress>,
    pub inventory: Vec<InventoryStack>,
    pub unlocked_features: BTreeMap<String, UnlockedFeature>,
}

impl PlayerProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: 1,
            experience: 0,
            gold: STARTING_GOLD,
            luck: None,
            dungeon_depth: STARTING_DUNGEON_DEPTH,
            professions: BTreeMap::new(),
            inventory: Vec::new(),
            unlocked_features: BTreeMap::new(),
        }
    }

    pub fn set_profession_level(&mut self, profession: &str, level: u32) {
        self.professions
            .entry(profession.to_string())
            .or_default()
            .level = level;
    }

    /// Units of `item_id` held at exactly `tier`.
    pub fn item_count_at_tier(&self, item_id: &str, tier: TierId) -> u32 {
        self.inventory
            .iter()
            .filter(|s| s.item.item_id == item_id && s.item.tier == tier)
            .map(|s| s.quantity)
            .sum()
    }
}

impl Default for PlayerProfile {
    fn default() -> Self {
        Self::new("Adventurer")
    }
}

impl PlayerState for PlayerProfile {
    fn luck(&self) -> Option<f64> {
        self.luck
    }

    fn dungeon_depth(&self) -> u32 {
        self.dungeon_depth
    }

    fn profession_level(&self, profession: &str) -> u32 {
        self.professions
            .get(profession)
            .map(|p| p.level)
            .unwrap_or(STARTING_PROFESSION_LEVEL)
    }

    fn item_count(&self, item_id: &str) -> u32 {
        self.inventory
            .iter()
            .filter(|s| s.item.item_id == item_id)
            .map(|s| s.quantity)
            .sum()
    }

    fn add_item(&mut self, item: EnhancedItem, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self
            .inventory
            .iter_mut()
            .find(|s| s.item.item_id == item.item_id && s.item.tier == item.tier)
        {
            Some(stack) => stack.quantity += quantity,
            None => self.inventory.push(InventoryStack { item, quantity }),
        }
    }

    fn remove_item(&mut self, item_id: &str, quantity: u32) -> bool {
        if self.item_count(item_id) < quantity {
            return false;
        }

        // Lowest tiers are consumed first.
        let mut slots: Vec<usize> = self
            .inventory
            .iter()
            .enumerate()
            .filter(|(_, s)| s.item.item_id == item_id)
            .map(|(idx, _)| idx)
            .collect();
        slots.sort_by_key(|&idx| self.inventory[idx].item.tier);

        let mut remaining = quantity;
        for idx in slots {
            if remaining == 0 {
                break;
            }
            let stack = &mut self.inventory[idx];
            let taken = remaining.min(stack.quantity);
            stack.quantity -= taken;
            remaining -= taken;
        }
        self.inventory.retain(|s| s.quantity > 0);
        true
    }

    fn add_gold(&mut self, amount: u64) {
        self.gold = self.gold.saturating_add(amount);
    }

    fn spend_gold(&mut self, amount: u64) -> bool {
        if self.gold < amount {
            return false;
        }
        self.gold -= amount;
        true
    }

    fn grant_experience(&mut self, amount: u64) {
        self.experience += amount;
        while self.experience >= xp_for_next_level(self.level) {
            self.experience -= xp_for_next_level(self.level);
            self.level += 1;
        }
    }

    fn grant_profession_experience(&mut self, profession: &str, amount: u64) {
        let progress = self.professions.entry(profession.to_string()).or_default();
        progress.experience += amount;
        while progress.experience >= xp_for_next_level(progress.level) {
            progress.experience -= xp_for_next_level(progress.level);
            progress.level += 1;
        }
    }

    fn is_feature_unlocked(&self, feature: &str) -> bool {
        self.unlocked_features.contains_key(feature)
    }

    fn unlock_feature(&mut self, feature: &str) -> bool {
        if self.is_feature_unlocked(feature) {
            return false;
        }
        self.unlocked_features.insert(
            feature.to_string(),
            UnlockedFeature {
                unlocked_at: chrono::Utc::now().timestamp(),
            },
        );
        true
    }
}

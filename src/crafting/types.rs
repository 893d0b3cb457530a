//! Profession and recipe definitions.

use crate::loot::DropEntry;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub item_id: String,
    pub quantity: u32,
}

impl Ingredient {
    pub fn new(item_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            item_id: item_id.into(),
            quantity,
        }
    }
}

/// Timed food effect granted by a cooked recipe.
///
/// The engine only reports it; the caller owns hp and active buffs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecipeBuff {
    /// Restored immediately on consumption.
    #[serde(default)]
    pub hp: u32,
    #[serde(default)]
    pub atk: u32,
    pub duration_secs: u64,
}

impl RecipeBuff {
    pub fn new(hp: u32, atk: u32, duration_secs: u64) -> Self {
        Self {
            hp,
            atk,
            duration_secs,
        }
    }

    /// Game-log line for eating the crafted food.
    pub fn message(&self, item_name: &str) -> String {
        let mut effects = Vec::new();
        if self.hp > 0 {
            effects.push(format!("Restored {} HP", self.hp));
        }
        if self.atk > 0 {
            effects.push(format!("+{} ATK", self.atk));
        }
        if effects.is_empty() {
            format!("Consumed {} ({}s)", item_name, self.duration_secs)
        } else {
            format!(
                "Consumed {}: {} ({}s)",
                item_name,
                effects.join(", "),
                self.duration_secs
            )
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub ingredients: Vec<Ingredient>,
    pub result_item: String,
    pub result_quantity: u32,
    pub level_required: u32,
    pub exp: u64,
    #[serde(default)]
    pub buff: Option<RecipeBuff>,
}

impl Recipe {
    pub fn with_buff(mut self, buff: RecipeBuff) -> Self {
        self.buff = Some(buff);
        self
    }
}

/// A gathering or crafting skill.
///
/// Gathering professions carry a drop table; crafting professions carry
/// recipes. Both may require tools in the inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profession {
    pub id: String,
    pub name: String,
    pub description: String,
    pub base_time_ms: u64,
    pub base_exp: u64,
    pub required_level: u32,
    #[serde(default)]
    pub required_tools: Vec<String>,
    #[serde(default)]
    pub drops: Vec<DropEntry>,
    #[serde(default)]
    pub recipes: Vec<Recipe>,
}

impl Profession {
    pub fn is_gathering(&self) -> bool {
        !self.drops.is_empty()
    }

    pub fn recipe(&self, recipe_id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == recipe_id)
    }
}

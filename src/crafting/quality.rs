//! Craft quality rolls.

use super::types::{Profession, Recipe};
use crate::core::constants::{
    CRAFT_BASE_WEIGHTS, CRAFT_COMMON_MIN_WEIGHT, CRAFT_COMMON_PENALTY_PER_LEVEL,
    CRAFT_RARE_INGREDIENT_BOOST, CRAFT_RARE_INGREDIENT_COMMON_FACTOR, CRAFT_SKILL_BONUS_PER_LEVEL,
};
use crate::core::GameSession;
use crate::items::ItemCatalog;
use crate::rarity::{select_tier, TierId};
use rand::Rng;

/// Tiers a craft can produce, in table order.
pub const CRAFTABLE_TIERS: [TierId; 5] = [
    TierId::Common,
    TierId::Uncommon,
    TierId::Rare,
    TierId::Epic,
    TierId::Legendary,
];

const QUALITY_LABELS: [&str; 5] = [
    "Normal Quality",
    "Good Quality",
    "Excellent Quality",
    "Masterpiece",
    "Legendary Work",
];

/// One row of the craft quality table.
#[derive(Debug, Clone, PartialEq)]
pub struct QualityRow {
    pub tier: TierId,
    pub weight: f64,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CraftQuality {
    pub tier: TierId,
    pub label: &'static str,
}

impl CraftQuality {
    pub fn for_tier(tier: TierId) -> Self {
        let label = CRAFTABLE_TIERS
            .iter()
            .position(|t| *t == tier)
            .map(|i| QUALITY_LABELS[i])
            .unwrap_or(QUALITY_LABELS[0]);
        Self { tier, label }
    }
}

/// True if any ingredient is tagged above common in the catalog.
pub fn has_rare_ingredients(recipe: &Recipe, catalog: &dyn ItemCatalog) -> bool {
    recipe
        .ingredients
        .iter()
        .filter_map(|ing| catalog.item(&ing.item_id))
        .any(|def| def.has_rare_tag())
}

/// Adjusted quality weights for a craft.
///
/// Every level above the recipe requirement adds 2 to each non-common weight
/// and takes 5 from common (down to 10). Rare ingredients multiply
/// non-common weights by 1.5 and halve common. Negative weights clamp to 0.
pub fn craft_quality_table(
    skill_level: u32,
    recipe: &Recipe,
    catalog: &dyn ItemCatalog,
) -> Vec<QualityRow> {
    let level_diff = skill_level as f64 - recipe.level_required as f64;
    let rare_ingredients = has_rare_ingredients(recipe, catalog);

    CRAFTABLE_TIERS
        .iter()
        .zip(CRAFT_BASE_WEIGHTS)
        .zip(QUALITY_LABELS)
        .map(|((&tier, base), label)| {
            let mut weight = if tier.is_common() {
                (base - level_diff * CRAFT_COMMON_PENALTY_PER_LEVEL).max(CRAFT_COMMON_MIN_WEIGHT)
            } else {
                base + level_diff * CRAFT_SKILL_BONUS_PER_LEVEL
            };
            if rare_ingredients {
                weight *= if tier.is_common() {
                    CRAFT_RARE_INGREDIENT_COMMON_FACTOR
                } else {
                    CRAFT_RARE_INGREDIENT_BOOST
                };
            }
            QualityRow {
                tier,
                weight: weight.max(0.0),
                label,
            }
        })
        .collect()
}

/// Roll the quality tier for one craft of `recipe`.
pub fn resolve_craft_quality<R: Rng>(
    session: &mut GameSession<'_, R>,
    profession: &Profession,
    skill_level: u32,
    recipe: &Recipe,
) -> CraftQuality {
    let table = craft_quality_table(skill_level, recipe, session.catalog);
    let weights: Vec<(TierId, f64)> = table.iter().map(|row| (row.tier, row.weight)).collect();
    let tier = select_tier(&weights, &mut *session.rng);
    tracing::debug!(
        profession = %profession.id,
        recipe = %recipe.id,
        skill_level,
        tier = %tier,
        "craft quality"
    );
    CraftQuality::for_tier(tier)
}

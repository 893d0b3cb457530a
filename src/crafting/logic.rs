//! Gathering completion and recipe crafting.

use super::quality::{resolve_craft_quality, CraftQuality};
use super::types::{Ingredient, Profession, RecipeBuff};
use crate::core::constants::{
    ACTIVITY_TIME_MAX_REDUCTION, ACTIVITY_TIME_REDUCTION_PER_LEVEL, GATHER_EXP_BONUS_PER_LEVEL,
};
use crate::core::GameSession;
use crate::items::{enhance, EnhancedItem, ItemDrop};
use crate::loot::{resolve_drops, DropSource};
use crate::player::PlayerState;
use crate::rarity::{get_tier, rank_of, TierId};
use rand::Rng;

/// Activity duration in milliseconds: 5% faster per level above 1, at most 50%.
pub fn activity_duration_ms(base_time_ms: u64, level: u32) -> u64 {
    let reduction = (level.saturating_sub(1) as f64 * ACTIVITY_TIME_REDUCTION_PER_LEVEL)
        .min(ACTIVITY_TIME_MAX_REDUCTION);
    (base_time_ms as f64 * (1.0 - reduction)) as u64
}

/// Profession experience for one gathering completion: +10% per level above 1.
pub fn gathering_experience(base_exp: u64, level: u32) -> u64 {
    let bonus = 1.0 + level.saturating_sub(1) as f64 * GATHER_EXP_BONUS_PER_LEVEL;
    (base_exp as f64 * bonus).floor() as u64
}

/// Why an activity cannot start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequirementFailure {
    LevelTooLow { required: u32, current: u32 },
    MissingTool(String),
}

impl RequirementFailure {
    pub fn message(&self, profession: &Profession) -> String {
        match self {
            RequirementFailure::LevelTooLow { required, .. } => {
                format!(
                    "You need {} level {} for this activity.",
                    profession.name, required
                )
            }
            RequirementFailure::MissingTool(tool) => {
                format!("You need a {} for this activity.", tool)
            }
        }
    }
}

/// Check the profession's level and tool requirements.
pub fn check_requirements(
    player: &dyn PlayerState,
    profession: &Profession,
) -> Result<(), RequirementFailure> {
    let current = player.profession_level(&profession.id);
    if current < profession.required_level {
        return Err(RequirementFailure::LevelTooLow {
            required: profession.required_level,
            current,
        });
    }
    if let Some(tool) = profession
        .required_tools
        .iter()
        .find(|tool| !player.has_item(tool, 1))
    {
        return Err(RequirementFailure::MissingTool(tool.clone()));
    }
    Ok(())
}

#[derive(Debug, Clone, Default)]
pub struct GatherResult {
    pub experience: u64,
    pub drops: Vec<ItemDrop>,
    /// True if the drop table missed and the bonus roll paid out.
    pub consolation: bool,
    /// Messages to display to the player
    pub messages: Vec<String>,
    /// New profession level, if this completion levelled up.
    pub level_up: Option<u32>,
}

#[derive(Debug, Clone)]
pub enum GatherOutcome {
    Completed(GatherResult),
    /// The profession has no drop table (a crafting profession).
    NotGathering,
    Blocked(RequirementFailure),
}

/// Finish one gathering activity: grant profession experience, roll the
/// drop table on the gathering path and add the drops to the inventory.
pub fn complete_gathering<R: Rng>(
    session: &mut GameSession<'_, R>,
    profession: &Profession,
) -> GatherOutcome {
    if !profession.is_gathering() {
        return GatherOutcome::NotGathering;
    }
    if let Err(failure) = check_requirements(&*session.player, profession) {
        return GatherOutcome::Blocked(failure);
    }

    let level = session.player.profession_level(&profession.id);
    let experience = gathering_experience(profession.base_exp, level);
    session
        .player
        .grant_profession_experience(&profession.id, experience);

    let drop_result = resolve_drops(
        session,
        &profession.drops,
        DropSource::Gathering { skill_level: level },
    );

    let mut result = GatherResult {
        experience,
        consolation: drop_result.consolation,
        ..Default::default()
    };
    for drop in &drop_result.drops {
        session.player.add_item(drop.item.clone(), drop.quantity);
    }
    result.messages.extend(drop_result.messages);
    result.drops = drop_result.drops;
    result.messages.push(format!(
        "Completed {}! Gained {} XP.",
        profession.name, experience
    ));

    let new_level = session.player.profession_level(&profession.id);
    if new_level > level {
        result.messages.push(format!(
            "{} skill increased to level {}!",
            profession.name, new_level
        ));
        result.level_up = Some(new_level);
    }

    tracing::debug!(
        profession = %profession.id,
        level,
        experience,
        drops = result.drops.len(),
        "gathering complete"
    );
    GatherOutcome::Completed(result)
}

#[derive(Debug, Clone)]
pub struct CraftResult {
    pub item: EnhancedItem,
    pub quantity: u32,
    pub quality: CraftQuality,
    pub experience: u64,
    /// Food effect for the caller to apply, copied from the recipe.
    pub buff: Option<RecipeBuff>,
    /// Messages to display to the player
    pub messages: Vec<String>,
    pub level_up: Option<u32>,
}

#[derive(Debug, Clone)]
pub enum CraftOutcome {
    Crafted(CraftResult),
    UnknownRecipe,
    /// The recipe's result is not in the item catalog.
    UnknownResultItem(String),
    LevelTooLow { required: u32, current: u32 },
    MissingTool(String),
    MissingIngredients(Vec<Ingredient>),
}

impl CraftOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CraftOutcome::Crafted(_))
    }

    /// Player-facing summary for outcomes that did not craft anything.
    pub fn failure_message(&self) -> Option<String> {
        match self {
            CraftOutcome::Crafted(_) => None,
            CraftOutcome::UnknownRecipe => Some("Recipe not found.".to_string()),
            CraftOutcome::UnknownResultItem(_) => Some("Result item not found.".to_string()),
            CraftOutcome::LevelTooLow { required, .. } => {
                Some(format!("You need level {} to craft this.", required))
            }
            CraftOutcome::MissingTool(tool) => Some(format!("You need a {} to craft this.", tool)),
            CraftOutcome::MissingIngredients(_) => {
                Some("You don't have all the required ingredients.".to_string())
            }
        }
    }
}

/// Craft one batch of `recipe_id`.
///
/// Nothing is consumed unless every requirement is met. On success the
/// ingredients are removed, the quality tier is rolled, the enhanced result
/// is added to the inventory and the find is recorded.
pub fn craft_item<R: Rng>(
    session: &mut GameSession<'_, R>,
    profession: &Profession,
    recipe_id: &str,
) -> CraftOutcome {
    let Some(recipe) = profession.recipe(recipe_id) else {
        return CraftOutcome::UnknownRecipe;
    };
    let catalog = session.catalog;
    let Some(result_def) = catalog.item(&recipe.result_item) else {
        return CraftOutcome::UnknownResultItem(recipe.result_item.clone());
    };

    let skill_level = session.player.profession_level(&profession.id);
    match check_requirements(&*session.player, profession) {
        Err(RequirementFailure::LevelTooLow { required, current }) => {
            return CraftOutcome::LevelTooLow { required, current };
        }
        Err(RequirementFailure::MissingTool(tool)) => return CraftOutcome::MissingTool(tool),
        Ok(()) => {}
    }
    if skill_level < recipe.level_required {
        return CraftOutcome::LevelTooLow {
            required: recipe.level_required,
            current: skill_level,
        };
    }

    let missing: Vec<Ingredient> = recipe
        .ingredients
        .iter()
        .filter(|ing| !session.player.has_item(&ing.item_id, ing.quantity))
        .cloned()
        .collect();
    if !missing.is_empty() {
        return CraftOutcome::MissingIngredients(missing);
    }

    for ing in &recipe.ingredients {
        session.player.remove_item(&ing.item_id, ing.quantity);
    }

    let quality = resolve_craft_quality(session, profession, skill_level, recipe);
    let tier = quality.tier;
    let item = enhance(result_def, tier);
    session
        .player
        .add_item(item.clone(), recipe.result_quantity);

    let experience = if tier.is_common() {
        recipe.exp
    } else {
        (recipe.exp as f64 * get_tier(tier).multiplier).floor() as u64
    };
    session
        .player
        .grant_profession_experience(&profession.id, experience);

    let mut messages = vec![format!(
        "Crafted {}x {} ({})!",
        recipe.result_quantity, item.name, quality.label
    )];
    if rank_of(tier) >= rank_of(TierId::Epic) {
        messages.push(format!(
            "Masterful craftsmanship! You created a {} quality item!",
            get_tier(tier).name
        ));
    }
    if let Some(buff) = &recipe.buff {
        messages.push(buff.message(&item.name));
    }
    if let Some(reward) = session.record_find(tier) {
        messages.extend(reward.messages());
    }

    let new_level = session.player.profession_level(&profession.id);
    let level_up = (new_level > skill_level).then_some(new_level);
    if let Some(level) = level_up {
        messages.push(format!(
            "{} skill increased to level {}!",
            profession.name, level
        ));
    }

    tracing::debug!(recipe = %recipe.id, tier = %tier, experience, "crafted");
    CraftOutcome::Crafted(CraftResult {
        item,
        quantity: recipe.result_quantity,
        quality,
        experience,
        buff: recipe.buff,
        messages,
        level_up,
    })
}

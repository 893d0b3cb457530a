//! Built-in professions.

use super::types::{Ingredient, Profession, Recipe, RecipeBuff};
use crate::loot::DropEntry;

fn gathering(
    id: &str,
    name: &str,
    description: &str,
    base_time_ms: u64,
    base_exp: u64,
    drops: Vec<DropEntry>,
) -> Profession {
    Profession {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        base_time_ms,
        base_exp,
        required_level: 1,
        required_tools: Vec::new(),
        drops,
        recipes: Vec::new(),
    }
}

fn crafting(
    id: &str,
    name: &str,
    description: &str,
    base_time_ms: u64,
    base_exp: u64,
    tool: &str,
    recipes: Vec<Recipe>,
) -> Profession {
    Profession {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        base_time_ms,
        base_exp,
        required_level: 1,
        required_tools: vec![tool.to_string()],
        drops: Vec::new(),
        recipes,
    }
}

fn recipe(
    id: &str,
    name: &str,
    ingredients: &[(&str, u32)],
    level_required: u32,
    exp: u64,
) -> Recipe {
    Recipe {
        id: id.to_string(),
        name: name.to_string(),
        ingredients: ingredients
            .iter()
            .map(|(item, qty)| Ingredient::new(*item, *qty))
            .collect(),
        result_item: id.to_string(),
        result_quantity: 1,
        level_required,
        exp,
        buff: None,
    }
}

/// All built-in professions: four gathering skills, then forging and cooking.
pub fn builtin_professions() -> Vec<Profession> {
    vec![
        gathering(
            "mining",
            "Mining",
            "Mine ores and minerals",
            5000,
            10,
            vec![
                DropEntry::new("copper_ore", 60.0).with_quantity(1, 3),
                DropEntry::new("tin_ore", 30.0).with_quantity(1, 2),
                DropEntry::new("iron_ore", 10.0),
                DropEntry::new("coal", 20.0).with_quantity(1, 2),
                DropEntry::new("gemstone", 5.0),
            ],
        ),
        gathering(
            "foraging",
            "Foraging",
            "Gather herbs and plants",
            4000,
            8,
            vec![
                DropEntry::new("herb", 70.0).with_quantity(1, 4),
                DropEntry::new("berries", 50.0).with_quantity(2, 5),
                DropEntry::new("mushroom", 30.0).with_quantity(1, 3),
                DropEntry::new("rare_herb", 5.0),
            ],
        ),
        gathering(
            "lumberjack",
            "Lumberjack",
            "Chop trees for wood",
            6000,
            12,
            vec![
                DropEntry::new("wood", 80.0).with_quantity(2, 5),
                DropEntry::new("oak_wood", 30.0).with_quantity(1, 3),
                DropEntry::new("maple_wood", 10.0).with_quantity(1, 2),
                DropEntry::new("ancient_bark", 2.0),
            ],
        ),
        gathering(
            "hunting",
            "Hunting",
            "Hunt animals for resources",
            8000,
            15,
            vec![
                DropEntry::new("meat", 80.0).with_quantity(1, 3),
                DropEntry::new("hide", 60.0).with_quantity(1, 2),
                DropEntry::new("bone", 40.0).with_quantity(1, 3),
                DropEntry::new("rare_pelt", 5.0),
            ],
        ),
        crafting(
            "forging",
            "Forging",
            "Craft weapons and armor",
            10000,
            20,
            "hammer",
            vec![
                recipe(
                    "copper_sword",
                    "Copper Sword",
                    &[("copper_ore", 5), ("wood", 2)],
                    1,
                    15,
                ),
                recipe(
                    "iron_sword",
                    "Iron Sword",
                    &[("iron_ore", 10), ("coal", 3), ("wood", 3)],
                    5,
                    30,
                ),
            ],
        ),
        crafting(
            "cooking",
            "Cooking",
            "Cook food for buffs",
            7000,
            15,
            "cooking_pot",
            vec![
                recipe("cooked_meat", "Cooked Meat", &[("meat", 2)], 1, 10)
                    .with_buff(RecipeBuff::new(20, 0, 300)),
                recipe(
                    "hearty_stew",
                    "Hearty Stew",
                    &[("meat", 3), ("herb", 2), ("berries", 2)],
                    3,
                    20,
                )
                .with_buff(RecipeBuff::new(50, 5, 600)),
            ],
        ),
    ]
}

/// Look up a built-in profession by id.
pub fn profession(id: &str) -> Option<Profession> {
    builtin_professions().into_iter().find(|p| p.id == id)
}

//! Item catalog: lookup of base item definitions.

use super::types::{ItemDef, ItemType};
use crate::rarity::TierId;
use std::collections::BTreeMap;

/// Read-only access to base item definitions.
pub trait ItemCatalog {
    fn item(&self, id: &str) -> Option<&ItemDef>;

    /// Every definition, in catalog order.
    fn items(&self) -> &[ItemDef];

    fn items_with_tier(&self, tier: TierId) -> Vec<&ItemDef> {
        self.items().iter().filter(|i| i.tier() == tier).collect()
    }

    fn items_of_type(&self, item_type: ItemType) -> Vec<&ItemDef> {
        self.items()
            .iter()
            .filter(|i| i.item_type == item_type)
            .collect()
    }
}

/// In-memory catalog backed by a list of definitions.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<ItemDef>,
}

impl Catalog {
    pub fn new(items: Vec<ItemDef>) -> Self {
        Self { items }
    }

    /// Parse a JSON array of item definitions.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let items: Vec<ItemDef> = serde_json::from_str(json)?;
        Ok(Self::new(items))
    }

    /// The game's built-in item set.
    pub fn builtin() -> Self {
        Self::new(builtin_items())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemCatalog for Catalog {
    fn item(&self, id: &str) -> Option<&ItemDef> {
        self.items.iter().find(|i| i.id == id)
    }

    fn items(&self) -> &[ItemDef] {
        &self.items
    }
}

fn def(
    id: &str,
    name: &str,
    description: &str,
    item_type: ItemType,
    value: u64,
    rarity: TierId,
    stats: &[(&str, i64)],
) -> ItemDef {
    ItemDef {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        item_type,
        stats: stats
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect::<BTreeMap<_, _>>(),
        value,
        rarity: Some(rarity),
    }
}

fn builtin_items() -> Vec<ItemDef> {
    use ItemType::*;
    use TierId::*;

    vec![
        // Consumables
        def(
            "small_potion",
            "Small Potion",
            "Restores a little health",
            Consumable,
            10,
            Common,
            &[("hp", 30)],
        ),
        def(
            "medium_potion",
            "Medium Potion",
            "Restores some health",
            Consumable,
            25,
            Common,
            &[("hp", 80)],
        ),
        def(
            "greater_potion",
            "Greater Potion",
            "Restores a lot of health",
            Consumable,
            60,
            Uncommon,
            &[("hp", 200)],
        ),
        def(
            "elixir_of_life",
            "Elixir of Life",
            "Fully restores health",
            Consumable,
            2000,
            Legendary,
            &[("hp", 5000)],
        ),
        def(
            "antidote",
            "Antidote",
            "Cures poison",
            Consumable,
            15,
            Common,
            &[],
        ),
        def(
            "bandage",
            "Bandage",
            "Stops bleeding",
            Consumable,
            5,
            Common,
            &[("hp", 10)],
        ),
        // Weapons
        def(
            "copper_sword",
            "Copper Sword",
            "A soft but serviceable blade",
            Weapon,
            100,
            Common,
            &[("atk", 5)],
        ),
        def(
            "iron_sword",
            "Iron Sword",
            "A sturdy iron blade",
            Weapon,
            250,
            Uncommon,
            &[("atk", 12)],
        ),
        def(
            "steel_sword",
            "Steel Sword",
            "A finely tempered blade",
            Weapon,
            500,
            Rare,
            &[("atk", 20), ("crit", 2)],
        ),
        def(
            "dragonbone_sword",
            "Dragonbone Sword",
            "Carved from a dragon's bone",
            Weapon,
            2500,
            Epic,
            &[("atk", 45), ("crit", 5)],
        ),
        def(
            "excalibur",
            "Excalibur",
            "The sword of kings",
            Weapon,
            10000,
            Legendary,
            &[("atk", 90), ("crit", 10), ("spd", 3)],
        ),
        def(
            "godslayer",
            "Godslayer",
            "A blade that has felled gods",
            Weapon,
            50000,
            Mythic,
            &[("atk", 180), ("crit", 15), ("spd", 5)],
        ),
        // Armor
        def(
            "leather_armor",
            "Leather Armor",
            "Light protection",
            Armor,
            80,
            Common,
            &[("def", 4)],
        ),
        def(
            "chainmail",
            "Chainmail",
            "Interlocking iron rings",
            Armor,
            200,
            Uncommon,
            &[("def", 10), ("spd", -1)],
        ),
        // Tools
        def(
            "hammer",
            "Hammer",
            "Required for forging",
            Tool,
            50,
            Common,
            &[],
        ),
        def(
            "cooking_pot",
            "Cooking Pot",
            "Required for cooking",
            Tool,
            40,
            Common,
            &[],
        ),
        def("torch", "Torch", "Lights the way", Tool, 8, Common, &[]),
        // Mining
        def(
            "copper_ore",
            "Copper Ore",
            "Raw copper",
            Material,
            2,
            Common,
            &[],
        ),
        def("tin_ore", "Tin Ore", "Raw tin", Material, 3, Common, &[]),
        def("iron_ore", "Iron Ore", "Raw iron", Material, 6, Common, &[]),
        def(
            "coal",
            "Coal",
            "Fuel for the forge",
            Material,
            2,
            Common,
            &[],
        ),
        def(
            "gemstone",
            "Gemstone",
            "A glittering gem",
            Material,
            50,
            Rare,
            &[],
        ),
        // Foraging
        def(
            "herb",
            "Herb",
            "A common healing herb",
            Material,
            1,
            Common,
            &[],
        ),
        def(
            "berries",
            "Berries",
            "Sweet wild berries",
            Food,
            1,
            Common,
            &[("hp", 2)],
        ),
        def(
            "mushroom",
            "Mushroom",
            "Edible, probably",
            Food,
            2,
            Common,
            &[("hp", 3)],
        ),
        def(
            "rare_herb",
            "Rare Herb",
            "A potent herb",
            Material,
            30,
            Rare,
            &[],
        ),
        // Lumber
        def("wood", "Wood", "Plain timber", Material, 1, Common, &[]),
        def(
            "oak_wood",
            "Oak Wood",
            "Hard oak timber",
            Material,
            4,
            Common,
            &[],
        ),
        def(
            "maple_wood",
            "Maple Wood",
            "Fine maple timber",
            Material,
            8,
            Uncommon,
            &[],
        ),
        def(
            "ancient_bark",
            "Ancient Bark",
            "Bark from an ancient tree",
            Material,
            80,
            Epic,
            &[],
        ),
        // Hunting
        def("meat", "Meat", "Raw meat", Material, 2, Common, &[]),
        def("hide", "Hide", "Untanned hide", Material, 3, Common, &[]),
        def("bone", "Bone", "A sturdy bone", Material, 2, Common, &[]),
        def(
            "rare_pelt",
            "Rare Pelt",
            "A beautiful pelt",
            Material,
            60,
            Rare,
            &[],
        ),
        // Monster parts
        def(
            "dragon_scale",
            "Dragon Scale",
            "Harder than steel",
            Material,
            800,
            Epic,
            &[("def", 25)],
        ),
        def(
            "dragon_heart",
            "Dragon Heart",
            "Still warm",
            Material,
            3000,
            Legendary,
            &[],
        ),
        // Cooking results
        def(
            "cooked_meat",
            "Cooked Meat",
            "A simple hot meal",
            Food,
            6,
            Common,
            &[("hp", 20)],
        ),
        def(
            "hearty_stew",
            "Hearty Stew",
            "A filling stew",
            Food,
            20,
            Common,
            &[("hp", 50), ("atk", 5)],
        ),
    ]
}

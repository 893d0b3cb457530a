//! Built-in monsters.

use super::types::{Monster, MonsterStats};
use crate::loot::DropEntry;
use crate::rarity::TierId;

pub fn builtin_monsters() -> Vec<Monster> {
    vec![
        Monster {
            id: "goblin".to_string(),
            name: "Goblin".to_string(),
            level: 1,
            rarity: Some(TierId::Common),
            stats: MonsterStats {
                max_hp: 50,
                attack: 8,
                defense: 3,
                speed: 6,
                crit: 5,
            },
            exp: 15,
            gold: (2, 10),
            drops: vec![
                DropEntry::new("small_potion", 30.0).with_tier(TierId::Common),
                DropEntry::new("copper_sword", 10.0).with_tier(TierId::Common),
                DropEntry::new("iron_sword", 1.0).with_tier(TierId::Uncommon),
            ],
        },
        Monster {
            id: "orc_warlord".to_string(),
            name: "Orc Warlord".to_string(),
            level: 15,
            rarity: Some(TierId::Rare),
            stats: MonsterStats {
                max_hp: 300,
                attack: 35,
                defense: 20,
                speed: 8,
                crit: 10,
            },
            exp: 150,
            gold: (50, 200),
            drops: vec![
                DropEntry::new("greater_potion", 50.0).with_tier(TierId::Uncommon),
                DropEntry::new("steel_sword", 25.0).with_tier(TierId::Rare),
                DropEntry::new("dragonbone_sword", 5.0).with_tier(TierId::Epic),
                DropEntry::new("excalibur", 0.1).with_tier(TierId::Legendary),
            ],
        },
        Monster {
            id: "ancient_dragon".to_string(),
            name: "Ancient Dragon".to_string(),
            level: 50,
            rarity: Some(TierId::Legendary),
            stats: MonsterStats {
                max_hp: 5000,
                attack: 200,
                defense: 100,
                speed: 15,
                crit: 20,
            },
            exp: 5000,
            gold: (1000, 5000),
            drops: vec![
                DropEntry::new("elixir_of_life", 100.0).with_tier(TierId::Legendary),
                DropEntry::new("godslayer", 10.0).with_tier(TierId::Mythic),
                DropEntry::new("dragon_scale", 80.0).with_tier(TierId::Epic),
                DropEntry::new("dragon_heart", 30.0).with_tier(TierId::Legendary),
            ],
        },
    ]
}

pub fn monster(id: &str) -> Option<Monster> {
    builtin_monsters().into_iter().find(|m| m.id == id)
}

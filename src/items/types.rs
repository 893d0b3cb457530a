use crate::rarity::TierId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Consumable,
    Weapon,
    Armor,
    Material,
    Tool,
    Food,
}

impl ItemType {
    pub fn name(&self) -> &'static str {
        match self {
            ItemType::Consumable => "Consumable",
            ItemType::Weapon => "Weapon",
            ItemType::Armor => "Armor",
            ItemType::Material => "Material",
            ItemType::Tool => "Tool",
            ItemType::Food => "Food",
        }
    }
}

/// Base item template from the catalog. Never modified by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    #[serde(default)]
    pub stats: BTreeMap<String, i64>,
    #[serde(default)]
    pub value: u64,
    /// Catalog rarity tag. Untagged items count as common.
    #[serde(default)]
    pub rarity: Option<TierId>,
}

impl ItemDef {
    pub fn tier(&self) -> TierId {
        self.rarity.unwrap_or(TierId::Common)
    }

    /// True if the catalog tags this item above common.
    pub fn has_rare_tag(&self) -> bool {
        self.rarity.map(|t| !t.is_common()).unwrap_or(false)
    }
}

/// A tier-scaled copy of an item definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancedItem {
    pub item_id: String,
    pub tier: TierId,
    pub name: String,
    pub description: String,
    pub item_type: ItemType,
    pub stats: BTreeMap<String, i64>,
    pub value: u64,
}

/// An item instance and how many of it were granted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDrop {
    pub item: EnhancedItem,
    pub quantity: u32,
}

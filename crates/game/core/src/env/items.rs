use crate::env::RngSource;
use crate::state::{EquipmentModifier, ItemHandle};

/// Source of randomly generated loot.
///
/// Rarity and generation rules belong to the implementation; the core only
/// asks for one item and then scales it to the current map.
pub trait ItemOracle: Send + Sync {
    /// Draws one random item.
    fn random_item(&self, rng: &mut dyn RngSource) -> ItemDefinition;

    /// Scales `item` in place to the power level of a map.
    fn adjust(&self, item: &mut ItemDefinition, map_level: u32, rng: &mut dyn RngSource);
}

/// Concrete item instance.
///
/// # Design: Base + Kind Pattern
///
/// - Base struct holds common fields (handle, name, level, value)
/// - `kind` enum holds type-specific data (heal amount, equipment bonuses)
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub handle: ItemHandle,
    pub name: String,
    pub kind: ItemKind,
    /// Power level the item was scaled to; 1 for unadjusted templates.
    #[cfg_attr(feature = "serde", serde(default = "ItemDefinition::base_level"))]
    pub level: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sell_value: u32,
}

impl ItemDefinition {
    pub fn new(handle: ItemHandle, name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            handle,
            name: name.into(),
            kind,
            level: Self::base_level(),
            sell_value: 0,
        }
    }

    pub fn with_sell_value(mut self, sell_value: u32) -> Self {
        self.sell_value = sell_value;
        self
    }

    /// Name as it appears in dialog lines.
    pub fn dialog_name(&self) -> &str {
        &self.name
    }

    /// Stat deltas applied while the item is equipped; `None` for non-equipment.
    pub fn modifier(&self) -> Option<EquipmentModifier> {
        match self.kind {
            ItemKind::Equipment { modifier, .. } => Some(modifier),
            _ => None,
        }
    }

    const fn base_level() -> u32 {
        1
    }
}

/// Item type with type-specific data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// Restores hp when consumed.
    Potion { heal: i32 },

    /// Equippable gear with flat stat bonuses.
    Equipment {
        slot: EquipSlot,
        modifier: EquipmentModifier,
    },

    /// Sellable loot with no use.
    Misc,
}

/// Body slot an equipment piece occupies.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EquipSlot {
    Helmet,
    Necklace,
    Armor,
    Weapon,
    Shield,
    Gloves,
    Ring,
    Boots,
}

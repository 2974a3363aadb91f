//! [`progression_core::ItemOracle`] backed by a fixed item catalog.
use progression_core::{ErrorSeverity, GameError, ItemDefinition, ItemKind, ItemOracle, RngSource};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("item catalog is empty")]
    Empty,
}

impl GameError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "CATALOG_EMPTY",
        }
    }
}

/// Draws loot uniformly from a catalog of level 1 templates.
///
/// `adjust` scales a template to the map it dropped on:
///
/// - `level` becomes the map level and `sell_value` is multiplied by it
/// - every non-zero equipment bonus moves away from zero by a draw in
///   `[0, STAT_GROWTH_PER_LEVEL · (level − 1)]`, in `max_hp`, `damage`,
///   `accuracy` order
/// - potion heals grow by a draw in `[0, HEAL_GROWTH_PER_LEVEL · (level − 1)]`
///
/// Level 1 maps consume no draws.
#[derive(Clone, Debug)]
pub struct CatalogItemOracle {
    items: Vec<ItemDefinition>,
}

impl CatalogItemOracle {
    pub const STAT_GROWTH_PER_LEVEL: u32 = 1;
    pub const HEAL_GROWTH_PER_LEVEL: u32 = 5;

    /// # Errors
    ///
    /// Returns [`CatalogError::Empty`] when there is nothing to drop.
    pub fn new(items: Vec<ItemDefinition>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[ItemDefinition] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemOracle for CatalogItemOracle {
    fn random_item(&self, rng: &mut dyn RngSource) -> ItemDefinition {
        let index = rng.below(self.items.len() as u32) as usize;
        // `new` rejects empty catalogs, so `index` is always in bounds.
        let item = self.items[index].clone();
        tracing::debug!(handle = %item.handle, name = %item.name, "drew catalog item");
        item
    }

    fn adjust(&self, item: &mut ItemDefinition, map_level: u32, rng: &mut dyn RngSource) {
        let level = map_level.max(1);
        let extra = level - 1;
        item.level = level;
        item.sell_value = item.sell_value.saturating_mul(level);

        match &mut item.kind {
            ItemKind::Potion { heal } => {
                *heal = grow(
                    *heal,
                    extra.saturating_mul(Self::HEAL_GROWTH_PER_LEVEL),
                    rng,
                );
            }
            ItemKind::Equipment { modifier, .. } => {
                let max_growth = extra.saturating_mul(Self::STAT_GROWTH_PER_LEVEL);
                modifier.max_hp = grow(modifier.max_hp, max_growth, rng);
                modifier.damage = grow(modifier.damage, max_growth, rng);
                modifier.accuracy = grow(modifier.accuracy, max_growth, rng);
            }
            ItemKind::Misc => {}
        }
    }
}

/// Moves a non-zero bonus away from zero; cursed (negative) bonuses get worse.
fn grow(bonus: i32, max_growth: u32, rng: &mut dyn RngSource) -> i32 {
    if bonus == 0 || max_growth == 0 {
        return bonus;
    }
    let step = rng.range(0, max_growth).min(i32::MAX as u32) as i32;
    bonus.saturating_add(step.saturating_mul(bonus.signum()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use progression_core::{EquipSlot, EquipmentModifier, ItemHandle, ScriptedRng};

    fn catalog() -> CatalogItemOracle {
        CatalogItemOracle::new(vec![
            ItemDefinition::new(ItemHandle(1), "Red Potion", ItemKind::Potion { heal: 20 })
                .with_sell_value(4),
            ItemDefinition::new(
                ItemHandle(2),
                "Cursed Blade",
                ItemKind::Equipment {
                    slot: EquipSlot::Weapon,
                    modifier: EquipmentModifier::new(10, 2, -1),
                },
            )
            .with_sell_value(12),
            ItemDefinition::new(ItemHandle(3), "Bone", ItemKind::Misc).with_sell_value(1),
        ])
        .unwrap()
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let err = CatalogItemOracle::new(Vec::new()).unwrap_err();
        assert_eq!(err, CatalogError::Empty);
        assert_eq!(err.error_code(), "CATALOG_EMPTY");
    }

    #[test]
    fn random_item_indexes_catalog() {
        let oracle = catalog();
        let mut rng = ScriptedRng::new([1, 7]);
        assert_eq!(oracle.random_item(&mut rng).name, "Cursed Blade");
        // Out-of-range script values clamp to the last entry.
        assert_eq!(oracle.random_item(&mut rng).name, "Bone");
    }

    #[test]
    fn adjust_scales_equipment_away_from_zero() {
        let oracle = catalog();
        let mut item = oracle.items()[1].clone();
        let mut rng = ScriptedRng::new([2, 1, 2]);

        oracle.adjust(&mut item, 3, &mut rng);

        assert_eq!(item.level, 3);
        assert_eq!(item.sell_value, 36);
        assert_eq!(item.modifier(), Some(EquipmentModifier::new(12, 3, -3)));
        assert_eq!(rng.consumed(), 3);
    }

    #[test]
    fn adjust_grows_potions() {
        let oracle = catalog();
        let mut item = oracle.items()[0].clone();
        let mut rng = ScriptedRng::new([7]);

        oracle.adjust(&mut item, 2, &mut rng);

        assert_eq!(item.kind, ItemKind::Potion { heal: 25 });
    }

    #[test]
    fn level_one_consumes_no_draws() {
        let oracle = catalog();
        let mut item = oracle.items()[1].clone();
        let mut rng = ScriptedRng::new([5, 5, 5]);

        oracle.adjust(&mut item, 1, &mut rng);

        assert_eq!(item, oracle.items()[1]);
        assert_eq!(rng.consumed(), 0);
    }
}

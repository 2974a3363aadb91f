//! Flat stat bonuses granted by equipped items.

/// Stat deltas an item grants while equipped.
///
/// Equipping adds every field and unequipping subtracts the same fields, so
/// the pair is an exact inverse on the ledger's stats. Only flat bonuses are
/// representable here; a percentage-based bonus would break that symmetry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EquipmentModifier {
    pub max_hp: i32,
    /// Added to both ends of the damage range.
    pub damage: i32,
    pub accuracy: i32,
}

impl EquipmentModifier {
    pub const fn new(max_hp: i32, damage: i32, accuracy: i32) -> Self {
        Self {
            max_hp,
            damage,
            accuracy,
        }
    }
}

impl core::ops::Neg for EquipmentModifier {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.max_hp, -self.damage, -self.accuracy)
    }
}

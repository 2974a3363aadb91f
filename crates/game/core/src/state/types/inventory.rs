//! Player inventory.

use arrayvec::ArrayVec;

use crate::config::ProgressionConfig;
use crate::env::ItemDefinition;
use crate::error::{ErrorSeverity, GameError};

/// Container loot is deposited into.
///
/// Only the two queries encounter rolls need; slot management, stacking, and
/// equipping from the bag belong to the implementation.
pub trait Inventory {
    fn is_full(&self) -> bool;

    /// Stores `item`.
    ///
    /// # Errors
    ///
    /// Returns `InventoryError::Full` when there is no free slot.
    fn add_item(&mut self, item: ItemDefinition) -> Result<(), InventoryError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    #[error("inventory is full ({capacity} slots)")]
    Full { capacity: usize },
}

impl GameError for InventoryError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Full { .. } => "INVENTORY_FULL",
        }
    }
}

/// Fixed-capacity inventory backed by an `ArrayVec`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryState {
    pub items: ArrayVec<ItemDefinition, { ProgressionConfig::MAX_INVENTORY_SLOTS }>,
}

impl InventoryState {
    pub const CAPACITY: usize = ProgressionConfig::MAX_INVENTORY_SLOTS;

    pub fn empty() -> Self {
        Self {
            items: ArrayVec::new(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.items.iter()
    }

    /// Removes and returns the item in `slot`, shifting later items down.
    pub fn take(&mut self, slot: usize) -> Option<ItemDefinition> {
        if slot < self.items.len() {
            Some(self.items.remove(slot))
        } else {
            None
        }
    }
}

impl Inventory for InventoryState {
    fn is_full(&self) -> bool {
        self.items.is_full()
    }

    fn add_item(&mut self, item: ItemDefinition) -> Result<(), InventoryError> {
        self.items
            .try_push(item)
            .map_err(|_| InventoryError::Full {
                capacity: Self::CAPACITY,
            })
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

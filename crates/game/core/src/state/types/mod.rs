pub mod common;
pub mod equipment;
pub mod inventory;
pub mod item;
pub mod ledger;

pub use common::{CardinalDirection, MapPoint, Position};
pub use equipment::EquipmentModifier;
pub use inventory::{Inventory, InventoryError, InventoryState};
pub use item::ItemHandle;
pub use ledger::{LedgerViolation, PendingLevelUp, StatLedger};

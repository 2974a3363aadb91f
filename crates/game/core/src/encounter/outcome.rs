use crate::env::ItemDefinition;

/// Which encounter table produced a report.
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
pub enum EncounterTile {
    /// Beneficial "question mark" tile.
    Reward,
    /// Adversarial "exclamation mark" tile.
    Curse,
}

/// Machine-readable result of one encounter roll.
///
/// The ledger mutation described here has already been applied when the
/// outcome is returned.
#[derive(Clone, Debug, PartialEq, Eq, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EncounterOutcome {
    /// The tile did not activate.
    Nothing,
    GoldGain(u32),
    HealGain(i32),
    /// `added` is false when the inventory was full and the item was discarded.
    ItemDrop { item: ItemDefinition, added: bool },
    /// `lethal` marks hp reaching zero; hp has been reset to max in that case.
    DamageTaken { amount: i32, lethal: bool },
    /// Amount rolled, which can exceed the gold actually lost.
    GoldLoss(u32),
}

impl EncounterOutcome {
    pub fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }
}

/// Outcome paired with the dialog lines describing it, in display order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterReport {
    pub tile: EncounterTile,
    pub outcome: EncounterOutcome,
    pub messages: Vec<String>,
}

impl EncounterReport {
    pub(crate) fn new(tile: EncounterTile, outcome: EncounterOutcome) -> Self {
        Self {
            tile,
            outcome,
            messages: Vec::new(),
        }
    }

    pub(crate) fn line(mut self, message: impl Into<String>) -> Self {
        self.messages.push(message.into());
        self
    }

    /// True when the tile activated.
    pub fn triggered(&self) -> bool {
        !self.outcome.is_nothing()
    }
}

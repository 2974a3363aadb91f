//! Adversarial "exclamation mark" tile.

use crate::config::ProgressionConfig;
use crate::encounter::{EncounterOutcome, EncounterReport, EncounterTile, sum_draws};
use crate::env::RngSource;
use crate::state::StatLedger;

const HEADER: &str = "The random tile cursed you!";
const MISS: &str = "The random tile did not affect you.";
const LETHAL: &str = "You were overwhelmed, but the curse left you standing.";

/// Rolls the curse table and applies the result.
///
/// A damage roll that drops hp to zero or below restores hp to max and is
/// reported as lethal. Death handling belongs to the caller; the refill is
/// kept as the tile's documented behavior until that flow exists.
pub fn roll_curse(
    ledger: &mut StatLedger,
    map_level: u32,
    rng: &mut dyn RngSource,
    config: &ProgressionConfig,
) -> EncounterReport {
    if !rng.chance(config.tile_interaction_percent) {
        tracing::debug!(map_level, "curse tile idle");
        return EncounterReport::new(EncounterTile::Curse, EncounterOutcome::Nothing).line(MISS);
    }

    let table = &config.curse;
    let report = if rng.chance(table.damage_percent) {
        let level = i32::try_from(map_level).unwrap_or(i32::MAX);
        let amount = table.damage_per_level.saturating_mul(level);
        let remaining = ledger.hp().saturating_sub(amount);
        let lethal = remaining <= 0;
        if lethal {
            ledger.set_hp(ledger.max_hp());
        } else {
            ledger.set_hp(remaining);
        }

        let report = EncounterReport::new(
            EncounterTile::Curse,
            EncounterOutcome::DamageTaken { amount, lethal },
        )
        .line(HEADER)
        .line(format!("It damaged you for {amount} damage!"));
        if lethal { report.line(LETHAL) } else { report }
    } else {
        let stolen = sum_draws(rng, map_level, table.theft_per_level);
        let lost = ledger.remove_gold(stolen);
        tracing::debug!(stolen, lost, "curse stole gold");
        EncounterReport::new(EncounterTile::Curse, EncounterOutcome::GoldLoss(stolen))
            .line(HEADER)
            .line(format!("It caused you to lose {stolen} gold!"))
    };

    tracing::debug!(
        map_level,
        outcome = report.outcome.as_ref(),
        "curse tile activated"
    );
    report
}

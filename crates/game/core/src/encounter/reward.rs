//! Beneficial "question mark" tile.
//!
//! When the tile activates, `k ∈ [0, 100)` picks the branch:
//!
//! ```text
//! [0, gold_threshold)              gold: map_level draws summed
//! [gold_threshold, heal_threshold) heal: heal_percent of max hp
//! [heal_threshold, 100)            item: one random item, scaled to the map
//! ```

use crate::config::ProgressionConfig;
use crate::encounter::{EncounterOutcome, EncounterReport, EncounterTile, sum_draws};
use crate::env::{ItemOracle, RngSource};
use crate::state::{Inventory, StatLedger};

const HEADER: &str = "The random tile gave something!";
const MISS: &str = "The random tile did not give anything.";

/// Rolls the reward table and applies the result.
pub fn roll_reward(
    ledger: &mut StatLedger,
    inventory: &mut dyn Inventory,
    items: &dyn ItemOracle,
    map_level: u32,
    rng: &mut dyn RngSource,
    config: &ProgressionConfig,
) -> EncounterReport {
    if !rng.chance(config.tile_interaction_percent) {
        tracing::debug!(map_level, "reward tile idle");
        return EncounterReport::new(EncounterTile::Reward, EncounterOutcome::Nothing).line(MISS);
    }

    let table = &config.reward;
    let k = rng.below(100);
    let report = if k < table.gold_threshold {
        let gold = sum_draws(rng, map_level, table.gold_per_level);
        ledger.add_gold(gold);
        EncounterReport::new(EncounterTile::Reward, EncounterOutcome::GoldGain(gold))
            .line(HEADER)
            .line(format!("You obtained {gold} gold!"))
    } else if k < table.heal_threshold {
        let heal = ledger.max_hp() * table.heal_percent / 100;
        ledger.heal(heal);
        EncounterReport::new(EncounterTile::Reward, EncounterOutcome::HealGain(heal))
            .line(HEADER)
            .line(format!("It healed you for {heal} hp!"))
    } else {
        drop_item(inventory, items, map_level, rng)
    };

    tracing::debug!(
        map_level,
        k,
        outcome = report.outcome.as_ref(),
        "reward tile activated"
    );
    report
}

fn drop_item(
    inventory: &mut dyn Inventory,
    items: &dyn ItemOracle,
    map_level: u32,
    rng: &mut dyn RngSource,
) -> EncounterReport {
    let mut item = items.random_item(rng);
    items.adjust(&mut item, map_level, rng);

    let dropped = format!("It dropped a {}!", item.dialog_name());
    let added = if inventory.is_full() {
        false
    } else {
        match inventory.add_item(item.clone()) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(%err, "inventory rejected dropped item");
                false
            }
        }
    };

    let note = if added {
        "The item was added to your inventory."
    } else {
        "Oh no, too bad your inventory was full."
    };

    EncounterReport::new(
        EncounterTile::Reward,
        EncounterOutcome::ItemDrop { item, added },
    )
    .line(HEADER)
    .line(dropped)
    .line(note)
}

//! Traits describing the collaborators the progression rules consult.
//!
//! Oracles expose loot generation, tile-map geometry, and the experience
//! curve. The [`Env`] aggregate bundles them so the engine can reach
//! everything it needs without hard coupling to concrete implementations.
//! Randomness is not part of the aggregate: it is mutable and player-scoped,
//! so every stochastic operation takes it as a separate `&mut dyn RngSource`.
mod curve;
mod error;
mod items;
mod map;
mod rng;

pub use curve::{ExperienceCurve, FlatCurve, StandardCurve};
pub use error::OracleError;
pub use items::{EquipSlot, ItemDefinition, ItemKind, ItemOracle};
pub use map::{MapDimensions, TeleportGrid, TileMapOracle};
pub use rng::{PcgRng, RngSource, ScriptedRng, compute_seed};

/// Aggregates read-only oracles required by the engine.
pub struct Env<'a, I, M, X>
where
    I: ItemOracle + ?Sized,
    M: TileMapOracle + ?Sized,
    X: ExperienceCurve + ?Sized,
{
    items: Option<&'a I>,
    map: Option<&'a M>,
    curve: Option<&'a X>,
}

// Manual impls: derives would demand `I: Clone` etc., which trait objects are not.
impl<I, M, X> Clone for Env<'_, I, M, X>
where
    I: ItemOracle + ?Sized,
    M: TileMapOracle + ?Sized,
    X: ExperienceCurve + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<I, M, X> Copy for Env<'_, I, M, X>
where
    I: ItemOracle + ?Sized,
    M: TileMapOracle + ?Sized,
    X: ExperienceCurve + ?Sized,
{
}

pub type GameEnv<'a> =
    Env<'a, dyn ItemOracle + 'a, dyn TileMapOracle + 'a, dyn ExperienceCurve + 'a>;

impl<'a, I, M, X> Env<'a, I, M, X>
where
    I: ItemOracle + ?Sized,
    M: TileMapOracle + ?Sized,
    X: ExperienceCurve + ?Sized,
{
    pub fn new(items: Option<&'a I>, map: Option<&'a M>, curve: Option<&'a X>) -> Self {
        Self { items, map, curve }
    }

    pub fn with_all(items: &'a I, map: &'a M, curve: &'a X) -> Self {
        Self::new(Some(items), Some(map), Some(curve))
    }

    pub fn empty() -> Self {
        Self {
            items: None,
            map: None,
            curve: None,
        }
    }

    /// Returns the ItemOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ItemsNotAvailable` if no item oracle was provided.
    pub fn items(&self) -> Result<&'a I, OracleError> {
        self.items.ok_or(OracleError::ItemsNotAvailable)
    }

    /// Returns the TileMapOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::MapNotAvailable` if no map oracle was provided.
    pub fn map(&self) -> Result<&'a M, OracleError> {
        self.map.ok_or(OracleError::MapNotAvailable)
    }

    /// Returns the ExperienceCurve, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::CurveNotAvailable` if no curve was provided.
    pub fn curve(&self) -> Result<&'a X, OracleError> {
        self.curve.ok_or(OracleError::CurveNotAvailable)
    }
}

impl<'a, I, M, X> Env<'a, I, M, X>
where
    I: ItemOracle + 'a,
    M: TileMapOracle + 'a,
    X: ExperienceCurve + 'a,
{
    /// Converts this environment into a trait-object based `GameEnv`.
    pub fn into_game_env(self) -> GameEnv<'a> {
        let items: Option<&'a dyn ItemOracle> = self.items.map(|items| items as _);
        let map: Option<&'a dyn TileMapOracle> = self.map.map(|map| map as _);
        let curve: Option<&'a dyn ExperienceCurve> = self.curve.map(|curve| curve as _);
        Env::new(items, map, curve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Position;

    #[test]
    fn missing_oracles_are_reported() {
        let env = GameEnv::empty();
        assert_eq!(env.items().err(), Some(OracleError::ItemsNotAvailable));
        assert_eq!(env.map().err(), Some(OracleError::MapNotAvailable));
        assert_eq!(env.curve().err(), Some(OracleError::CurveNotAvailable));
    }

    struct NoLoot;

    impl ItemOracle for NoLoot {
        fn random_item(&self, _rng: &mut dyn RngSource) -> ItemDefinition {
            ItemDefinition::new(crate::state::ItemHandle(0), "Pebble", ItemKind::Misc)
        }

        fn adjust(&self, item: &mut ItemDefinition, map_level: u32, _rng: &mut dyn RngSource) {
            item.level = map_level;
        }
    }

    #[test]
    fn converts_concrete_env_to_game_env() {
        let items = NoLoot;
        let map = TeleportGrid::new(MapDimensions::new(4, 4), 16).with_pad(Position::new(1, 1));
        let curve = StandardCurve;
        let env = Env::with_all(&items, &map, &curve).into_game_env();

        let mut rng = ScriptedRng::default();
        let item = env.items().map(|items| items.random_item(&mut rng));
        assert_eq!(item.map(|item| item.name), Ok("Pebble".to_string()));
        assert!(env.map().is_ok());
        assert_eq!(env.curve().map(|c| c.max_exp(1, 3)), Ok(13));
    }
}

//! Oracle access errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors that occur when a required oracle is missing from the [`Env`](super::Env).
///
/// The engine cannot roll loot, teleport, or level up without the matching
/// collaborator, so all of these are fatal.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// ItemOracle is not available in the environment.
    #[error("ItemOracle not available")]
    ItemsNotAvailable,

    /// TileMapOracle is not available in the environment.
    #[error("TileMapOracle not available")]
    MapNotAvailable,

    /// ExperienceCurve is not available in the environment.
    #[error("ExperienceCurve not available")]
    CurveNotAvailable,
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            ItemsNotAvailable => "ORACLE_ITEMS_NOT_AVAILABLE",
            MapNotAvailable => "ORACLE_MAP_NOT_AVAILABLE",
            CurveNotAvailable => "ORACLE_CURVE_NOT_AVAILABLE",
        }
    }
}

//! Data-driven content for the progression engine.
//!
//! This crate provides loaders for RON/TOML data files and the oracles built
//! from them:
//! - Progression configuration (TOML)
//! - Item catalogs (RON), served by [`CatalogItemOracle`]
//! - Teleport pad maps (RON)
//!
//! Content is consumed through `progression-core` oracle traits and never
//! appears in player state.

pub mod oracle;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use oracle::{CatalogError, CatalogItemOracle};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, ItemCatalog, ItemLoader, MapLoader};

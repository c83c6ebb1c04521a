//! Data-driven content for the chase game.
//!
//! This crate turns files into core types:
//! - Terrain layouts (plain text, one glyph per cell)
//! - Game configuration (TOML)
//!
//! Content is read once at startup and handed to the engine; it never appears
//! in game state.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentConfig, ContentFactory, LoadResult, TerrainLoader};

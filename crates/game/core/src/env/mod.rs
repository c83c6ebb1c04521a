//! The stage an actor plays on.
//!
//! [`TerrainMap`] is the static walkability grid, [`ActorMap`] the spatial
//! index of placed actors, and [`Stage`] bundles both into the context that
//! walk commands and spawning consult. Nothing here is global: a stage is
//! built per engine and passed explicitly.
mod actor_map;
mod error;
mod rng;
mod stage;
mod terrain;

pub use actor_map::ActorMap;
pub use error::StageError;
pub use rng::SpawnRng;
pub use stage::Stage;
pub use terrain::{
    MapDimensions, Terrain, TerrainError, TerrainId, TerrainMap, TerrainPalette, TerrainProps,
};

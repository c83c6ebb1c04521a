//! Per-actor game state.
//!
//! This module owns the value types shared by every layer (coordinates,
//! directions, colours) and the actor roster with its status, sprite and
//! skill. Placement on the grid is tracked separately by the stage.
pub mod types;

pub use types::{
    Actor, ActorId, Actors, Color, Coordinate, Direction, FlagCounters, FrameCounter, Graphic,
    RankingEntry, Skill, SkillKind, Sprite, Status, StatusFlag,
};

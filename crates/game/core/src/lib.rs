//! Deterministic rules for a multiplayer tile chase.
//!
//! `chase-core` holds the game state and the rules that mutate it: the stage
//! (terrain plus actor placement), per-actor status and skills, walk and tag
//! resolution, player modes, scenes and the frame-tick scheduler. It performs
//! no I/O. Hosts feed per-frame [`PlayerInput`] into [`GameEngine::update`],
//! hand a [`Canvas`] to [`GameEngine::render`], and drain [`GameEvent`]s for
//! audio and logging.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod player;
pub mod render;
pub mod state;

pub use action::{ActionContext, TouchCommand, WalkCommand, WalkOutcome};
pub use config::GameConfig;
pub use engine::{
    GameEngine, GameEvent, SceneController, SceneKind, ScheduledTask, Scheduler, SoundCue,
    StatusTask,
};
pub use env::{
    ActorMap, MapDimensions, SpawnRng, Stage, StageError, Terrain, TerrainError, TerrainMap,
    TerrainPalette, TerrainProps,
};
pub use error::{ErrorSeverity, GameError};
pub use player::{Keys, Player, PlayerInput, PlayerMode, Players};
pub use render::{Canvas, DrawCommand, RecordingCanvas};
pub use state::{
    Actor, ActorId, Actors, Color, Coordinate, Direction, FrameCounter, Graphic, RankingEntry,
    Skill, SkillKind, Sprite, Status, StatusFlag,
};

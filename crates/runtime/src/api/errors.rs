//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from content loading and the engine so hosts can bubble
//! them up with consistent context.

use chase_core::{ErrorSeverity, GameError, StageError, TerrainError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Stage(#[from] StageError),

    #[error("invalid terrain layout")]
    Terrain(#[from] TerrainError),

    #[error(transparent)]
    Content(#[from] anyhow::Error),

    #[error("received {found} inputs but only {expected} player slots exist")]
    InputCount { expected: usize, found: usize },

    #[error("runtime halted after an internal error")]
    Halted,
}

impl RuntimeError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Stage(err) => err.severity(),
            Self::Terrain(_) | Self::Content(_) | Self::Halted => ErrorSeverity::Fatal,
            Self::InputCount { .. } => ErrorSeverity::Validation,
        }
    }
}

//! Stage errors.
//!
//! Raised when the actor map and the roster disagree about who stands where.
//! Any of these during play means the stage state is corrupted.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{ActorId, Coordinate};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StageError {
    /// Pickup from a coordinate nobody occupies.
    #[error("no actor at {coordinate}")]
    Vacant { coordinate: Coordinate },

    /// The actor has no coordinate in the actor map.
    #[error("actor {actor} is not placed on the stage")]
    NotPlaced { actor: ActorId },

    /// A step would land on a cell another actor holds.
    #[error("{coordinate} is already held by actor {occupant}")]
    Occupied {
        coordinate: Coordinate,
        occupant: ActorId,
    },

    /// The actor id does not belong to the roster.
    #[error("actor {actor} is not part of the roster")]
    UnknownActor { actor: ActorId },

    /// Every walkable coordinate is taken.
    #[error("no open walkable coordinate left on the stage")]
    NoOpenCoordinate,
}

impl GameError for StageError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Vacant { .. }
            | Self::NotPlaced { .. }
            | Self::Occupied { .. }
            | Self::UnknownActor { .. } => ErrorSeverity::Internal,
            Self::NoOpenCoordinate => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Vacant { .. } => "STAGE_VACANT",
            Self::NotPlaced { .. } => "STAGE_NOT_PLACED",
            Self::Occupied { .. } => "STAGE_OCCUPIED",
            Self::UnknownActor { .. } => "STAGE_UNKNOWN_ACTOR",
            Self::NoOpenCoordinate => "STAGE_NO_OPEN_COORDINATE",
        }
    }
}

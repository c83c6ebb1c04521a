//! Notifications recorded by the engine for the host to drain each frame.

use super::scene::SceneKind;
use crate::state::{ActorId, Coordinate};

/// Named sound effects. The display form is the cue name handed to the
/// audio player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "kebab-case")]
pub enum SoundCue {
    Touch,
    Join,
    BgmStart,
}

impl SoundCue {
    pub fn name(self) -> &'static str {
        self.into()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    Sound(SoundCue),
    Joined {
        actor: ActorId,
        at: Coordinate,
        chaser: bool,
    },
    Left {
        actor: ActorId,
    },
    Moved {
        actor: ActorId,
        from: Coordinate,
        to: Coordinate,
    },
    Tagged {
        tagger: ActorId,
        tagged: ActorId,
    },
    SceneChanged {
        from: SceneKind,
        to: SceneKind,
    },
}

//! Timed status effects.

use super::scheduler::ScheduledTask;
use crate::state::{ActorId, Actors, Color, FrameCounter, StatusFlag};

/// Deferred change to one actor's status or sprite.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusTask {
    /// Releases one activation of `flag` on expiry.
    Release { actor: ActorId, flag: StatusFlag },

    /// Toggles the sprite between `color` and its base colour every
    /// `counter` period. On expiry the base colour is restored and the
    /// `ForceVisible` hold taken when the flash started is released.
    Flash {
        actor: ActorId,
        color: Color,
        counter: FrameCounter,
    },
}

impl StatusTask {
    pub fn actor(&self) -> ActorId {
        match self {
            Self::Release { actor, .. } | Self::Flash { actor, .. } => *actor,
        }
    }
}

impl ScheduledTask for StatusTask {
    type Target = Actors;

    fn on_tick(&mut self, actors: &mut Actors) {
        if let Self::Flash {
            actor,
            color,
            counter,
        } = self
        {
            counter.tick();
            if counter.is_over()
                && let Some(target) = actors.get_mut(*actor)
            {
                target.sprite_mut().toggle_color(*color);
            }
        }
    }

    fn on_expire(self, actors: &mut Actors) {
        match self {
            Self::Release { actor, flag } => {
                if let Some(target) = actors.get_mut(actor) {
                    target.status_mut().release(flag);
                }
            }
            Self::Flash { actor, .. } => {
                if let Some(target) = actors.get_mut(actor) {
                    target.sprite_mut().reset_color();
                    target.status_mut().release(StatusFlag::ForceVisible);
                }
            }
        }
    }
}

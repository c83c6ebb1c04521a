//! Commands an actor performs against the stage.
//!
//! Commands borrow everything they touch through an [`ActionContext`], built
//! by the engine from its own fields for the duration of one update.

mod touch;
mod walk;

pub use touch::TouchCommand;
pub use walk::{WalkCommand, WalkOutcome};

use crate::config::GameConfig;
use crate::engine::{GameEvent, Scheduler, SoundCue, StatusTask};
use crate::env::{SpawnRng, Stage, StageError};
use crate::state::{Actor, ActorId, Actors, Color, FrameCounter, StatusFlag};

/// Mutable view over the engine state a command may touch.
pub struct ActionContext<'a> {
    pub config: &'a GameConfig,
    pub stage: &'a mut Stage,
    pub actors: &'a mut Actors,
    pub scheduler: &'a mut Scheduler<StatusTask>,
    pub rng: &'a mut SpawnRng,
    pub events: &'a mut Vec<GameEvent>,
}

impl ActionContext<'_> {
    pub fn actor(&self, id: ActorId) -> Result<&Actor, StageError> {
        self.actors
            .get(id)
            .ok_or(StageError::UnknownActor { actor: id })
    }

    pub fn actor_mut(&mut self, id: ActorId) -> Result<&mut Actor, StageError> {
        self.actors
            .get_mut(id)
            .ok_or(StageError::UnknownActor { actor: id })
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn play(&mut self, cue: SoundCue) {
        self.events.push(GameEvent::Sound(cue));
    }

    /// Activates `flag` now and schedules its release after `frames` ticks.
    pub fn hold(&mut self, id: ActorId, flag: StatusFlag, frames: u32) -> Result<(), StageError> {
        self.actor_mut(id)?.status_mut().set(flag);
        self.scheduler
            .schedule(frames, StatusTask::Release { actor: id, flag });
        Ok(())
    }

    /// Flashes the sprite with `color` for `frames` ticks, keeping the actor
    /// visible while it lasts.
    pub fn flash(
        &mut self,
        id: ActorId,
        color: Color,
        interval: u32,
        frames: u32,
    ) -> Result<(), StageError> {
        self.actor_mut(id)?
            .status_mut()
            .set(StatusFlag::ForceVisible);
        self.scheduler.schedule(
            frames,
            StatusTask::Flash {
                actor: id,
                color,
                counter: FrameCounter::new(interval),
            },
        );
        Ok(())
    }

    /// Stops the actor for the freeze duration and flashes it black.
    pub fn freeze(&mut self, id: ActorId) -> Result<(), StageError> {
        let frames = self.config.freeze_frames;
        let interval = self.config.freeze_flash_interval;
        self.hold(id, StatusFlag::Wait, frames)?;
        self.flash(id, Color::Black, interval, frames)
    }
}


#[cfg(test)]
mod tests {
    use super::fixture::Fixture;
    use super::*;

    #[test]
    fn freeze_waits_and_flashes_for_the_same_duration() {
        let mut fx = Fixture::new();
        let id = ActorId(2);
        fx.ctx().freeze(id).unwrap();

        assert!(fx.actor(id).is_waiting());
        assert!(fx.actor(id).status().is_active(StatusFlag::ForceVisible));
        assert_eq!(fx.scheduler.len(), 2);

        fx.tick(fx.config.freeze_frames - 1);
        assert!(fx.actor(id).is_waiting());

        fx.tick(1);
        let actor = fx.actor(id);
        assert!(!actor.is_waiting());
        assert!(!actor.status().is_active(StatusFlag::ForceVisible));
        assert!(!actor.sprite().color_changed());
        assert!(fx.scheduler.is_empty());
    }

    #[test]
    fn unknown_actor_is_reported() {
        let mut fx = Fixture::new();
        let err = fx.ctx().hold(ActorId(7), StatusFlag::Wait, 1).unwrap_err();
        assert_eq!(err, StageError::UnknownActor { actor: ActorId(7) });
        assert!(fx.scheduler.is_empty());
    }
}

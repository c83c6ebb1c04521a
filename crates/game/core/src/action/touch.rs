//! Tag resolution between two adjacent actors.

use super::ActionContext;
use crate::engine::{GameEvent, SoundCue};
use crate::env::StageError;
use crate::state::ActorId;

/// `initiator` bumps into `other`. Only a chaser can tag: the roles swap, the
/// newly tagged chaser loses life and is frozen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TouchCommand {
    pub initiator: ActorId,
    pub other: ActorId,
}

impl TouchCommand {
    pub fn new(initiator: ActorId, other: ActorId) -> Self {
        Self { initiator, other }
    }

    /// Returns whether a tag happened.
    pub fn execute(&self, ctx: &mut ActionContext<'_>) -> Result<bool, StageError> {
        if !ctx.actor(self.initiator)?.is_chaser() {
            return Ok(false);
        }
        // Both ids are checked before either actor changes.
        ctx.actor(self.other)?;

        let damage = ctx.config.tag_damage;
        ctx.actor_mut(self.initiator)?.be_runner();
        let tagged = ctx.actor_mut(self.other)?;
        tagged.be_chaser();
        tagged.damage(damage);
        let life = tagged.life();

        ctx.play(SoundCue::Touch);
        ctx.freeze(self.other)?;
        ctx.emit(GameEvent::Tagged {
            tagger: self.initiator,
            tagged: self.other,
        });
        tracing::info!(tagger = %self.initiator, tagged = %self.other, life, "tag");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::fixture::Fixture;
    use crate::state::{Actor, Coordinate};

    #[test]
    fn tag_swaps_roles_and_costs_life() {
        let mut fx = Fixture::new();
        fx.place(ActorId(0), Coordinate::new(1, 1));
        fx.place(ActorId(1), Coordinate::new(1, 2));
        fx.actors.get_mut(ActorId(0)).unwrap().be_chaser();

        assert!(TouchCommand::new(ActorId(0), ActorId(1))
            .execute(&mut fx.ctx())
            .unwrap());

        let tagger = fx.actor(ActorId(0));
        assert!(tagger.is_runner());
        assert_eq!(tagger.sprite().glyph(), Actor::RUNNER_GLYPH);

        let tagged = fx.actor(ActorId(1));
        assert_eq!(tagged.sprite().glyph(), Actor::CHASER_GLYPH);
        assert_eq!(tagged.life(), fx.config.max_life - fx.config.tag_damage);

        assert_eq!(
            fx.events,
            [
                GameEvent::Sound(SoundCue::Touch),
                GameEvent::Tagged {
                    tagger: ActorId(0),
                    tagged: ActorId(1)
                }
            ]
        );
        assert_eq!(fx.actors.iter().filter(|a| a.is_chaser()).count(), 1);
    }

    #[test]
    fn zero_tag_damage_keeps_life() {
        let mut fx = Fixture::new();
        fx.config.tag_damage = 0;
        fx.actors.get_mut(ActorId(2)).unwrap().be_chaser();

        TouchCommand::new(ActorId(2), ActorId(3))
            .execute(&mut fx.ctx())
            .unwrap();
        assert_eq!(fx.actor(ActorId(3)).life(), fx.config.max_life);
    }

    #[test]
    fn unknown_target_changes_nothing() {
        let mut fx = Fixture::new();
        fx.actors.get_mut(ActorId(0)).unwrap().be_chaser();
        let before = fx.actors.clone();

        let err = TouchCommand::new(ActorId(0), ActorId(9))
            .execute(&mut fx.ctx())
            .unwrap_err();
        assert_eq!(err, StageError::UnknownActor { actor: ActorId(9) });
        assert_eq!(fx.actors, before);
    }
}

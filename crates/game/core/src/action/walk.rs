//! One-step movement with tag resolution.

use super::{ActionContext, TouchCommand};
use crate::engine::GameEvent;
use crate::env::StageError;
use crate::state::{ActorId, Coordinate, Direction, StatusFlag};

/// What a walk attempt did. Only `Moved` and a successful `Touched` change
/// state; the rest are ordinary no-ops.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkOutcome {
    /// The actor is still waiting out a previous step or a freeze.
    Waiting,
    /// `Direction::Stay` was requested.
    Stayed,
    /// Destination is not walkable.
    Blocked { to: Coordinate },
    /// Destination is occupied. `tagged` is false when the walker is a runner.
    Touched { other: ActorId, tagged: bool },
    Moved { from: Coordinate, to: Coordinate },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WalkCommand {
    pub actor: ActorId,
    pub direction: Direction,
}

impl WalkCommand {
    pub fn new(actor: ActorId, direction: Direction) -> Self {
        Self { actor, direction }
    }

    pub fn execute(&self, ctx: &mut ActionContext<'_>) -> Result<WalkOutcome, StageError> {
        let actor = ctx.actor(self.actor)?;
        if actor.is_waiting() {
            return Ok(WalkOutcome::Waiting);
        }
        let wait_frames = actor.status().walk_wait_frames();

        if self.direction == Direction::Stay {
            return Ok(WalkOutcome::Stayed);
        }

        let map = ctx.stage.actor_map();
        let from = map
            .coordinate_of(self.actor)
            .ok_or(StageError::NotPlaced { actor: self.actor })?;
        let to = from + self.direction;

        if !ctx.stage.terrain().is_walkable(to) {
            return Ok(WalkOutcome::Blocked { to });
        }

        if let Some(other) = map.actor_at(to) {
            let tagged = TouchCommand::new(self.actor, other).execute(ctx)?;
            return Ok(WalkOutcome::Touched { other, tagged });
        }

        ctx.stage.actor_map_mut().move_actor(self.actor, self.direction)?;
        ctx.hold(self.actor, StatusFlag::Wait, wait_frames)?;
        ctx.emit(GameEvent::Moved {
            actor: self.actor,
            from,
            to,
        });
        Ok(WalkOutcome::Moved { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::fixture::Fixture;
    use crate::env::{Stage, TerrainMap};

    const A: ActorId = ActorId(0);
    const B: ActorId = ActorId(1);

    #[test]
    fn chaser_walking_into_runner_tags_without_moving() {
        let mut fx = Fixture::new();
        fx.place(A, Coordinate::new(5, 5));
        fx.place(B, Coordinate::new(5, 6));
        fx.actors.get_mut(A).unwrap().be_chaser();

        let outcome = WalkCommand::new(A, Direction::Down)
            .execute(&mut fx.ctx())
            .unwrap();

        assert_eq!(
            outcome,
            WalkOutcome::Touched {
                other: B,
                tagged: true
            }
        );
        assert!(fx.actor(A).is_runner());
        assert!(fx.actor(B).is_chaser());
        assert!(fx.actor(B).is_waiting());
        assert_eq!(
            fx.stage.actor_map().coordinate_of(A),
            Some(Coordinate::new(5, 5))
        );

        fx.tick(fx.config.freeze_frames - 1);
        assert!(fx.actor(B).is_waiting());
        fx.tick(1);
        assert!(!fx.actor(B).is_waiting());
    }

    #[test]
    fn waiting_actor_ignores_walk() {
        let mut fx = Fixture::new();
        fx.place(A, Coordinate::new(2, 2));

        let first = WalkCommand::new(A, Direction::Right)
            .execute(&mut fx.ctx())
            .unwrap();
        assert!(matches!(first, WalkOutcome::Moved { .. }));
        assert_eq!(fx.scheduler.len(), 1);

        let second = WalkCommand::new(A, Direction::Right)
            .execute(&mut fx.ctx())
            .unwrap();
        assert_eq!(second, WalkOutcome::Waiting);
        assert_eq!(
            fx.stage.actor_map().coordinate_of(A),
            Some(Coordinate::new(3, 2))
        );
        assert_eq!(fx.scheduler.len(), 1);
    }

    #[test]
    fn step_wait_follows_walk_speed() {
        let mut fx = Fixture::new();
        fx.place(A, Coordinate::new(2, 2));
        WalkCommand::new(A, Direction::Up)
            .execute(&mut fx.ctx())
            .unwrap();

        fx.tick(fx.config.walk_wait_frames - 1);
        assert!(fx.actor(A).is_waiting());
        fx.tick(1);
        assert!(!fx.actor(A).is_waiting());
    }

    #[test]
    fn walls_and_edges_block() {
        let mut fx = Fixture::new();
        fx.stage = Stage::new(TerrainMap::parse("#.\n..\n").unwrap());
        fx.place(A, Coordinate::new(1, 1));

        for direction in [Direction::UpperLeft, Direction::Right, Direction::Down] {
            let outcome = WalkCommand::new(A, direction)
                .execute(&mut fx.ctx())
                .unwrap();
            assert!(matches!(outcome, WalkOutcome::Blocked { .. }), "{direction}");
        }
        assert!(fx.scheduler.is_empty());
        assert!(!fx.actor(A).is_waiting());
    }

    #[test]
    fn runner_touching_does_nothing() {
        let mut fx = Fixture::new();
        fx.place(A, Coordinate::new(5, 5));
        fx.place(B, Coordinate::new(6, 5));
        fx.actors.get_mut(B).unwrap().be_chaser();

        let outcome = WalkCommand::new(A, Direction::Right)
            .execute(&mut fx.ctx())
            .unwrap();
        assert_eq!(
            outcome,
            WalkOutcome::Touched {
                other: B,
                tagged: false
            }
        );
        assert!(fx.actor(A).is_runner());
        assert!(fx.actor(B).is_chaser());
        assert!(fx.events.is_empty());
    }

    #[test]
    fn stay_is_a_no_op() {
        let mut fx = Fixture::new();
        fx.place(A, Coordinate::new(5, 5));
        let outcome = WalkCommand::new(A, Direction::Stay)
            .execute(&mut fx.ctx())
            .unwrap();
        assert_eq!(outcome, WalkOutcome::Stayed);
        assert!(fx.scheduler.is_empty());
    }

    #[test]
    fn unplaced_walker_is_an_error() {
        let mut fx = Fixture::new();
        let err = WalkCommand::new(A, Direction::Up)
            .execute(&mut fx.ctx())
            .unwrap_err();
        assert_eq!(err, StageError::NotPlaced { actor: A });
    }
}

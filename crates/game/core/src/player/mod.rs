//! Player slots and their mode state machine.
//!
//! A slot starts in [`PlayerMode::Ready`]: the actor is unplaced and shows
//! `press start key`. The start key's press edge joins the chase and moves the
//! slot to [`PlayerMode::Walk`], where held keys drive walk commands and the
//! skill. A chase reset sends every slot back to `Ready`.

mod input;

pub use input::{Keys, PlayerInput};

use arrayvec::ArrayVec;

use crate::action::{ActionContext, WalkCommand};
use crate::config::GameConfig;
use crate::engine::{GameEvent, SoundCue};
use crate::env::StageError;
use crate::error::GameError;
use crate::state::{ActorId, Color};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerMode {
    #[default]
    Ready,
    Walk,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Player {
    actor: ActorId,
    mode: PlayerMode,
}

impl Player {
    pub fn new(actor: ActorId) -> Self {
        Self {
            actor,
            mode: PlayerMode::Ready,
        }
    }

    pub fn actor(&self) -> ActorId {
        self.actor
    }

    pub fn mode(&self) -> PlayerMode {
        self.mode
    }

    pub fn update(
        &mut self,
        input: PlayerInput,
        ctx: &mut ActionContext<'_>,
    ) -> Result<(), StageError> {
        match self.mode {
            PlayerMode::Ready => {
                if input.just_pressed(Keys::START) && self.join(ctx)? {
                    self.mode = PlayerMode::Walk;
                }
            }
            PlayerMode::Walk => self.walk(input, ctx)?,
        }
        Ok(())
    }

    fn walk(&self, input: PlayerInput, ctx: &mut ActionContext<'_>) -> Result<(), StageError> {
        if let Some(direction) = input.direction() {
            WalkCommand::new(self.actor, direction).execute(ctx)?;
        }
        let actor = ctx.actor_mut(self.actor)?;
        if input.is_held(Keys::SKILL) {
            actor.use_skill();
        } else {
            actor.unuse_skill();
        }
        Ok(())
    }

    /// Places the actor on a random open cell. Returns false when the stage
    /// has no room, leaving the slot in `Ready`.
    fn join(&self, ctx: &mut ActionContext<'_>) -> Result<bool, StageError> {
        let id = self.actor;
        ctx.actor(id)?;
        let at = match ctx.stage.random_open_coordinate(ctx.rng) {
            Ok(at) => at,
            Err(err) if err.severity().is_recoverable() => {
                tracing::warn!(actor = %id, code = err.error_code(), "cannot join: {err}");
                return Ok(false);
            }
            Err(err) => return Err(err),
        };

        ctx.play(SoundCue::Join);
        let first = ctx.stage.actor_map().is_empty();
        let actor = ctx.actor_mut(id)?;
        actor.be_playing();
        if first {
            actor.be_chaser();
        }
        ctx.stage.actor_map_mut().put(at, id);
        if ctx.stage.actor_map().count() == 2 {
            ctx.play(SoundCue::BgmStart);
        }

        // Chasers already in play are held back so the newcomer is not
        // tagged on arrival.
        let chasers: Vec<ActorId> = ctx
            .stage
            .actor_map()
            .actors()
            .into_iter()
            .filter(|other| *other != id)
            .filter(|other| ctx.actors.get(*other).is_some_and(|a| a.is_chaser()))
            .collect();
        for chaser in chasers {
            ctx.freeze(chaser)?;
        }

        let (interval, frames) = (ctx.config.join_flash_interval, ctx.config.join_flash_frames);
        ctx.flash(id, Color::White, interval, frames)?;
        ctx.emit(GameEvent::Joined {
            actor: id,
            at,
            chaser: first,
        });
        tracing::info!(actor = %id, %at, chaser = first, "player joined");
        Ok(true)
    }

    /// Leaves the stage and returns to `Ready`.
    pub fn reset(&mut self, ctx: &mut ActionContext<'_>) {
        if self.mode == PlayerMode::Walk {
            ctx.emit(GameEvent::Left { actor: self.actor });
        }
        ctx.stage.actor_map_mut().remove_actor(self.actor);
        self.mode = PlayerMode::Ready;
    }
}

/// One player per configured slot, in slot order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Players {
    members: ArrayVec<Player, { GameConfig::MAX_PLAYERS }>,
}

impl Players {
    pub fn new(config: &GameConfig) -> Self {
        let members = (0..config.players())
            .map(|slot| Player::new(ActorId(slot as u8)))
            .collect();
        Self { members }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn get(&self, id: ActorId) -> Option<&Player> {
        self.members.get(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.members.iter()
    }

    /// Runs every slot in order. Slots without an input entry see no keys.
    pub fn update(
        &mut self,
        inputs: &[PlayerInput],
        ctx: &mut ActionContext<'_>,
    ) -> Result<(), StageError> {
        for (slot, player) in self.members.iter_mut().enumerate() {
            let input = inputs.get(slot).copied().unwrap_or_default();
            player.update(input, ctx)?;
        }
        Ok(())
    }

    pub fn reset(&mut self, ctx: &mut ActionContext<'_>) {
        for player in &mut self.members {
            player.reset(ctx);
        }
    }
}

//! Frame driver for one game instance.
//!
//! The [`GameEngine`] owns every piece of mutable state (stage, roster,
//! players, scheduler, active scene) and advances it one frame per
//! [`GameEngine::update`] call. Within a frame the scheduler ticks first and
//! input is handled second, so an effect applied during input starts counting
//! down on the next frame.

mod events;
mod scene;
mod scheduler;
mod task;

pub use events::{GameEvent, SoundCue};
pub use scene::{SceneController, SceneKind};
pub use scheduler::{ScheduledTask, Scheduler};
pub use task::StatusTask;

use crate::action::ActionContext;
use crate::config::GameConfig;
use crate::env::{SpawnRng, Stage, StageError, TerrainMap};
use crate::player::{Keys, PlayerInput, Players};
use crate::render::Canvas;
use crate::state::{Actors, Coordinate};

pub struct GameEngine {
    config: GameConfig,
    stage: Stage,
    actors: Actors,
    players: Players,
    scheduler: Scheduler<StatusTask>,
    scene: SceneController,
    rng: SpawnRng,
    events: Vec<GameEvent>,
    frame: u64,
}

impl GameEngine {
    /// Chord that restarts the chase from the ranking screen.
    pub const RESTART_CHORD: Keys = Keys::START.union(Keys::SKILL);

    pub fn new(config: GameConfig, terrain: TerrainMap) -> Self {
        Self {
            stage: Stage::new(terrain),
            actors: Actors::new(&config),
            players: Players::new(&config),
            scheduler: Scheduler::new(),
            scene: SceneController::new(),
            rng: SpawnRng::new(config.spawn_seed),
            events: Vec::new(),
            frame: 0,
            config,
        }
    }

    /// All-floor stage sized from the config.
    pub fn with_default_stage(config: GameConfig) -> Self {
        let terrain = TerrainMap::filled(config.stage_width, config.stage_height);
        Self::new(config, terrain)
    }

    /// Advances one frame. `inputs` is indexed by player slot; missing
    /// entries count as no keys.
    pub fn update(&mut self, inputs: &[PlayerInput]) -> Result<(), StageError> {
        self.frame += 1;
        self.scheduler.tick(&mut self.actors);

        match self.scene.current() {
            SceneKind::Title => {
                if inputs.iter().any(PlayerInput::any_pressed) {
                    self.change_scene(SceneKind::Chase);
                }
            }
            SceneKind::Chase => {
                let mut ctx = ActionContext {
                    config: &self.config,
                    stage: &mut self.stage,
                    actors: &mut self.actors,
                    scheduler: &mut self.scheduler,
                    rng: &mut self.rng,
                    events: &mut self.events,
                };
                self.players.update(inputs, &mut ctx)?;
                if self.actors.exists_deadman() {
                    self.change_scene(SceneKind::Ranking);
                }
            }
            SceneKind::Ranking => {
                if inputs
                    .iter()
                    .any(|input| input.is_held(Self::RESTART_CHORD))
                {
                    self.restart();
                    self.change_scene(SceneKind::Chase);
                }
            }
        }
        Ok(())
    }

    /// Returns every actor and player to its pre-join state.
    fn restart(&mut self) {
        self.actors.reset(&self.config);
        let mut ctx = ActionContext {
            config: &self.config,
            stage: &mut self.stage,
            actors: &mut self.actors,
            scheduler: &mut self.scheduler,
            rng: &mut self.rng,
            events: &mut self.events,
        };
        self.players.reset(&mut ctx);
        self.stage.actor_map_mut().clear();
    }

    fn change_scene(&mut self, to: SceneKind) {
        self.scene
            .change(to, &mut self.scheduler, &mut self.events);
    }

    pub fn render(&self, canvas: &mut dyn Canvas) {
        match self.scene.current() {
            SceneKind::Title => SceneController::render_title(canvas),
            SceneKind::Chase => self.render_chase(canvas),
            SceneKind::Ranking => SceneController::render_ranking(canvas, &self.actors),
        }
    }

    fn render_chase(&self, canvas: &mut dyn Canvas) {
        canvas.fill();
        self.stage.render(canvas, &self.actors);
        let top = self.stage.terrain().dimensions().height as i32;
        for (slot, actor) in self.actors.iter().enumerate() {
            actor.render_status(canvas, Coordinate::new(0, top + slot as i32));
        }
    }

    /// Takes the events recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn actors(&self) -> &Actors {
        &self.actors
    }

    pub fn players(&self) -> &Players {
        &self.players
    }

    pub fn scheduler(&self) -> &Scheduler<StatusTask> {
        &self.scheduler
    }

    pub fn scene(&self) -> SceneKind {
        self.scene.current()
    }

    /// Frames advanced so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

//! Frame-driving orchestrator.
//!
//! The runtime owns a [`GameEngine`] and an [`AudioSink`]. The host calls
//! [`Runtime::step`] once per frame with the input snapshot of every player
//! slot and [`Runtime::render`] whenever it wants a picture.

use chase_content::ContentFactory;
use chase_core::{
    Canvas, GameConfig, GameEngine, GameError, GameEvent, PlayerInput, SceneKind, TerrainMap,
};

use crate::api::{AudioSink, Result, RuntimeError, SilentAudio};
use crate::config::RuntimeConfig;

pub struct Runtime {
    engine: GameEngine,
    audio: Box<dyn AudioSink>,
    halted: bool,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Advances one frame and returns the events it produced.
    ///
    /// `inputs` is indexed by player slot and may be shorter than the number
    /// of slots. An internal engine error halts the runtime: the error is
    /// returned once and later calls fail with [`RuntimeError::Halted`].
    pub fn step(&mut self, inputs: &[PlayerInput]) -> Result<Vec<GameEvent>> {
        if self.halted {
            return Err(RuntimeError::Halted);
        }
        let expected = self.engine.players().len();
        if inputs.len() > expected {
            return Err(RuntimeError::InputCount {
                expected,
                found: inputs.len(),
            });
        }

        if let Err(err) = self.engine.update(inputs) {
            let severity = err.severity();
            if severity.is_internal() {
                tracing::error!(
                    frame = self.engine.frame(),
                    code = err.error_code(),
                    severity = severity.as_str(),
                    "engine state corrupted: {err}"
                );
                self.halted = true;
            } else {
                tracing::warn!(frame = self.engine.frame(), code = err.error_code(), "{err}");
            }
            return Err(err.into());
        }

        let events = self.engine.drain_events();
        for event in &events {
            self.dispatch(event);
        }
        Ok(events)
    }

    fn dispatch(&mut self, event: &GameEvent) {
        let frame = self.engine.frame();
        match event {
            GameEvent::Sound(cue) => {
                tracing::trace!(frame, cue = cue.name(), "sound");
                self.audio.play(*cue);
            }
            GameEvent::Joined { actor, at, chaser } => {
                tracing::debug!(frame, %actor, %at, chaser, "joined");
            }
            GameEvent::Left { actor } => {
                tracing::debug!(frame, %actor, "left");
            }
            GameEvent::Moved { actor, from, to } => {
                tracing::trace!(frame, %actor, %from, %to, "moved");
            }
            GameEvent::Tagged { tagger, tagged } => {
                tracing::debug!(frame, %tagger, %tagged, "tagged");
            }
            GameEvent::SceneChanged { from, to } => {
                tracing::debug!(frame, %from, %to, "scene changed");
            }
        }
    }

    pub fn render(&self, canvas: &mut dyn Canvas) {
        self.engine.render(canvas);
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn scene(&self) -> SceneKind {
        self.engine.scene()
    }

    pub fn frame(&self) -> u64 {
        self.engine.frame()
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }
}

/// Builder for [`Runtime`] with flexible configuration.
///
/// Without explicit overrides the game config and terrain come from the
/// content directory named by [`RuntimeConfig`] (or the bundled data).
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    game_config: Option<GameConfig>,
    terrain: Option<TerrainMap>,
    audio: Option<Box<dyn AudioSink>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            game_config: None,
            terrain: None,
            audio: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Use this game configuration instead of `config.toml`.
    pub fn game_config(mut self, game_config: GameConfig) -> Self {
        self.game_config = Some(game_config);
        self
    }

    /// Use this terrain instead of loading a map file.
    pub fn terrain(mut self, terrain: TerrainMap) -> Self {
        self.terrain = Some(terrain);
        self
    }

    /// Parse `layout` as the terrain.
    pub fn layout(self, layout: &str) -> Result<Self> {
        let terrain = TerrainMap::parse(layout)?;
        Ok(self.terrain(terrain))
    }

    pub fn audio(mut self, audio: impl AudioSink + 'static) -> Self {
        self.audio = Some(Box::new(audio));
        self
    }

    /// Build the runtime
    pub fn build(self) -> Result<Runtime> {
        let factory = match &self.config.data_dir {
            Some(dir) => ContentFactory::new(dir),
            None => ContentFactory::bundled(),
        };
        let (game_config, terrain) = match (self.game_config, self.terrain) {
            (Some(game_config), Some(terrain)) => (game_config, terrain),
            (None, Some(terrain)) => (factory.load_game_config()?, terrain),
            (game_config, None) => {
                let (loaded, terrain) = factory.load_stage(self.config.map.as_deref())?;
                (game_config.unwrap_or(loaded), terrain)
            }
        };
        let game_config = self.config.apply(game_config);

        let dimensions = terrain.dimensions();
        tracing::info!(
            players = game_config.players(),
            width = dimensions.width,
            height = dimensions.height,
            seed = game_config.spawn_seed,
            "runtime ready"
        );

        Ok(Runtime {
            engine: GameEngine::new(game_config, terrain),
            audio: self.audio.unwrap_or_else(|| Box::new(SilentAudio)),
            halted: false,
        })
    }
}

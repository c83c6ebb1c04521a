//! Runtime configuration and environment loaders.

use std::env;
use std::path::PathBuf;

use chase_core::GameConfig;

/// Host-level settings applied on top of the content configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Content directory; the bundled data is used when unset.
    pub data_dir: Option<PathBuf>,
    /// Map name overriding the one named in `config.toml`.
    pub map: Option<String>,
    pub spawn_seed: Option<u64>,
    pub players: Option<usize>,
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CHASE_DATA_DIR` - Content directory (default: bundled data)
    /// - `CHASE_MAP` - Map name under `maps/` (default: from `config.toml`)
    /// - `CHASE_SPAWN_SEED` - Spawn RNG seed (default: from `config.toml`)
    /// - `CHASE_PLAYERS` - Player slot count, 1 to 4 (default: from `config.toml`)
    pub fn from_env() -> Self {
        Self {
            data_dir: env::var("CHASE_DATA_DIR").ok().map(PathBuf::from),
            map: env::var("CHASE_MAP").ok().filter(|name| !name.is_empty()),
            spawn_seed: read_env::<u64>("CHASE_SPAWN_SEED"),
            players: read_env::<usize>("CHASE_PLAYERS"),
        }
    }

    /// Applies the overrides to a loaded game configuration.
    pub fn apply(&self, mut game: GameConfig) -> GameConfig {
        if let Some(seed) = self.spawn_seed {
            game = game.with_spawn_seed(seed);
        }
        if let Some(players) = self.players {
            game = game.with_player_count(players);
        }
        game
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

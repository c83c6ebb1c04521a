//! Game configuration loader.

use std::path::Path;

use chase_core::GameConfig;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Contents of `config.toml`: the stage to load plus engine tunables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Map name under `maps/`, without extension.
    pub map: String,
    pub game: GameConfig,
}

impl ContentConfig {
    pub const DEFAULT_MAP: &'static str = "arena";
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            map: Self::DEFAULT_MAP.to_owned(),
            game: GameConfig::default(),
        }
    }
}

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file. Missing fields take defaults.
    pub fn load(path: &Path) -> LoadResult<ContentConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<ContentConfig> {
        let config: ContentConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.game.player_count == 0 || config.game.player_count > GameConfig::MAX_PLAYERS {
            tracing::warn!(
                player_count = config.game.player_count,
                max = GameConfig::MAX_PLAYERS,
                "player_count out of range; it will be clamped"
            );
        }
        Ok(config)
    }
}

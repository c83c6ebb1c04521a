//! Content factory for loading everything a game needs from a data directory.

use std::path::{Path, PathBuf};

use chase_core::{GameConfig, TerrainMap};

use crate::loaders::{ConfigLoader, ContentConfig, LoadResult, TerrainLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── maps/
///     ├── arena.txt
///     └── ...
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the data directory shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    /// Load `config.toml`. A missing file yields the defaults.
    pub fn load_config(&self) -> LoadResult<ContentConfig> {
        let path = self.config_path();
        if !path.exists() {
            tracing::info!(path = %path.display(), "no config file; using defaults");
            return Ok(ContentConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load engine tunables only.
    pub fn load_game_config(&self) -> LoadResult<GameConfig> {
        Ok(self.load_config()?.game)
    }

    /// Load a terrain map from `maps/{map_name}.txt`.
    pub fn load_map(&self, map_name: &str) -> LoadResult<TerrainMap> {
        TerrainLoader::load(&self.map_path(map_name))
    }

    /// Load the configuration and the map it names, or `map_override` when
    /// given.
    pub fn load_stage(&self, map_override: Option<&str>) -> LoadResult<(GameConfig, TerrainMap)> {
        let config = self.load_config()?;
        let map_name = map_override.unwrap_or(config.map.as_str());
        let terrain = self.load_map(map_name)?;
        Ok((config.game, terrain))
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    pub fn map_path(&self, map_name: &str) -> PathBuf {
        self.data_dir.join("maps").join(format!("{}.txt", map_name))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
        assert_eq!(factory.map_path("arena"), Path::new("/tmp/data/maps/arena.txt"));
    }

    #[test]
    fn bundled_content_loads() {
        let factory = ContentFactory::bundled();
        let (config, terrain) = factory.load_stage(None).unwrap();
        assert_eq!(config.players(), GameConfig::MAX_PLAYERS);
        assert!(terrain.walkable_coordinates().count() >= config.players());
    }

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap(), ContentConfig::default());
    }

    #[test]
    fn map_override_wins_over_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("maps")).unwrap();
        fs::write(dir.path().join("config.toml"), "map = \"big\"\n").unwrap();
        fs::write(dir.path().join("maps/small.txt"), "..\n..\n").unwrap();

        let factory = ContentFactory::new(dir.path());
        assert!(factory.load_stage(None).is_err());

        let (_, terrain) = factory.load_stage(Some("small")).unwrap();
        assert_eq!(terrain.dimensions().width, 2);
    }
}

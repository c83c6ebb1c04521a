//! Terrain layout loader.
//!
//! A layout is plain text: one line per row, one glyph per column, with
//! `.` floor, `#` wall and ` ` void. Trailing newlines are ignored.

use std::path::Path;

use chase_core::{GameError, TerrainMap, TerrainPalette};

use crate::loaders::{LoadResult, read_file};

/// Loader for terrain maps from text files.
pub struct TerrainLoader;

impl TerrainLoader {
    /// Load a terrain map using the standard palette.
    pub fn load(path: &Path) -> LoadResult<TerrainMap> {
        Self::load_with(path, TerrainPalette::standard())
    }

    /// Load a terrain map, resolving glyphs through `palette`.
    pub fn load_with(path: &Path, palette: TerrainPalette) -> LoadResult<TerrainMap> {
        let content = read_file(path)?;
        let map = TerrainMap::parse_with(&content, palette).map_err(|e| {
            anyhow::anyhow!(
                "Failed to parse terrain {} [{}]: {}",
                path.display(),
                e.error_code(),
                e
            )
        })?;

        let dimensions = map.dimensions();
        tracing::debug!(
            path = %path.display(),
            width = dimensions.width,
            height = dimensions.height,
            "terrain loaded"
        );
        Ok(map)
    }
}

//! Content loaders for reading game data from files.
//!
//! Loaders return [`LoadResult`] with the offending path in the error message,
//! so startup failures point at the file to fix.

pub mod config;
pub mod factory;
pub mod terrain;

pub use config::{ConfigLoader, ContentConfig};
pub use factory::ContentFactory;
pub use terrain::TerrainLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

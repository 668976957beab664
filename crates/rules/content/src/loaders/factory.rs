//! Content factory for loading a table's rules data from one directory.

use std::path::{Path, PathBuf};

use rules_core::RulesConfig;

use crate::loaders::{AncestryLoader, BackgroundLoader, ConfigLoader, LoadResult, OriginCatalog};

/// Content factory that loads all rules content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── rules.toml
/// ├── ancestries.ron
/// └── backgrounds.ron
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

    /// Directory bundled with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load rules configuration from `rules.toml`, or the defaults when the
    /// file does not exist.
    pub fn load_config(&self) -> LoadResult<RulesConfig> {
        let path = self.data_dir.join("rules.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no rules.toml, using defaults");
            return Ok(RulesConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load ancestries from `ancestries.ron` and backgrounds from
    /// `backgrounds.ron`.
    pub fn load_origins(&self) -> LoadResult<OriginCatalog> {
        let ancestries = AncestryLoader::load(&self.data_dir.join("ancestries.ron"))?;
        let backgrounds = BackgroundLoader::load(&self.data_dir.join("backgrounds.ron"))?;

        Ok(OriginCatalog {
            ancestries,
            backgrounds,
        })
    }
}

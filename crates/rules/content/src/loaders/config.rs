//! Rules configuration loader.

use std::path::Path;

use rules_core::RulesConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for rules configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a [`RulesConfig`] from a TOML file.
    ///
    /// Missing keys keep their defaults. The attribute bounds must form a
    /// non-empty range.
    pub fn load(path: &Path) -> LoadResult<RulesConfig> {
        let content = read_file(path)?;
        let config = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid rules config {}: {}", path.display(), e))?;

        tracing::debug!(path = %path.display(), ?config, "loaded rules config");
        Ok(config)
    }

    /// Parse TOML text into a [`RulesConfig`].
    pub fn parse(content: &str) -> LoadResult<RulesConfig> {
        let config: RulesConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.attribute_min > config.attribute_max {
            anyhow::bail!(
                "attribute_min {} is greater than attribute_max {}",
                config.attribute_min,
                config.attribute_max
            );
        }

        Ok(config)
    }
}

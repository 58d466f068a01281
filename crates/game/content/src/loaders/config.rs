//! Combat configuration loader.

use std::path::Path;

use anyhow::{Context, ensure};
use combat_core::CombatConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for combat configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<CombatConfig> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Parse and range-check a TOML config. Missing keys take their defaults.
    pub fn parse(content: &str) -> LoadResult<CombatConfig> {
        let config: CombatConfig =
            toml::from_str(content).context("failed to parse config TOML")?;
        ensure!(
            config.survive_fatal_hp >= 1,
            "survive_fatal_hp must be at least 1"
        );
        ensure!(config.max_hits >= 1, "max_hits must be at least 1");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let config = ConfigLoader::parse("max_hits = 4").unwrap();
        assert_eq!(config.max_hits, 4);
        assert_eq!(config.survive_fatal_hp, CombatConfig::DEFAULT_SURVIVE_FATAL_HP);
        assert!(config.energy_regen_on_turn);
    }

    #[test]
    fn zero_survive_hp_is_rejected() {
        assert!(ConfigLoader::parse("survive_fatal_hp = 0").is_err());
    }

    #[test]
    fn load_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "energy_regen_on_turn = false\n").unwrap();
        let config = ConfigLoader::load(&path).unwrap();
        assert!(!config.energy_regen_on_turn);
    }
}

//! Boss definition loader.

use std::path::Path;

use anyhow::Context;
use combat_core::BossDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossCatalog {
    pub bosses: Vec<BossDefinition>,
}

/// Loader for boss definitions from RON files.
pub struct BossLoader;

impl BossLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<BossDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<BossDefinition>> {
        let catalog: BossCatalog =
            ron::from_str(content).context("failed to parse boss catalog RON")?;
        Ok(catalog.bosses)
    }
}

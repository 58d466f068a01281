//! Class attribute loader.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use combat_core::{CharacterAttributes, CharacterClass};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassCatalog {
    pub classes: BTreeMap<CharacterClass, CharacterAttributes>,
}

/// Loader for class base attributes from RON files.
pub struct ClassLoader;

impl ClassLoader {
    pub fn load(path: &Path) -> LoadResult<BTreeMap<CharacterClass, CharacterAttributes>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<BTreeMap<CharacterClass, CharacterAttributes>> {
        let catalog: ClassCatalog =
            ron::from_str(content).context("failed to parse class attributes RON")?;
        Ok(catalog.classes)
    }
}

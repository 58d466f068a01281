//! Skill tree loader.

use std::path::Path;

use anyhow::Context;
use combat_core::SkillNode;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Skill file structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCatalog {
    pub skills: Vec<SkillNode>,
}

/// Loader for skill nodes from RON files.
pub struct SkillLoader;

impl SkillLoader {
    /// Load skill nodes from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<SkillNode>> {
        let content = read_file(path)?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Parse skill nodes from RON source. `origin` names the source in errors.
    pub fn parse(content: &str, origin: &str) -> LoadResult<Vec<SkillNode>> {
        let catalog: SkillCatalog = ron::from_str(content)
            .with_context(|| format!("failed to parse skill catalog {origin}"))?;
        Ok(catalog.skills)
    }

    /// Load every `*.ron` file of a skills directory, in file name order.
    pub fn load_dir(dir: &Path) -> LoadResult<Vec<SkillNode>> {
        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir)
            .with_context(|| format!("failed to read skills directory {}", dir.display()))?
        {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "ron") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut skills = Vec::new();
        for path in paths {
            skills.extend(Self::load(&path)?);
        }
        Ok(skills)
    }
}

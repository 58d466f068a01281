//! Content factory for building the shared tables from data files.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::bail;
use combat_core::{
    BossDefinition, CharacterAttributes, CharacterClass, CombatConfig, SkillNode,
};
use tracing::{debug, info, warn};

use crate::loaders::{BossLoader, ClassLoader, ConfigLoader, LoadResult, SkillLoader, embedded};
use crate::tables::ContentTables;
use crate::validation::validate_content;

/// Where content is read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentSource {
    /// The data files compiled into the binary.
    Embedded,
    /// A data directory laid out like the shipped one.
    Directory(PathBuf),
}

/// Content factory that loads all combat content from one source.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── classes.ron
/// ├── bosses.ron
/// └── skills/
///     ├── tank.ron
///     └── boss.ron
/// ```
pub struct ContentFactory {
    source: ContentSource,
}

impl ContentFactory {
    pub fn new(source: ContentSource) -> Self {
        Self { source }
    }

    pub fn embedded() -> Self {
        Self::new(ContentSource::Embedded)
    }

    pub fn from_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self::new(ContentSource::Directory(data_dir.into()))
    }

    pub fn source(&self) -> &ContentSource {
        &self.source
    }

    /// Load combat configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<CombatConfig> {
        match &self.source {
            ContentSource::Embedded => ConfigLoader::parse(embedded::CONFIG),
            ContentSource::Directory(dir) => ConfigLoader::load(&dir.join("config.toml")),
        }
    }

    /// Load every skill node from the `skills/` files.
    pub fn load_skills(&self) -> LoadResult<Vec<SkillNode>> {
        match &self.source {
            ContentSource::Embedded => {
                let mut skills = Vec::new();
                for (name, content) in embedded::SKILLS {
                    skills.extend(SkillLoader::parse(content, name)?);
                }
                Ok(skills)
            }
            ContentSource::Directory(dir) => SkillLoader::load_dir(&dir.join("skills")),
        }
    }

    /// Load class base attributes from `classes.ron`.
    pub fn load_classes(&self) -> LoadResult<BTreeMap<CharacterClass, CharacterAttributes>> {
        match &self.source {
            ContentSource::Embedded => ClassLoader::parse(embedded::CLASSES),
            ContentSource::Directory(dir) => ClassLoader::load(&dir.join("classes.ron")),
        }
    }

    /// Load boss definitions from `bosses.ron`.
    pub fn load_bosses(&self) -> LoadResult<Vec<BossDefinition>> {
        match &self.source {
            ContentSource::Embedded => BossLoader::parse(embedded::BOSSES),
            ContentSource::Directory(dir) => BossLoader::load(&dir.join("bosses.ron")),
        }
    }

    /// Loads and validates skills, classes and bosses.
    ///
    /// # Errors
    ///
    /// Fails on unreadable or malformed files, and on any validation error
    /// (all of them are listed in the message).
    pub fn load_tables(&self, config: &CombatConfig) -> LoadResult<ContentTables> {
        let skills = self.load_skills()?;
        let classes = self.load_classes()?;
        let bosses = self.load_bosses()?;
        debug!(
            target: "combat::content",
            skills = skills.len(),
            classes = classes.len(),
            bosses = bosses.len(),
            "content parsed"
        );

        let errors = validate_content(&skills, &classes, &bosses, config);
        if !errors.is_empty() {
            for error in &errors {
                warn!(target: "combat::content", %error, "invalid content");
            }
            let listed: Vec<String> = errors.iter().map(ToString::to_string).collect();
            bail!(
                "{} content error(s):\n  {}",
                errors.len(),
                listed.join("\n  ")
            );
        }

        let tables = ContentTables {
            skills: skills.into_iter().collect(),
            classes: classes.into_iter().collect(),
            bosses: bosses.into_iter().collect(),
        };
        info!(
            target: "combat::content",
            source = ?self.source,
            skills = tables.skills.len(),
            bosses = tables.bosses.len(),
            "content loaded"
        );
        Ok(tables)
    }

    /// Returns the data directory path, if reading from disk.
    pub fn data_dir(&self) -> Option<&Path> {
        match &self.source {
            ContentSource::Embedded => None,
            ContentSource::Directory(dir) => Some(dir),
        }
    }
}

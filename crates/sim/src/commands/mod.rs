//! Subcommand implementations.
//!
//! Each command owns its CLI args and execution logic; content loading is
//! shared through [`ContentArgs`].

mod fight;
mod skills;
mod validate;

pub use fight::Fight;
pub use skills::Skills;
pub use validate::Validate;

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use combat_content::{ConfigLoader, ContentFactory, ContentTables};
use combat_core::CombatConfig;

/// Global content selection flags.
#[derive(Args)]
pub struct ContentArgs {
    /// Data directory to load instead of the embedded content
    #[arg(long, global = true, value_name = "DIR")]
    content: Option<PathBuf>,

    /// Combat config file overriding the content's config.toml
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl ContentArgs {
    pub fn factory(&self) -> ContentFactory {
        match &self.content {
            Some(dir) => ContentFactory::from_dir(dir),
            None => ContentFactory::embedded(),
        }
    }

    pub fn load_config(&self) -> Result<CombatConfig> {
        match &self.config {
            Some(path) => ConfigLoader::load(path),
            None => self.factory().load_config(),
        }
    }

    /// Config plus validated tables.
    pub fn load(&self) -> Result<(CombatConfig, ContentTables)> {
        let config = self.load_config()?;
        let tables = self.factory().load_tables(&config)?;
        Ok((config, tables))
    }
}

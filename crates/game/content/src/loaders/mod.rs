//! Content loaders for reading combat data from files.
//!
//! Every loader parses from a string so the embedded copies and files on disk
//! share one code path.

pub mod bosses;
pub mod classes;
pub mod config;
pub mod factory;
pub mod skills;

pub use bosses::BossLoader;
pub use classes::ClassLoader;
pub use config::ConfigLoader;
pub use factory::{ContentFactory, ContentSource};
pub use skills::SkillLoader;

use std::path::Path;

use anyhow::Context;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Shipped data files, embedded at compile time.
pub(crate) mod embedded {
    pub const CONFIG: &str = include_str!("../../data/config.toml");
    pub const CLASSES: &str = include_str!("../../data/classes.ron");
    pub const BOSSES: &str = include_str!("../../data/bosses.ron");

    /// `(file name, contents)` of every skill file, in load order.
    pub const SKILLS: &[(&str, &str)] = &[
        ("tank.ron", include_str!("../../data/skills/tank.ron")),
        ("warrior.ron", include_str!("../../data/skills/warrior.ron")),
        ("mage.ron", include_str!("../../data/skills/mage.ron")),
        ("healer.ron", include_str!("../../data/skills/healer.ron")),
        ("boss.ron", include_str!("../../data/skills/boss.ron")),
    ];
}

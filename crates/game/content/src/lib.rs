//! Data-driven combat content and loaders.
//!
//! This crate houses the static game content and provides loaders for the
//! RON/TOML data files:
//! - Class skill trees and boss skills (RON)
//! - Class base attributes (RON)
//! - Boss definitions (RON)
//! - Combat engine configuration (TOML)
//!
//! The shipped files are embedded in the binary; a data directory with the
//! same layout can replace them at runtime. Loaded content is validated once
//! and then shared read-only by every fight through [`ContentTables`].

pub mod loaders;
pub mod tables;
pub mod validation;

pub use loaders::{
    BossLoader, ClassLoader, ConfigLoader, ContentFactory, ContentSource, SkillLoader,
};
pub use tables::ContentTables;
pub use validation::{ValidationError, ValidationIssue, validate_content};

//! Content (data-integrity) errors.

use crate::error::{ErrorSeverity, GameError};

use super::class::CharacterClass;
use super::effect::EffectSite;
use super::node::SkillId;

/// Bad skill/class/boss data. Always fatal: the action can never succeed with
/// these tables, so it fails before any state is touched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("unknown skill '{0}'")]
    UnknownSkill(SkillId),

    #[error("skill '{skill}' declares {effect} as a {site}, where it has no meaning")]
    MisplacedEffect {
        skill: SkillId,
        effect: &'static str,
        site: EffectSite,
    },

    #[error("skill '{skill}' has {hits} hits (allowed 1..={max})")]
    InvalidHits { skill: SkillId, hits: u32, max: u32 },

    #[error("no attributes defined for class {0}")]
    MissingAttributes(CharacterClass),

    #[error("unknown boss '{0}'")]
    UnknownBoss(String),

    #[error("{0} oracle not available")]
    OracleUnavailable(&'static str),
}

impl GameError for ContentError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use ContentError::*;
        match self {
            UnknownSkill(_) => "CONTENT_UNKNOWN_SKILL",
            MisplacedEffect { .. } => "CONTENT_MISPLACED_EFFECT",
            InvalidHits { .. } => "CONTENT_INVALID_HITS",
            MissingAttributes(_) => "CONTENT_MISSING_ATTRIBUTES",
            UnknownBoss(_) => "CONTENT_UNKNOWN_BOSS",
            OracleUnavailable(_) => "CONTENT_ORACLE_UNAVAILABLE",
        }
    }
}

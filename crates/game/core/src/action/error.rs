//! Action execution errors.

use crate::error::{ErrorSeverity, GameError};
use crate::skill::{ContentError, SkillId, TargetType};
use crate::state::{CombatantId, InvariantViolation};

/// Errors raised while validating or resolving an ability use or turn tick.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("caster {0} not found")]
    CasterNotFound(CombatantId),

    #[error("caster {0} is defeated")]
    CasterDefeated(CombatantId),

    #[error("caster {0} is silenced or stunned")]
    CasterIncapacitated(CombatantId),

    #[error("{caster} does not own skill '{skill}'")]
    SkillNotOwned { caster: CombatantId, skill: SkillId },

    #[error("skill '{0}' is not an ability")]
    NotAnAbility(SkillId),

    #[error("not enough energy: requires {required}, has {available}")]
    InsufficientEnergy { required: u32, available: u32 },

    #[error("skill '{0}' needs an explicit target")]
    MissingTarget(SkillId),

    #[error("target {0} not found")]
    TargetNotFound(CombatantId),

    #[error("{target} is not a valid {target_type} target")]
    InvalidTarget {
        target: CombatantId,
        target_type: TargetType,
    },

    #[error("target {0} is defeated")]
    TargetDefeated(CombatantId),

    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        use ActionError::*;
        match self {
            CasterNotFound(_) | TargetNotFound(_) => ErrorSeverity::Validation,
            SkillNotOwned { .. } | NotAnAbility(_) => ErrorSeverity::Validation,
            MissingTarget(_) | InvalidTarget { .. } => ErrorSeverity::Validation,
            CasterDefeated(_) | CasterIncapacitated(_) => ErrorSeverity::Recoverable,
            InsufficientEnergy { .. } | TargetDefeated(_) => ErrorSeverity::Recoverable,
            Content(error) => error.severity(),
            Invariant(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        use ActionError::*;
        match self {
            CasterNotFound(_) => "ACTION_CASTER_NOT_FOUND",
            CasterDefeated(_) => "ACTION_CASTER_DEFEATED",
            CasterIncapacitated(_) => "ACTION_CASTER_INCAPACITATED",
            SkillNotOwned { .. } => "ACTION_SKILL_NOT_OWNED",
            NotAnAbility(_) => "ACTION_NOT_AN_ABILITY",
            InsufficientEnergy { .. } => "ACTION_INSUFFICIENT_ENERGY",
            MissingTarget(_) => "ACTION_MISSING_TARGET",
            TargetNotFound(_) => "ACTION_TARGET_NOT_FOUND",
            InvalidTarget { .. } => "ACTION_INVALID_TARGET",
            TargetDefeated(_) => "ACTION_TARGET_DEFEATED",
            Content(error) => error.error_code(),
            Invariant(error) => error.error_code(),
        }
    }
}

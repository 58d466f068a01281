//! Error types for the transition pipeline.

use crate::action::ActionError;
use crate::error::{ErrorSeverity, GameError};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced by [`CombatEngine`](super::CombatEngine).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error("ability use failed: {0}")]
    Ability(TransitionPhaseError<ActionError>),

    #[error("turn start failed: {0}")]
    Turn(TransitionPhaseError<ActionError>),
}

impl ExecuteError {
    pub fn phase(&self) -> TransitionPhase {
        self.inner().phase
    }

    pub fn action_error(&self) -> &ActionError {
        &self.inner().error
    }

    /// `true` when the request was turned away at validation for a normal
    /// gameplay reason ("action not performed"), `false` for content errors
    /// and internal defects.
    pub fn is_rejection(&self) -> bool {
        self.phase() == TransitionPhase::PreValidate && !self.severity().is_internal()
    }

    fn inner(&self) -> &TransitionPhaseError<ActionError> {
        match self {
            Self::Ability(inner) | Self::Turn(inner) => inner,
        }
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        self.action_error().severity()
    }

    fn error_code(&self) -> &'static str {
        self.action_error().error_code()
    }
}

//! Severity classification shared by every combat-core error.
//!
//! Each failure family (`ActionError`, `ContentError`, `InvariantViolation`)
//! lives next to the code that raises it and implements [`GameError`], so the
//! engine and its callers can tell bad input from bad content from bugs
//! without matching on concrete variants.

/// How a failed action should be handled by the caller.
///
/// - **Recoverable**: normal play, pick another action
/// - **Validation**: malformed request, do not resend unchanged
/// - **Internal**: an engine invariant broke
/// - **Fatal**: the content tables are inconsistent
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Not enough energy, caster stunned, target already down.
    Recoverable,
    /// Unknown caster, unowned skill, target on the wrong side.
    Validation,
    /// Shield above capacity or HP above max after resolution.
    Internal,
    /// Unknown skill id, effect declared where it has no meaning.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a bug or bad data rather than bad input.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Uniform classification for combat-core errors.
///
/// Implemented by every error enum next to its `thiserror` derive.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier of the variant, for logs and test assertions.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_covers_fatal_and_internal_only() {
        assert!(ErrorSeverity::Fatal.is_internal());
        assert!(ErrorSeverity::Internal.is_internal());
        assert!(!ErrorSeverity::Recoverable.is_internal());
        assert!(!ErrorSeverity::Validation.is_internal());
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert_eq!(ErrorSeverity::Fatal.as_str(), "fatal");
    }
}

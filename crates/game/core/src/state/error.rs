use crate::error::{ErrorSeverity, GameError};

use super::combatant::CombatantId;

/// A resource left its valid range after resolution.
///
/// Never expected when the shield manager and effect resolver honour their
/// contracts; surfacing one means a bug in this crate, not bad input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvariantViolation {
    #[error("{combatant}: shield {shield} exceeds capacity {capacity}")]
    ShieldAboveCapacity {
        combatant: CombatantId,
        shield: u32,
        capacity: u32,
    },

    #[error("{combatant}: hp {hp} exceeds max hp {max_hp}")]
    HpAboveMax {
        combatant: CombatantId,
        hp: u32,
        max_hp: u32,
    },

    #[error("{combatant}: energy {energy} exceeds max energy {max_energy}")]
    EnergyAboveMax {
        combatant: CombatantId,
        energy: u32,
        max_energy: u32,
    },
}

impl GameError for InvariantViolation {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ShieldAboveCapacity { .. } => "INVARIANT_SHIELD_ABOVE_CAPACITY",
            Self::HpAboveMax { .. } => "INVARIANT_HP_ABOVE_MAX",
            Self::EnergyAboveMax { .. } => "INVARIANT_ENERGY_ABOVE_MAX",
        }
    }
}

//! Structured record of everything one resolution step did.

use crate::skill::{SkillId, Trigger};
use crate::state::{CombatantId, ModifierKind};

use super::shield::ShieldGain;

/// One observable step of an action or turn tick, in resolution order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatEvent {
    EnergySpent {
        combatant: CombatantId,
        skill: SkillId,
        amount: u32,
    },
    EnergyRegenerated {
        combatant: CombatantId,
        amount: u32,
    },
    Damaged {
        source: Option<CombatantId>,
        target: CombatantId,
        skill: SkillId,
        raw: u32,
        /// Damage left after standing reduction.
        reduced: u32,
        absorbed: u32,
        /// Damage that reached HP, capped at the HP the target had.
        hp_lost: u32,
    },
    ShieldGained {
        target: CombatantId,
        skill: SkillId,
        gain: ShieldGain,
    },
    ModifierInstalled {
        target: CombatantId,
        skill: SkillId,
        kind: ModifierKind,
    },
    PassiveFired {
        owner: CombatantId,
        skill: SkillId,
        trigger: Trigger,
    },
    Reflected {
        reflector: CombatantId,
        target: CombatantId,
        skill: SkillId,
        amount: u32,
        hp_lost: u32,
    },
    SurvivedFatal {
        combatant: CombatantId,
        skill: SkillId,
        hp: u32,
    },
    Defeated {
        combatant: CombatantId,
    },
}

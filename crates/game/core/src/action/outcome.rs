//! Structured results handed to presentation and transport layers.

use crate::combat::CombatEvent;
use crate::skill::SkillId;
use crate::state::{CombatantId, Fight};

/// HP and shield of one combatant before and after a resolution step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantDelta {
    pub combatant: CombatantId,
    pub hp_before: u32,
    pub hp_after: u32,
    pub shield_before: u32,
    pub shield_after: u32,
}

impl CombatantDelta {
    pub fn hp_change(&self) -> i64 {
        i64::from(self.hp_after) - i64::from(self.hp_before)
    }

    pub fn shield_change(&self) -> i64 {
        i64::from(self.shield_after) - i64::from(self.shield_before)
    }

    /// Deltas for every combatant whose HP or shield differs between the two
    /// fights, in ascending id order.
    pub fn between(before: &Fight, after: &Fight) -> Vec<Self> {
        after
            .combatants()
            .filter_map(|now| {
                let then = before.combatant(now.id)?;
                let delta = Self {
                    combatant: now.id,
                    hp_before: then.hp,
                    hp_after: now.hp,
                    shield_before: then.shield,
                    shield_after: now.shield,
                };
                (delta.hp_change() != 0 || delta.shield_change() != 0).then_some(delta)
            })
            .collect()
    }
}

/// Everything one ability use did.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionOutcome {
    pub caster: CombatantId,
    pub skill: SkillId,
    /// Resolved target set, in resolution order.
    pub targets: Vec<CombatantId>,
    pub events: Vec<CombatEvent>,
    pub deltas: Vec<CombatantDelta>,
}

impl ActionOutcome {
    pub fn delta(&self, combatant: CombatantId) -> Option<&CombatantDelta> {
        self.deltas.iter().find(|delta| delta.combatant == combatant)
    }

    /// Passives that fired, with their owner, in firing order.
    pub fn passives_fired(&self) -> Vec<(CombatantId, &SkillId)> {
        passives_fired(&self.events)
    }

    /// Combatants whose survive-fatal passive was consumed.
    pub fn survived_fatal(&self) -> Vec<CombatantId> {
        survived_fatal(&self.events)
    }

    pub fn defeated(&self) -> Vec<CombatantId> {
        defeated(&self.events)
    }
}

/// Everything a turn tick did.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnOutcome {
    pub combatant: CombatantId,
    pub energy_regenerated: u32,
    pub events: Vec<CombatEvent>,
    pub deltas: Vec<CombatantDelta>,
}

impl TurnOutcome {
    pub fn passives_fired(&self) -> Vec<(CombatantId, &SkillId)> {
        passives_fired(&self.events)
    }
}

fn passives_fired(events: &[CombatEvent]) -> Vec<(CombatantId, &SkillId)> {
    events
        .iter()
        .filter_map(|event| match event {
            CombatEvent::PassiveFired { owner, skill, .. } => Some((*owner, skill)),
            _ => None,
        })
        .collect()
}

fn survived_fatal(events: &[CombatEvent]) -> Vec<CombatantId> {
    events
        .iter()
        .filter_map(|event| match event {
            CombatEvent::SurvivedFatal { combatant, .. } => Some(*combatant),
            _ => None,
        })
        .collect()
}

fn defeated(events: &[CombatEvent]) -> Vec<CombatantId> {
    events
        .iter()
        .filter_map(|event| match event {
            CombatEvent::Defeated { combatant } => Some(*combatant),
            _ => None,
        })
        .collect()
}

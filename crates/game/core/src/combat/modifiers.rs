//! Active standing-modifier view.

use crate::env::CombatEnv;
use crate::skill::{ContentError, SkillId, Trigger};
use crate::state::{Combatant, ModifierKind};

use super::condition::holds;

/// Totals of every standing modifier currently in force on a combatant.
///
/// Collected fresh on each read from two sources: modifiers installed during
/// the fight, and owned `Always` passives with a standing effect. Conditions on
/// both are evaluated against the combatant's state at collection time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActiveModifiers {
    pub damage_reduction: u32,
    pub provoke: u32,
    /// Shield-gain multipliers with their source skill, ascending by source.
    pub shield_gain: Vec<(SkillId, u32)>,
    pub shield_capacity: i64,
}

impl ActiveModifiers {
    pub fn collect(combatant: &Combatant, env: &CombatEnv<'_>) -> Result<Self, ContentError> {
        let mut active = Self::default();

        for modifier in combatant.modifiers.iter() {
            if holds(modifier.condition.as_ref(), combatant) {
                active.add(&modifier.source, modifier.kind);
            }
        }

        for skill_id in combatant.owned_skills() {
            let node = env.skill(skill_id)?;
            let Some(passive) = node.passive() else {
                continue;
            };
            if passive.trigger != Trigger::Always || !holds(passive.condition.as_ref(), combatant)
            {
                continue;
            }
            if let Some((kind, condition)) = ModifierKind::from_effect(&passive.effect)
                && holds(condition.as_ref(), combatant)
            {
                active.add(skill_id, kind);
            }
        }

        active.shield_gain.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(active)
    }

    fn add(&mut self, source: &SkillId, kind: ModifierKind) {
        match kind {
            ModifierKind::DamageReduction(amount) => {
                self.damage_reduction = self.damage_reduction.saturating_add(amount);
            }
            ModifierKind::Provoke(amount) => self.provoke = self.provoke.saturating_add(amount),
            ModifierKind::ShieldGain(multiplier) => {
                self.shield_gain.push((source.clone(), multiplier));
            }
            ModifierKind::ShieldCapacity(amount) => self.shield_capacity += i64::from(amount),
        }
    }

    /// Product of active shield-gain multipliers (1 when none are active).
    pub fn gain_multiplier(&self) -> u32 {
        self.shield_gain
            .iter()
            .fold(1u32, |acc, (_, multiplier)| acc.saturating_mul(*multiplier))
    }

    /// `base` adjusted by capacity modifiers, floored at zero.
    pub fn capacity(&self, base: u32) -> u32 {
        let adjusted = i64::from(base) + self.shield_capacity;
        u32::try_from(adjusted.max(0)).unwrap_or(u32::MAX)
    }
}

//! Standing modifiers installed on a combatant during a fight.

use crate::skill::{Condition, Effect, SkillId};

/// Kind and magnitude of a standing modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModifierKind {
    /// Flat reduction of incoming damage.
    DamageReduction(u32),
    /// Threat bonus.
    Provoke(u32),
    /// Multiplier on shield gains.
    ShieldGain(u32),
    /// Signed change to shield capacity.
    ShieldCapacity(i32),
}

impl ModifierKind {
    /// Standing modifier described by `effect`, with the condition it carries.
    ///
    /// Returns `None` for effects that apply immediately.
    pub fn from_effect(effect: &Effect) -> Option<(Self, Option<Condition>)> {
        match *effect {
            Effect::DamageReduction { amount } => Some((Self::DamageReduction(amount), None)),
            Effect::Provoke { amount } => Some((Self::Provoke(amount), None)),
            Effect::ModifyShieldGain { amount, condition } => {
                Some((Self::ShieldGain(amount), condition))
            }
            Effect::ModifyShieldCapacity { amount } => Some((Self::ShieldCapacity(amount), None)),
            Effect::Damage { .. }
            | Effect::AddShield { .. }
            | Effect::ReflectDamage { .. }
            | Effect::SurviveFatal => None,
        }
    }

    fn same_kind(&self, other: &Self) -> bool {
        core::mem::discriminant(self) == core::mem::discriminant(other)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StandingModifier {
    /// Skill whose effect installed the modifier.
    pub source: SkillId,
    pub kind: ModifierKind,
    /// Re-evaluated every time the modifier is read.
    pub condition: Option<Condition>,
}

/// Modifiers installed by ability effects and reactive passives.
///
/// A skill's modifier of a given kind never stacks with itself: installing it
/// again replaces the previous entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InstalledModifiers {
    entries: Vec<StandingModifier>,
}

impl InstalledModifiers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `modifier`, returning the entry it replaced.
    pub fn install(&mut self, modifier: StandingModifier) -> Option<StandingModifier> {
        let existing = self
            .entries
            .iter_mut()
            .find(|entry| entry.source == modifier.source && entry.kind.same_kind(&modifier.kind));
        match existing {
            Some(entry) => Some(core::mem::replace(entry, modifier)),
            None => {
                self.entries.push(modifier);
                None
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &StandingModifier> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

//! Tagged effects applied by abilities and passives.

use core::fmt;

use super::condition::Condition;
use super::trigger::Trigger;

/// Atomic state-mutating or modifier-installing operation.
///
/// Each variant carries only the fields its semantics need.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effect {
    /// Run `amount` through the damage pipeline (reduction, shield, HP, triggers).
    Damage { amount: u32 },

    /// Gain shield, scaled by active shield-gain modifiers and clamped to capacity.
    AddShield { amount: u32 },

    /// Standing flat reduction of incoming damage, applied before shield absorption.
    DamageReduction { amount: u32 },

    /// Deal a fixed `amount` back to the attacker. Only valid on on-take-damage passives.
    ReflectDamage { amount: u32 },

    /// Standing bonus to the owner's threat score.
    Provoke { amount: u32 },

    /// Standing multiplier (`amount`) on shield gains, optionally gated by `condition`.
    ModifyShieldGain {
        amount: u32,
        #[cfg_attr(feature = "serde", serde(default))]
        condition: Option<Condition>,
    },

    /// Standing change to shield capacity.
    ModifyShieldCapacity { amount: i32 },

    /// Pin HP instead of dying, once per fight. Only valid on on-fatal-damage passives.
    SurviveFatal,
}

/// Where an effect is declared, which decides how it is resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectSite {
    /// An entry of an ability's `effects`, applied per hit to each target.
    AbilityHit,
    /// An entry of an ability's `self_effects`, applied once to the caster.
    SelfEffect,
    /// The single effect of a passive with the given trigger.
    Passive(Trigger),
}

impl fmt::Display for EffectSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AbilityHit => f.write_str("ability hit"),
            Self::SelfEffect => f.write_str("self effect"),
            Self::Passive(trigger) => write!(f, "{trigger} passive"),
        }
    }
}

impl Effect {
    /// Stable snake_case tag, used in logs and error messages.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Damage { .. } => "damage",
            Self::AddShield { .. } => "add_shield",
            Self::DamageReduction { .. } => "damage_reduction",
            Self::ReflectDamage { .. } => "reflect_damage",
            Self::Provoke { .. } => "provoke",
            Self::ModifyShieldGain { .. } => "modify_shield_gain",
            Self::ModifyShieldCapacity { .. } => "modify_shield_capacity",
            Self::SurviveFatal => "survive_fatal",
        }
    }

    /// Standing effects install a modifier instead of mutating HP or shield.
    pub const fn is_standing(&self) -> bool {
        matches!(
            self,
            Self::DamageReduction { .. }
                | Self::Provoke { .. }
                | Self::ModifyShieldGain { .. }
                | Self::ModifyShieldCapacity { .. }
        )
    }

    /// Whether this effect has a defined meaning when declared at `site`.
    pub fn permitted_at(&self, site: EffectSite) -> bool {
        match self {
            Self::Damage { .. } => site == EffectSite::AbilityHit,
            Self::ReflectDamage { .. } => site == EffectSite::Passive(Trigger::OnTakeDamage),
            Self::SurviveFatal => site == EffectSite::Passive(Trigger::OnFatalDamage),
            Self::AddShield { .. }
            | Self::DamageReduction { .. }
            | Self::Provoke { .. }
            | Self::ModifyShieldGain { .. }
            | Self::ModifyShieldCapacity { .. } => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflect_only_on_take_damage() {
        let reflect = Effect::ReflectDamage { amount: 1 };
        assert!(reflect.permitted_at(EffectSite::Passive(Trigger::OnTakeDamage)));
        assert!(!reflect.permitted_at(EffectSite::Passive(Trigger::Always)));
        assert!(!reflect.permitted_at(EffectSite::Passive(Trigger::OnFatalDamage)));
        assert!(!reflect.permitted_at(EffectSite::AbilityHit));
    }

    #[test]
    fn survive_fatal_only_on_fatal_damage() {
        assert!(Effect::SurviveFatal.permitted_at(EffectSite::Passive(Trigger::OnFatalDamage)));
        assert!(!Effect::SurviveFatal.permitted_at(EffectSite::SelfEffect));
    }

    #[test]
    fn damage_is_not_a_self_effect() {
        let damage = Effect::Damage { amount: 3 };
        assert!(damage.permitted_at(EffectSite::AbilityHit));
        assert!(!damage.permitted_at(EffectSite::SelfEffect));
        assert!(!damage.permitted_at(EffectSite::Passive(Trigger::OnTakeDamage)));
    }

    #[test]
    fn standing_effects() {
        assert!(Effect::Provoke { amount: 2 }.is_standing());
        assert!(Effect::ModifyShieldCapacity { amount: -1 }.is_standing());
        assert!(!Effect::AddShield { amount: 2 }.is_standing());
        assert!(!Effect::SurviveFatal.is_standing());
    }
}

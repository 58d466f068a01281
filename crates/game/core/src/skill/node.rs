//! Skill tree nodes and their ability/passive payloads.

use core::fmt;

use super::class::CharacterClass;
use super::condition::Condition;
use super::effect::{Effect, EffectSite};
use super::error::ContentError;
use super::targeting::TargetType;
use super::trigger::Trigger;

/// Content-defined skill identifier (`"taunt"`, `"undying"`).
///
/// Ordering is plain string ordering; the trigger dispatcher relies on it as the
/// tie-break when several passives answer the same event.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SkillId(pub String);

impl SkillId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SkillId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl core::borrow::Borrow<str> for SkillId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// One node of a class skill tree.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillNode {
    pub id: SkillId,
    pub name: String,
    pub description: String,

    /// Owning class. `None` marks a boss-exclusive skill.
    #[cfg_attr(feature = "serde", serde(default))]
    pub class: Option<CharacterClass>,

    pub level_required: u32,

    /// Prerequisite skill that must already be owned.
    #[cfg_attr(feature = "serde", serde(default))]
    pub requires: Option<SkillId>,

    pub kind: SkillKind,
}

/// Variant payload of a skill node: exactly one of ability or passive.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillKind {
    Ability(Ability),
    Passive(Passive),
}

/// Active, resource-costing payload.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ability {
    pub cost: u32,
    pub target_type: TargetType,
    pub hits: u32,
    /// Applied per hit to each resolved target, in declaration order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: Vec<Effect>,
    /// Applied once to the caster after all hits, in declaration order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub self_effects: Vec<Effect>,
}

/// Automatic payload fired by the trigger dispatcher.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Passive {
    pub trigger: Trigger,
    pub effect: Effect,
    #[cfg_attr(feature = "serde", serde(default))]
    pub condition: Option<Condition>,
}

impl SkillNode {
    pub fn ability(&self) -> Option<&Ability> {
        match &self.kind {
            SkillKind::Ability(ability) => Some(ability),
            SkillKind::Passive(_) => None,
        }
    }

    pub fn passive(&self) -> Option<&Passive> {
        match &self.kind {
            SkillKind::Passive(passive) => Some(passive),
            SkillKind::Ability(_) => None,
        }
    }

    pub fn is_ability(&self) -> bool {
        self.ability().is_some()
    }

    /// Checks that every effect is declared where it has a meaning and that
    /// ability hit counts are in range.
    pub fn validate(&self, max_hits: u32) -> Result<(), ContentError> {
        match &self.kind {
            SkillKind::Ability(ability) => ability.validate(&self.id, max_hits),
            SkillKind::Passive(passive) => {
                check_site(&self.id, &passive.effect, EffectSite::Passive(passive.trigger))
            }
        }
    }
}

impl Ability {
    /// See [`SkillNode::validate`].
    pub fn validate(&self, skill: &SkillId, max_hits: u32) -> Result<(), ContentError> {
        if self.hits == 0 || self.hits > max_hits {
            return Err(ContentError::InvalidHits {
                skill: skill.clone(),
                hits: self.hits,
                max: max_hits,
            });
        }
        for effect in &self.effects {
            check_site(skill, effect, EffectSite::AbilityHit)?;
        }
        for effect in &self.self_effects {
            check_site(skill, effect, EffectSite::SelfEffect)?;
        }
        Ok(())
    }
}

fn check_site(skill: &SkillId, effect: &Effect, site: EffectSite) -> Result<(), ContentError> {
    if effect.permitted_at(site) {
        Ok(())
    } else {
        Err(ContentError::MisplacedEffect {
            skill: skill.clone(),
            effect: effect.name(),
            site,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, kind: SkillKind) -> SkillNode {
        SkillNode {
            id: id.into(),
            name: id.to_owned(),
            description: String::new(),
            class: Some(CharacterClass::Tank),
            level_required: 1,
            requires: None,
            kind,
        }
    }

    #[test]
    fn ability_with_zero_hits_is_rejected() {
        let skill = node(
            "empty",
            SkillKind::Ability(Ability {
                cost: 0,
                target_type: TargetType::SelfOnly,
                hits: 0,
                effects: vec![],
                self_effects: vec![],
            }),
        );
        assert!(matches!(
            skill.validate(16),
            Err(ContentError::InvalidHits { hits: 0, .. })
        ));
    }

    #[test]
    fn reflect_on_always_passive_is_misplaced() {
        let skill = node(
            "thorns",
            SkillKind::Passive(Passive {
                trigger: Trigger::Always,
                effect: Effect::ReflectDamage { amount: 1 },
                condition: None,
            }),
        );
        let err = skill.validate(16).unwrap_err();
        assert_eq!(
            err,
            ContentError::MisplacedEffect {
                skill: "thorns".into(),
                effect: "reflect_damage",
                site: EffectSite::Passive(Trigger::Always),
            }
        );
    }

    #[test]
    fn skill_ids_order_as_strings() {
        let mut ids: Vec<SkillId> = vec!["undying".into(), "counter_stance".into(), "last_stand".into()];
        ids.sort();
        assert_eq!(ids[0].as_str(), "counter_stance");
        assert_eq!(ids[2].as_str(), "undying");
    }
}

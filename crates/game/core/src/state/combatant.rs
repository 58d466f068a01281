//! Combatant state for one fight.

use core::fmt;
use std::collections::{BTreeMap, BTreeSet};

use crate::action::Action;
use crate::combat::{self, ActiveModifiers};
use crate::env::CombatEnv;
use crate::skill::{
    BossDefinition, CharacterAttributes, CharacterClass, ContentError, SkillId, SkillNode,
};

use super::error::InvariantViolation;
use super::modifiers::InstalledModifiers;

/// Identifier of a combatant within a fight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantId(pub u32);

impl fmt::Display for CombatantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "combatant#{}", self.0)
    }
}

/// Which side of the fight a combatant is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Party,
    Enemy,
}

impl Side {
    pub const fn opposing(self) -> Self {
        match self {
            Self::Party => Self::Enemy,
            Self::Enemy => Self::Party,
        }
    }
}

bitflags::bitflags! {
    /// Host-imposed conditions that stop a combatant from using abilities.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct StatusFlags: u8 {
        const SILENCED = 1 << 0;
        const STUNNED = 1 << 1;
    }
}

/// Collaborator-produced description of a party member.
///
/// `skills` is trusted to already satisfy level and prerequisite gating.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterSheet {
    pub name: String,
    pub class: CharacterClass,
    pub level: u32,
    pub skills: BTreeSet<SkillId>,
}

impl CharacterSheet {
    pub fn new(name: impl Into<String>, class: CharacterClass, level: u32) -> Self {
        Self {
            name: name.into(),
            class,
            level,
            skills: BTreeSet::new(),
        }
    }

    pub fn with_skill(mut self, id: impl Into<SkillId>) -> Self {
        self.skills.insert(id.into());
        self
    }
}

/// Live per-fight state of one participant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Combatant {
    pub id: CombatantId,
    pub name: String,
    pub side: Side,
    pub class: Option<CharacterClass>,
    pub level: u32,

    pub hp: u32,
    pub max_hp: u32,
    pub shield: u32,
    /// Capacity before standing capacity modifiers.
    pub base_shield_capacity: u32,

    pub energy: u32,
    pub max_energy: u32,
    pub energy_regen: u32,
    pub base_threat: u32,

    pub status: StatusFlags,
    pub modifiers: InstalledModifiers,

    owned_skills: BTreeSet<SkillId>,
    actions: BTreeMap<SkillId, Action>,
}

impl Combatant {
    /// Builds a party member from its character sheet and class attributes.
    ///
    /// Ability skills are projected into [`Action`]s here, once.
    ///
    /// # Errors
    ///
    /// Fails if the class has no attributes or a skill id is not in the tables.
    pub fn from_character(
        id: CombatantId,
        sheet: &CharacterSheet,
        env: &CombatEnv<'_>,
    ) -> Result<Self, ContentError> {
        let attributes = env
            .classes()?
            .attributes(sheet.class)
            .ok_or(ContentError::MissingAttributes(sheet.class))?;

        Self::build(
            id,
            sheet.name.clone(),
            Side::Party,
            Some(sheet.class),
            sheet.level,
            attributes,
            sheet.skills.iter().cloned(),
            env,
        )
    }

    /// Builds an enemy from a boss definition.
    pub fn from_boss(
        id: CombatantId,
        boss: &BossDefinition,
        env: &CombatEnv<'_>,
    ) -> Result<Self, ContentError> {
        Self::build(
            id,
            boss.name.clone(),
            Side::Enemy,
            None,
            boss.level,
            boss.attributes,
            boss.skills.iter().cloned(),
            env,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn build(
        id: CombatantId,
        name: String,
        side: Side,
        class: Option<CharacterClass>,
        level: u32,
        attributes: CharacterAttributes,
        skills: impl IntoIterator<Item = SkillId>,
        env: &CombatEnv<'_>,
    ) -> Result<Self, ContentError> {
        let mut combatant = Self::new(id, name, side, attributes);
        combatant.class = class;
        combatant.level = level;
        for skill_id in skills {
            combatant.grant_skill(env.skill(&skill_id)?);
        }
        Ok(combatant)
    }

    /// Creates a combatant at full HP and energy, with no shield and no skills.
    pub fn new(
        id: CombatantId,
        name: impl Into<String>,
        side: Side,
        attributes: CharacterAttributes,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            side,
            class: None,
            level: 1,
            hp: attributes.max_hp,
            max_hp: attributes.max_hp,
            shield: 0,
            base_shield_capacity: attributes.shield_capacity,
            energy: attributes.max_energy,
            max_energy: attributes.max_energy,
            energy_regen: attributes.energy_regen,
            base_threat: attributes.threat,
            status: StatusFlags::empty(),
            modifiers: InstalledModifiers::new(),
            owned_skills: BTreeSet::new(),
            actions: BTreeMap::new(),
        }
    }

    /// Adds `node` to the owned skills, projecting it into an [`Action`] if it
    /// is an ability.
    pub fn grant_skill(&mut self, node: &SkillNode) {
        if let Some(action) = Action::project(node) {
            self.actions.insert(node.id.clone(), action);
        }
        self.owned_skills.insert(node.id.clone());
    }

    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }

    pub fn is_standing(&self) -> bool {
        !self.is_defeated()
    }

    /// Whether host-imposed status currently blocks ability use.
    pub fn is_incapacitated(&self) -> bool {
        self.status
            .intersects(StatusFlags::SILENCED | StatusFlags::STUNNED)
    }

    pub fn owns(&self, skill: &SkillId) -> bool {
        self.owned_skills.contains(skill)
    }

    /// Owned skill ids in ascending order.
    pub fn owned_skills(&self) -> impl Iterator<Item = &SkillId> {
        self.owned_skills.iter()
    }

    pub fn action(&self, skill: &SkillId) -> Option<&Action> {
        self.actions.get(skill)
    }

    /// Projected abilities in ascending skill id order.
    pub fn actions(&self) -> impl Iterator<Item = &Action> {
        self.actions.values()
    }

    /// Active modifier totals, re-collected from the current state.
    pub fn active_modifiers(&self, env: &CombatEnv<'_>) -> Result<ActiveModifiers, ContentError> {
        ActiveModifiers::collect(self, env)
    }

    /// Shield capacity after active capacity modifiers.
    pub fn shield_capacity(&self, env: &CombatEnv<'_>) -> Result<u32, ContentError> {
        combat::effective_capacity(self, env)
    }

    /// Targeting score exposed to enemy AI: base threat plus active provoke.
    pub fn threat(&self, env: &CombatEnv<'_>) -> Result<u32, ContentError> {
        let modifiers = self.active_modifiers(env)?;
        Ok(self.base_threat.saturating_add(modifiers.provoke))
    }

    /// Checks resource ranges against the given effective shield capacity.
    pub fn check_invariants(&self, shield_capacity: u32) -> Result<(), InvariantViolation> {
        if self.shield > shield_capacity {
            return Err(InvariantViolation::ShieldAboveCapacity {
                combatant: self.id,
                shield: self.shield,
                capacity: shield_capacity,
            });
        }
        if self.hp > self.max_hp {
            return Err(InvariantViolation::HpAboveMax {
                combatant: self.id,
                hp: self.hp,
                max_hp: self.max_hp,
            });
        }
        if self.energy > self.max_energy {
            return Err(InvariantViolation::EnergyAboveMax {
                combatant: self.id,
                energy: self.energy,
                max_energy: self.max_energy,
            });
        }
        Ok(())
    }
}

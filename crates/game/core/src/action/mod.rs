//! Engine-facing actions.
//!
//! Ability skills are projected into [`Action`]s once, when a combatant is
//! built. Callers request an ability use with an [`ActionCommand`] and a turn
//! tick with a [`BeginTurn`]; both run through the [`CombatTransition`]
//! phases.

mod error;
pub mod execute;
mod outcome;
mod transition;

pub use error::ActionError;
pub use execute::resolve_targets;
pub use outcome::{ActionOutcome, CombatantDelta, TurnOutcome};
pub use transition::CombatTransition;

use crate::skill::{Effect, SkillId, SkillNode, TargetType};
use crate::state::CombatantId;

/// Projection of an ability skill consumed by the executor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Action {
    pub id: SkillId,
    pub name: String,
    pub cost: u32,
    pub target_type: TargetType,
    pub hits: u32,
    pub effects: Vec<Effect>,
    pub self_effects: Vec<Effect>,
}

impl Action {
    /// Projects an ability node. Passives have no action form.
    pub fn project(node: &SkillNode) -> Option<Self> {
        let ability = node.ability()?;
        Some(Self {
            id: node.id.clone(),
            name: node.name.clone(),
            cost: ability.cost,
            target_type: ability.target_type,
            hits: ability.hits,
            effects: ability.effects.clone(),
            self_effects: ability.self_effects.clone(),
        })
    }
}

/// Request for `caster` to use the ability `skill`.
///
/// `target` is required for single-target abilities and ignored otherwise.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionCommand {
    pub caster: CombatantId,
    pub skill: SkillId,
    pub target: Option<CombatantId>,
}

impl ActionCommand {
    pub fn new(caster: CombatantId, skill: impl Into<SkillId>) -> Self {
        Self {
            caster,
            skill: skill.into(),
            target: None,
        }
    }

    pub fn with_target(mut self, target: CombatantId) -> Self {
        self.target = Some(target);
        self
    }
}

/// Start of `combatant`'s turn: energy regeneration and `Always` passives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BeginTurn {
    pub combatant: CombatantId,
}

impl BeginTurn {
    pub const fn new(combatant: CombatantId) -> Self {
        Self { combatant }
    }
}

//! Pre- and post-execution checks.
//!
//! Pre-validation rejects an ability use before anything is mutated: caster
//! state, ownership, energy, targets, and the placement of every effect that
//! could run during the action. Post-validation checks the HP, energy and
//! shield ranges of every combatant.

use crate::action::{Action, ActionCommand, ActionError};
use crate::config::CombatConfig;
use crate::env::CombatEnv;
use crate::state::{Combatant, Fight};

use super::targeting::resolve_targets;

/// Checks that `command` can be performed against `fight` as it stands.
///
/// Returns the caster's projected action on success.
pub(super) fn pre_validate<'f>(
    command: &ActionCommand,
    fight: &'f Fight,
    env: &CombatEnv<'_>,
    config: &CombatConfig,
) -> Result<&'f Action, ActionError> {
    let caster = caster(command, fight)?;
    if !caster.owns(&command.skill) {
        return Err(ActionError::SkillNotOwned {
            caster: caster.id,
            skill: command.skill.clone(),
        });
    }

    let node = env.skill(&command.skill)?;
    let action = caster
        .action(&command.skill)
        .ok_or_else(|| ActionError::NotAnAbility(command.skill.clone()))?;
    node.validate(config.max_hits)?;

    if caster.energy < action.cost {
        return Err(ActionError::InsufficientEnergy {
            required: action.cost,
            available: caster.energy,
        });
    }

    resolve_targets(fight, caster, action, command.target)?;
    check_passives(fight, env, config)?;
    Ok(action)
}

/// Caster lookup shared by pre-validation and the pipeline.
pub(super) fn caster<'f>(
    command: &ActionCommand,
    fight: &'f Fight,
) -> Result<&'f Combatant, ActionError> {
    let caster = fight
        .combatant(command.caster)
        .ok_or(ActionError::CasterNotFound(command.caster))?;
    if caster.is_defeated() {
        return Err(ActionError::CasterDefeated(caster.id));
    }
    if caster.is_incapacitated() {
        return Err(ActionError::CasterIncapacitated(caster.id));
    }
    Ok(caster)
}

/// Every owned skill of every combatant must be well-formed, since any of
/// their passives may fire while the action resolves.
fn check_passives(
    fight: &Fight,
    env: &CombatEnv<'_>,
    config: &CombatConfig,
) -> Result<(), ActionError> {
    for combatant in fight.combatants() {
        for skill in combatant.owned_skills() {
            env.skill(skill)?.validate(config.max_hits)?;
        }
    }
    Ok(())
}

/// Checks resource ranges of every combatant after a mutation.
pub(super) fn post_validate(fight: &Fight, env: &CombatEnv<'_>) -> Result<(), ActionError> {
    for combatant in fight.combatants() {
        let capacity = combatant.shield_capacity(env)?;
        combatant.check_invariants(capacity)?;
    }
    Ok(())
}

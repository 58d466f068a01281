//! Ability use and turn tick orchestration.
//!
//! Ability use runs `ResolveTargets → ApplyHits → ApplySelfEffects`:
//! 1. Spend the ability's energy cost
//! 2. Resolve the target set from the target type
//! 3. For each hit, for each target, apply `effects` in declared order
//! 4. Apply `self_effects` to the caster
//!
//! A target defeated mid-action receives no further hits. If the caster falls
//! (e.g. to reflected damage) the remaining hits and self-effects are skipped.

use tracing::debug;

use crate::action::{ActionCommand, ActionError, ActionOutcome, CombatantDelta, TurnOutcome};
use crate::combat::{CombatContext, CombatEvent, Interaction, TriggerEvent, dispatch, resolver};
use crate::config::CombatConfig;
use crate::env::CombatEnv;
use crate::state::{CombatantId, Fight};

use super::targeting::resolve_targets;
use super::validation::caster;

pub(super) fn apply(
    command: &ActionCommand,
    fight: &mut Fight,
    env: &CombatEnv<'_>,
    config: &CombatConfig,
) -> Result<ActionOutcome, ActionError> {
    let before = fight.clone();

    let caster_state = caster(command, fight)?;
    let action = caster_state
        .action(&command.skill)
        .cloned()
        .ok_or_else(|| ActionError::NotAnAbility(command.skill.clone()))?;
    let targets = resolve_targets(fight, caster_state, &action, command.target)?;

    let caster_id = command.caster;
    let caster_mut = fight
        .combatant_mut(caster_id)
        .ok_or(ActionError::CasterNotFound(caster_id))?;
    caster_mut.energy = caster_mut.energy.checked_sub(action.cost).ok_or(
        ActionError::InsufficientEnergy {
            required: action.cost,
            available: caster_mut.energy,
        },
    )?;

    let mut ctx = CombatContext::new(fight, *env, config);
    ctx.emit(CombatEvent::EnergySpent {
        combatant: caster_id,
        skill: action.id.clone(),
        amount: action.cost,
    });

    let hit = Interaction::ability_hit(action.id.clone(), caster_id);
    'hits: for round in 0..action.hits {
        for &target in &targets {
            for effect in &action.effects {
                if ctx.combatant(caster_id)?.is_defeated() {
                    debug!(target: "combat::action", caster = %caster_id, round, "caster fell mid-action");
                    break 'hits;
                }
                if ctx.combatant(target)?.is_defeated() {
                    break;
                }
                resolver::apply(&mut ctx, effect, target, &hit)?;
            }
        }
    }

    if ctx.combatant(caster_id)?.is_standing() {
        let own = Interaction::self_effect(action.id.clone(), caster_id);
        for effect in &action.self_effects {
            resolver::apply(&mut ctx, effect, caster_id, &own)?;
        }
    }

    let events = ctx.into_events();
    Ok(ActionOutcome {
        caster: caster_id,
        skill: action.id,
        targets,
        events,
        deltas: CombatantDelta::between(&before, fight),
    })
}

/// Regenerates energy and fires immediate `Always` passives for `combatant`.
pub(super) fn begin_turn(
    combatant: CombatantId,
    fight: &mut Fight,
    env: &CombatEnv<'_>,
    config: &CombatConfig,
) -> Result<TurnOutcome, ActionError> {
    let before = fight.clone();

    let current = fight
        .combatant_mut(combatant)
        .ok_or(ActionError::CasterNotFound(combatant))?;
    if current.is_defeated() {
        return Err(ActionError::CasterDefeated(combatant));
    }

    let mut energy_regenerated = 0;
    if config.energy_regen_on_turn {
        let energy = current
            .energy
            .saturating_add(current.energy_regen)
            .min(current.max_energy);
        energy_regenerated = energy.saturating_sub(current.energy);
        current.energy = energy;
    }
    fight.turns += 1;

    let mut ctx = CombatContext::new(fight, *env, config);
    if energy_regenerated > 0 {
        ctx.emit(CombatEvent::EnergyRegenerated {
            combatant,
            amount: energy_regenerated,
        });
    }
    dispatch(&mut ctx, combatant, TriggerEvent::Tick)?;

    let events = ctx.into_events();
    Ok(TurnOutcome {
        combatant,
        energy_regenerated,
        events,
        deltas: CombatantDelta::between(&before, fight),
    })
}

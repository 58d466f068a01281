//! Ability execution through the three transition phases.
//!
//! 1. **Pre-validation**: caster state, ownership, energy, targets, effect
//!    placement. Nothing is mutated.
//! 2. **Apply**: spend energy, resolve targets, apply hits then self-effects.
//! 3. **Post-validation**: HP, energy and shield ranges of every combatant.
//!
//! Apply errors leave the fight partially mutated; the engine runs
//! transitions on a working copy and only commits on success.

mod pipeline;
mod targeting;
mod validation;

pub use targeting::resolve_targets;

use crate::action::{
    ActionCommand, ActionError, ActionOutcome, BeginTurn, CombatTransition, TurnOutcome,
};
use crate::config::CombatConfig;
use crate::env::CombatEnv;
use crate::state::Fight;

impl CombatTransition for ActionCommand {
    type Error = ActionError;
    type Outcome = ActionOutcome;

    fn pre_validate(
        &self,
        fight: &Fight,
        env: &CombatEnv<'_>,
        config: &CombatConfig,
    ) -> Result<(), Self::Error> {
        validation::pre_validate(self, fight, env, config).map(|_| ())
    }

    fn apply(
        &self,
        fight: &mut Fight,
        env: &CombatEnv<'_>,
        config: &CombatConfig,
    ) -> Result<Self::Outcome, Self::Error> {
        pipeline::apply(self, fight, env, config)
    }

    fn post_validate(&self, fight: &Fight, env: &CombatEnv<'_>) -> Result<(), Self::Error> {
        validation::post_validate(fight, env)
    }
}

impl CombatTransition for BeginTurn {
    type Error = ActionError;
    type Outcome = TurnOutcome;

    fn pre_validate(
        &self,
        fight: &Fight,
        _env: &CombatEnv<'_>,
        _config: &CombatConfig,
    ) -> Result<(), Self::Error> {
        let combatant = fight
            .combatant(self.combatant)
            .ok_or(ActionError::CasterNotFound(self.combatant))?;
        if combatant.is_defeated() {
            return Err(ActionError::CasterDefeated(self.combatant));
        }
        Ok(())
    }

    fn apply(
        &self,
        fight: &mut Fight,
        env: &CombatEnv<'_>,
        config: &CombatConfig,
    ) -> Result<Self::Outcome, Self::Error> {
        pipeline::begin_turn(self.combatant, fight, env, config)
    }

    fn post_validate(&self, fight: &Fight, env: &CombatEnv<'_>) -> Result<(), Self::Error> {
        validation::post_validate(fight, env)
    }
}

//! Combat engine facade.
//!
//! The [`CombatEngine`] is the authoritative reducer for a [`Fight`]. Every
//! mutation runs through the transition phases on a working copy, which is
//! committed only when all three phases succeed; a failed action leaves the
//! fight exactly as it was.

mod errors;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use tracing::{error, info, warn};

use crate::action::{ActionCommand, ActionOutcome, BeginTurn, CombatTransition, TurnOutcome};
use crate::config::CombatConfig;
use crate::env::CombatEnv;
use crate::error::GameError;
use crate::state::Fight;

/// Drives a transition through `pre_validate → apply → post_validate`.
fn drive_transition<T>(
    transition: &T,
    fight: &mut Fight,
    env: &CombatEnv<'_>,
    config: &CombatConfig,
) -> Result<T::Outcome, TransitionPhaseError<T::Error>>
where
    T: CombatTransition,
{
    transition
        .pre_validate(fight, env, config)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let outcome = transition
        .apply(fight, env, config)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(fight, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(outcome)
}

/// Resolves ability uses and turn ticks against one fight.
pub struct CombatEngine<'a> {
    fight: &'a mut Fight,
    config: &'a CombatConfig,
}

impl<'a> CombatEngine<'a> {
    pub fn new(fight: &'a mut Fight, config: &'a CombatConfig) -> Self {
        Self { fight, config }
    }

    pub fn fight(&self) -> &Fight {
        self.fight
    }

    /// Resolves one ability use, including every passive it triggers.
    pub fn execute(
        &mut self,
        env: CombatEnv<'_>,
        command: &ActionCommand,
    ) -> Result<ActionOutcome, ExecuteError> {
        let outcome = self.commit(command, &env).map_err(ExecuteError::Ability);
        match &outcome {
            Ok(outcome) => info!(
                target: "combat::engine",
                caster = %command.caster,
                skill = %command.skill,
                events = outcome.events.len(),
                "ability resolved"
            ),
            Err(error) => log_failure(error, &command.skill),
        }
        outcome
    }

    /// Starts a combatant's turn: energy regeneration and `Always` passives.
    pub fn begin_turn(
        &mut self,
        env: CombatEnv<'_>,
        turn: BeginTurn,
    ) -> Result<TurnOutcome, ExecuteError> {
        let outcome = self.commit(&turn, &env).map_err(ExecuteError::Turn);
        if let Err(error) = &outcome {
            log_failure(error, &format!("turn of {}", turn.combatant));
        }
        outcome
    }

    fn commit<T>(
        &mut self,
        transition: &T,
        env: &CombatEnv<'_>,
    ) -> Result<T::Outcome, TransitionPhaseError<T::Error>>
    where
        T: CombatTransition,
    {
        let mut working = self.fight.clone();
        let outcome = drive_transition(transition, &mut working, env, self.config)?;
        *self.fight = working;
        Ok(outcome)
    }
}

fn log_failure(error: &ExecuteError, what: &dyn std::fmt::Display) {
    if error.is_rejection() {
        warn!(
            target: "combat::engine",
            code = error.error_code(),
            %what,
            "action rejected: {error}"
        );
    } else {
        error!(
            target: "combat::engine",
            code = error.error_code(),
            severity = error.severity().as_str(),
            %what,
            "action failed: {error}"
        );
    }
}

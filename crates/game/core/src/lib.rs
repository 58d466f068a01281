//! Deterministic combat effect resolution for a party-vs-boss RPG.
//!
//! `combat-core` defines the data model (skills, effects, combatants), the
//! resolution rules (conditions, shields, effects, triggers, ability
//! execution) and pure APIs shared by the content loader and the simulator.
//! All fight mutation flows through [`engine::CombatEngine`]; skill, class and
//! boss data is read through the oracles in [`env`].
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod skill;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use action::{
    Action, ActionCommand, ActionError, ActionOutcome, BeginTurn, CombatTransition,
    CombatantDelta, TurnOutcome,
};
pub use combat::{ActiveModifiers, CombatEvent, ShieldGain};
pub use config::CombatConfig;
pub use engine::{CombatEngine, ExecuteError, TransitionPhase, TransitionPhaseError};
pub use env::{
    BossOracle, BossTable, ClassOracle, ClassTable, CombatEnv, Env, SkillOracle, SkillTable,
};
pub use error::{ErrorSeverity, GameError};
pub use skill::{
    Ability, BossDefinition, CharacterAttributes, CharacterClass, Condition, ContentError, Effect,
    EffectSite, Passive, SkillId, SkillKind, SkillNode, TargetType, Trigger,
};
pub use state::{
    CharacterSheet, Combatant, CombatantId, Fight, FightFlag, FightTracker, InvariantViolation,
    Side, StatusFlags,
};

//! Combat effect resolution.
//!
//! Leaf-first:
//!
//! - [`condition`]: pure predicates over a combatant's live state
//! - [`shield`]: gain, absorption and capacity arithmetic
//! - [`resolver`]: applies one tagged [`Effect`](crate::skill::Effect)
//! - [`damage`]: the reduction → shield → HP pipeline and reflection
//! - [`dispatch`]: fires passives for took-damage, fatal-damage and turn ticks
//!
//! Everything here mutates a [`Fight`](crate::state::Fight) through a
//! [`CombatContext`] and records what happened as [`CombatEvent`]s.

pub mod condition;
pub mod context;
pub mod damage;
pub mod dispatch;
pub mod events;
pub mod modifiers;
pub mod resolver;
pub mod shield;

pub use condition::evaluate;
pub use context::CombatContext;
pub use damage::{DamageReport, deal_damage, reflect};
pub use dispatch::{DispatchOutcome, TriggerEvent, dispatch};
pub use events::CombatEvent;
pub use modifiers::ActiveModifiers;
pub use resolver::{EffectOutcome, Interaction, InteractionKind};
pub use shield::{Absorption, ShieldGain, absorb, effective_capacity, settle};

#[cfg(test)]
mod tests;

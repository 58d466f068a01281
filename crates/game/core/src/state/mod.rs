//! Mutable per-fight state.
//!
//! A [`Fight`] owns every [`Combatant`] taking part plus the [`FightTracker`]
//! holding one-shot flags. Combatants are created at fight start from
//! collaborator-produced character sheets or boss definitions and discarded when
//! the fight ends. Nothing here is shared between fights.

mod combatant;
mod error;
mod fight;
mod modifiers;
mod tracker;

pub use combatant::{CharacterSheet, Combatant, CombatantId, Side, StatusFlags};
pub use error::InvariantViolation;
pub use fight::Fight;
pub use modifiers::{InstalledModifiers, ModifierKind, StandingModifier};
pub use tracker::{FightFlag, FightTracker};

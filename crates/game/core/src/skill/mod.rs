//! Static skill data: classes, skill nodes, effects, triggers and conditions.
//!
//! These types are produced once by the content loaders and shared read-only by
//! every fight. Each tagged family (effect, trigger, condition, target type) is a
//! closed enum; unknown tags fail at load time.

mod boss;
mod class;
mod condition;
mod effect;
mod error;
mod node;
mod targeting;
mod trigger;

pub use boss::BossDefinition;
pub use class::{CharacterAttributes, CharacterClass};
pub use condition::Condition;
pub use effect::{Effect, EffectSite};
pub use error::ContentError;
pub use node::{Ability, Passive, SkillId, SkillKind, SkillNode};
pub use targeting::TargetType;
pub use trigger::Trigger;

//! Combat events passives listen for.

/// Named combat event a passive skill reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Trigger {
    /// Evaluated on every turn tick. Standing effects on `Always` passives are
    /// live for as long as the skill is owned.
    Always,
    /// Owner took positive post-reduction damage from a hit.
    OnTakeDamage,
    /// Incoming damage would bring the owner's HP to zero.
    OnFatalDamage,
}

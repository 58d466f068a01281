//! Conditions gating passives and conditional modifiers.

/// Predicate over a combatant's live state.
///
/// Evaluated by [`crate::combat::evaluate`] at the moment the gated effect would
/// apply; results are never cached because HP changes throughout a fight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Condition {
    /// Current HP is strictly below `percent` of max HP.
    HpBelow { percent: u32 },
}

impl Condition {
    pub const fn hp_below(percent: u32) -> Self {
        Self::HpBelow { percent }
    }
}

//! Fight State Tracker: per-combatant, per-fight consumable flags.

use std::collections::BTreeMap;

use super::combatant::CombatantId;

/// One-shot flag a combatant can consume once per fight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FightFlag {
    /// A survive-fatal passive already intercepted lethal damage.
    SurviveFatalUsed,
}

/// Sole authority over one-shot flags. Reset only when a new fight begins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FightTracker {
    flags: BTreeMap<(CombatantId, FightFlag), bool>,
}

impl FightTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_set(&self, combatant: CombatantId, flag: FightFlag) -> bool {
        self.flags.get(&(combatant, flag)).copied().unwrap_or(false)
    }

    /// Sets the flag, returning `true` only if it was not already set.
    pub fn consume(&mut self, combatant: CombatantId, flag: FightFlag) -> bool {
        let entry = self.flags.entry((combatant, flag)).or_insert(false);
        if *entry {
            false
        } else {
            *entry = true;
            true
        }
    }

    /// Clears every flag, for hosts reusing a tracker across encounters.
    pub fn reset(&mut self) {
        self.flags.clear();
    }
}

//! One bounded combat encounter.

use std::collections::BTreeMap;

use super::combatant::{Combatant, CombatantId, Side};
use super::tracker::FightTracker;

/// Every combatant in an encounter plus its one-shot flag tracker.
///
/// Combatants are keyed by id, so iteration is always in ascending id order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fight {
    combatants: BTreeMap<CombatantId, Combatant>,
    pub tracker: FightTracker,
    /// Number of turns begun so far.
    pub turns: u32,
}

impl Fight {
    /// Starts a new fight with a freshly reset tracker.
    ///
    /// Ids must be unique.
    pub fn begin(combatants: impl IntoIterator<Item = Combatant>) -> Self {
        let mut by_id = BTreeMap::new();
        for combatant in combatants {
            let id = combatant.id;
            let previous = by_id.insert(id, combatant);
            debug_assert!(previous.is_none(), "duplicate combatant id {id}");
        }
        Self {
            combatants: by_id,
            tracker: FightTracker::new(),
            turns: 0,
        }
    }

    pub fn combatant(&self, id: CombatantId) -> Option<&Combatant> {
        self.combatants.get(&id)
    }

    pub fn combatant_mut(&mut self, id: CombatantId) -> Option<&mut Combatant> {
        self.combatants.get_mut(&id)
    }

    pub fn combatants(&self) -> impl Iterator<Item = &Combatant> {
        self.combatants.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = CombatantId> + '_ {
        self.combatants.keys().copied()
    }

    /// Ids of combatants on `side` that are still standing, ascending.
    pub fn standing(&self, side: Side) -> Vec<CombatantId> {
        self.combatants
            .values()
            .filter(|c| c.side == side && c.is_standing())
            .map(|c| c.id)
            .collect()
    }

    /// The winning side once every combatant of the other side is defeated.
    pub fn winner(&self) -> Option<Side> {
        let party_standing = !self.standing(Side::Party).is_empty();
        let enemy_standing = !self.standing(Side::Enemy).is_empty();
        match (party_standing, enemy_standing) {
            (true, false) => Some(Side::Party),
            (false, true) => Some(Side::Enemy),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.winner().is_some()
            || (self.standing(Side::Party).is_empty() && self.standing(Side::Enemy).is_empty())
    }
}

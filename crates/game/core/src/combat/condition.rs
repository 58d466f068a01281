//! Condition Evaluator.

use crate::skill::Condition;
use crate::state::Combatant;

/// Evaluates `condition` against the combatant's current state.
///
/// Pure and uncached; callers evaluate at the moment the gated effect would
/// apply. Integer arithmetic only: `hp / max_hp * 100 < p` is checked as
/// `hp * 100 < p * max_hp`.
pub fn evaluate(condition: &Condition, combatant: &Combatant) -> bool {
    match *condition {
        Condition::HpBelow { percent } => {
            if combatant.max_hp == 0 {
                return false;
            }
            u64::from(combatant.hp) * 100 < u64::from(percent) * u64::from(combatant.max_hp)
        }
    }
}

/// `true` when there is no condition or it holds.
pub fn holds(condition: Option<&Condition>, combatant: &Combatant) -> bool {
    condition.is_none_or(|condition| evaluate(condition, combatant))
}

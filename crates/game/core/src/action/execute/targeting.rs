//! Target resolution.

use crate::action::{Action, ActionError};
use crate::skill::TargetType;
use crate::state::{Combatant, CombatantId, Fight, Side};

/// Expands the action's target type into concrete targets for `caster`.
///
/// Group targets list living combatants in ascending id order. Single targets
/// must name a living combatant on the right side. Read-only: resolving twice
/// against the same fight yields the same list.
pub fn resolve_targets(
    fight: &Fight,
    caster: &Combatant,
    action: &Action,
    explicit: Option<CombatantId>,
) -> Result<Vec<CombatantId>, ActionError> {
    let side = match action.target_type {
        TargetType::SelfOnly => return Ok(vec![caster.id]),
        TargetType::AllParty => return Ok(fight.standing(caster.side)),
        TargetType::AllEnemies => return Ok(fight.standing(caster.side.opposing())),
        TargetType::SingleEnemy => caster.side.opposing(),
        TargetType::SingleAlly => caster.side,
    };
    let target = explicit.ok_or_else(|| ActionError::MissingTarget(action.id.clone()))?;
    single(fight, target, side, action.target_type).map(|id| vec![id])
}

fn single(
    fight: &Fight,
    target: CombatantId,
    side: Side,
    target_type: TargetType,
) -> Result<CombatantId, ActionError> {
    let combatant = fight
        .combatant(target)
        .ok_or(ActionError::TargetNotFound(target))?;
    if combatant.side != side {
        return Err(ActionError::InvalidTarget {
            target,
            target_type,
        });
    }
    if combatant.is_defeated() {
        return Err(ActionError::TargetDefeated(target));
    }
    Ok(target)
}

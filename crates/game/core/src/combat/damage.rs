//! Damage pipeline: reduction, absorption, HP loss and the reactive triggers
//! that follow.

use tracing::debug;

use crate::action::ActionError;
use crate::skill::SkillId;
use crate::state::CombatantId;

use super::context::CombatContext;
use super::dispatch::{TriggerEvent, dispatch};
use super::events::CombatEvent;
use super::shield;

/// Breakdown of one damage application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DamageReport {
    pub raw: u32,
    pub reduced: u32,
    pub absorbed: u32,
    pub hp_lost: u32,
    pub survived_fatal: bool,
    pub defeated: bool,
}

/// Result of taking HP away from a combatant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct HpLoss {
    lost: u32,
    /// HP reached zero; the fatal path still has to run.
    lethal: bool,
}

/// Result of the fatal-damage path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct FatalOutcome {
    survived_fatal: bool,
    defeated: bool,
}

/// Runs `raw` damage from `source` through `target`'s standing reduction and
/// shield, then into HP.
///
/// Order: reduction, shield absorption, HP decrement, took-damage trigger
/// (whenever any damage survived reduction, lethal or not), then the
/// fatal-damage trigger if HP reached zero. The target is declared defeated
/// only after the fatal path leaves it at zero.
///
/// Defeated targets take nothing.
pub fn deal_damage(
    ctx: &mut CombatContext<'_>,
    source: Option<CombatantId>,
    target: CombatantId,
    skill: &SkillId,
    raw: u32,
) -> Result<DamageReport, ActionError> {
    let env = ctx.env;
    let defender = ctx.combatant_mut(target)?;
    if defender.is_defeated() {
        return Ok(DamageReport::default());
    }

    let reduction = defender.active_modifiers(&env)?.damage_reduction;
    let reduced = raw.saturating_sub(reduction);
    let absorption = shield::absorb(defender, reduced);
    let hp_before = defender.hp;

    ctx.emit(CombatEvent::Damaged {
        source,
        target,
        skill: skill.clone(),
        raw,
        reduced,
        absorbed: absorption.absorbed,
        hp_lost: absorption.remaining.min(hp_before),
    });

    let loss = take_hp(ctx, target, absorption.remaining)?;
    debug!(
        target: "combat::damage",
        defender = %target,
        raw,
        reduced,
        absorbed = absorption.absorbed,
        hp_lost = loss.lost,
        lethal = loss.lethal,
        "damage applied"
    );

    if reduced > 0 {
        dispatch(
            ctx,
            target,
            TriggerEvent::TookDamage {
                amount: reduced,
                source,
            },
        )?;
    }

    let fatal = if loss.lethal {
        resolve_fatal(ctx, target, absorption.remaining, source)?
    } else {
        FatalOutcome::default()
    };

    Ok(DamageReport {
        raw,
        reduced,
        absorbed: absorption.absorbed,
        hp_lost: loss.lost,
        survived_fatal: fatal.survived_fatal,
        defeated: fatal.defeated,
    })
}

/// Applies a fixed reflected `amount` from `reflector` back to `attacker`.
///
/// Reflected damage skips the attacker's reduction and shield and never raises
/// took-damage, so reflects cannot chain. It still raises fatal-damage.
/// Returns the HP the attacker lost; zero when there is no attacker or it is
/// already defeated.
pub fn reflect(
    ctx: &mut CombatContext<'_>,
    reflector: CombatantId,
    attacker: Option<CombatantId>,
    skill: &SkillId,
    amount: u32,
) -> Result<u32, ActionError> {
    let Some(attacker) = attacker else {
        return Ok(0);
    };
    let Some(hp_before) = ctx
        .fight
        .combatant(attacker)
        .filter(|c| c.is_standing())
        .map(|c| c.hp)
    else {
        return Ok(0);
    };

    ctx.emit(CombatEvent::Reflected {
        reflector,
        target: attacker,
        skill: skill.clone(),
        amount,
        hp_lost: amount.min(hp_before),
    });

    let loss = take_hp(ctx, attacker, amount)?;
    debug!(target: "combat::damage", %reflector, %attacker, amount, "damage reflected");
    if loss.lethal {
        resolve_fatal(ctx, attacker, amount, Some(reflector))?;
    }
    Ok(loss.lost)
}

/// Decrements HP, floored at zero. Shield is settled here only when the
/// target survives; a lethal loss settles after the fatal path.
fn take_hp(
    ctx: &mut CombatContext<'_>,
    target: CombatantId,
    amount: u32,
) -> Result<HpLoss, ActionError> {
    if amount == 0 {
        return Ok(HpLoss::default());
    }

    let env = ctx.env;
    let victim = ctx.combatant_mut(target)?;
    if amount < victim.hp {
        victim.hp -= amount;
        shield::settle(victim, &env)?;
        return Ok(HpLoss {
            lost: amount,
            lethal: false,
        });
    }

    let lost = victim.hp;
    victim.hp = 0;
    Ok(HpLoss { lost, lethal: true })
}

fn resolve_fatal(
    ctx: &mut CombatContext<'_>,
    target: CombatantId,
    amount: u32,
    source: Option<CombatantId>,
) -> Result<FatalOutcome, ActionError> {
    let env = ctx.env;
    let outcome = dispatch(ctx, target, TriggerEvent::FatalDamage { amount, source })?;

    let victim = ctx.combatant_mut(target)?;
    shield::settle(victim, &env)?;
    let defeated = victim.is_defeated();
    if defeated {
        ctx.emit(CombatEvent::Defeated { combatant: target });
    }

    Ok(FatalOutcome {
        survived_fatal: outcome.survived.is_some(),
        defeated,
    })
}

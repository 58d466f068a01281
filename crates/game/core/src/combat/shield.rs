//! Shield Manager: gain, absorption and capacity arithmetic.
//!
//! Every function here leaves `0 <= shield <= effective capacity`.

use crate::env::CombatEnv;
use crate::skill::ContentError;
use crate::state::Combatant;

use super::modifiers::ActiveModifiers;

/// Result of a shield gain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShieldGain {
    /// Amount the effect asked for.
    pub requested: u32,
    /// Amount after active gain multipliers.
    pub scaled: u32,
    /// Amount actually added after the capacity clamp.
    pub gained: u32,
}

/// Result of absorbing incoming damage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Absorption {
    pub absorbed: u32,
    /// Damage that passes through to HP.
    pub remaining: u32,
}

/// Current shield capacity including standing capacity modifiers.
pub fn effective_capacity(combatant: &Combatant, env: &CombatEnv<'_>) -> Result<u32, ContentError> {
    let modifiers = ActiveModifiers::collect(combatant, env)?;
    Ok(modifiers.capacity(combatant.base_shield_capacity))
}

/// Adds `amount` of shield, scaled by active gain multipliers and clamped to
/// capacity. Excess is discarded, never stored.
pub fn gain(
    combatant: &mut Combatant,
    amount: u32,
    env: &CombatEnv<'_>,
) -> Result<ShieldGain, ContentError> {
    let modifiers = ActiveModifiers::collect(combatant, env)?;
    let capacity = modifiers.capacity(combatant.base_shield_capacity);
    let scaled = amount.saturating_mul(modifiers.gain_multiplier());

    let before = combatant.shield.min(capacity);
    let after = before.saturating_add(scaled).min(capacity);
    combatant.shield = after;
    debug_assert!(combatant.shield <= capacity);

    Ok(ShieldGain {
        requested: amount,
        scaled,
        gained: after - before,
    })
}

/// Absorbs up to `damage` from the shield and returns what reaches HP.
///
/// `damage` must already be reduced by standing damage reduction.
pub fn absorb(combatant: &mut Combatant, damage: u32) -> Absorption {
    let absorbed = combatant.shield.min(damage);
    combatant.shield -= absorbed;
    Absorption {
        absorbed,
        remaining: damage - absorbed,
    }
}

/// Clamps the shield down to the current effective capacity.
///
/// Called after anything that can move the capacity (installed capacity
/// modifiers, HP changes flipping a conditional modifier). Returns the amount
/// trimmed.
pub fn settle(combatant: &mut Combatant, env: &CombatEnv<'_>) -> Result<u32, ContentError> {
    let capacity = effective_capacity(combatant, env)?;
    let trimmed = combatant.shield.saturating_sub(capacity);
    combatant.shield -= trimmed;
    debug_assert!(combatant.shield <= capacity);
    Ok(trimmed)
}

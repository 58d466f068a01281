//! Trigger Dispatcher: fires a combatant's passives in response to an event.

use tracing::debug;

use crate::action::ActionError;
use crate::skill::{Effect, SkillId, Trigger};
use crate::state::{CombatantId, FightFlag};

use super::condition::holds;
use super::context::CombatContext;
use super::events::CombatEvent;
use super::resolver::{self, EffectOutcome, Interaction};

/// Combat event a passive can react to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerEvent {
    /// Start of the owner's turn.
    Tick,
    /// The owner took positive post-reduction damage. Raised before the fatal
    /// path, so the owner may be at zero HP.
    TookDamage {
        amount: u32,
        source: Option<CombatantId>,
    },
    /// Damage brought the owner's HP to zero.
    FatalDamage {
        amount: u32,
        source: Option<CombatantId>,
    },
}

impl TriggerEvent {
    pub const fn trigger(&self) -> Trigger {
        match self {
            Self::Tick => Trigger::Always,
            Self::TookDamage { .. } => Trigger::OnTakeDamage,
            Self::FatalDamage { .. } => Trigger::OnFatalDamage,
        }
    }

    const fn source(&self) -> Option<CombatantId> {
        match *self {
            Self::Tick => None,
            Self::TookDamage { source, .. } | Self::FatalDamage { source, .. } => source,
        }
    }

    const fn amount(&self) -> Option<u32> {
        match *self {
            Self::Tick => None,
            Self::TookDamage { amount, .. } | Self::FatalDamage { amount, .. } => Some(amount),
        }
    }
}

/// Passives that fired for one event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub fired: Vec<SkillId>,
    /// The survive-fatal passive that intercepted lethal damage, if any.
    pub survived: Option<SkillId>,
}

/// Fires `owner`'s passives whose trigger matches `event`.
///
/// Passives run in ascending skill id order. Each condition is evaluated just
/// before its passive would fire, against the owner's state at that moment.
/// On fatal damage the first eligible survive-fatal whose once-per-fight flag
/// is still unconsumed ends the dispatch. Took-damage passives still fire on
/// a lethal hit; the fatal dispatch runs after them. Standing effects are
/// skipped on `Tick`: owned `Always` passives are already live.
pub fn dispatch(
    ctx: &mut CombatContext<'_>,
    owner: CombatantId,
    event: TriggerEvent,
) -> Result<DispatchOutcome, ActionError> {
    let trigger = event.trigger();
    let owned: Vec<SkillId> = ctx.combatant(owner)?.owned_skills().cloned().collect();
    let mut outcome = DispatchOutcome::default();

    for skill_id in owned {
        let node = ctx.env.skill(&skill_id)?;
        let Some(passive) = node.passive() else {
            continue;
        };
        if passive.trigger != trigger {
            continue;
        }
        if trigger == Trigger::Always && passive.effect.is_standing() {
            continue;
        }

        let combatant = ctx.combatant(owner)?;
        if trigger == Trigger::Always && combatant.is_defeated() {
            break;
        }
        if !holds(passive.condition.as_ref(), combatant) {
            continue;
        }
        if passive.effect == Effect::SurviveFatal
            && ctx.fight.tracker.is_set(owner, FightFlag::SurviveFatalUsed)
        {
            continue;
        }

        ctx.emit(CombatEvent::PassiveFired {
            owner,
            skill: skill_id.clone(),
            trigger,
        });
        debug!(target: "combat::dispatch", %owner, skill = %skill_id, %trigger, "passive fired");

        let interaction =
            Interaction::passive(trigger, skill_id.clone(), event.source(), event.amount());
        let applied = resolver::apply(ctx, &passive.effect, owner, &interaction)?;
        outcome.fired.push(skill_id.clone());

        if let EffectOutcome::SurvivedFatal { .. } = applied {
            outcome.survived = Some(skill_id);
            break;
        }
    }

    Ok(outcome)
}

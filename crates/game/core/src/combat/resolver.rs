//! Effect Resolver: applies one tagged effect to one combatant.

use tracing::debug;

use crate::action::ActionError;
use crate::skill::{ContentError, Effect, EffectSite, SkillId, Trigger};
use crate::state::{CombatantId, FightFlag, ModifierKind, StandingModifier};

use super::context::CombatContext;
use super::damage::{self, DamageReport};
use super::events::CombatEvent;
use super::shield::{self, ShieldGain};

/// How the effect being applied came about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionKind {
    AbilityHit,
    SelfEffect,
    PassiveFire(Trigger),
}

/// Context of a single effect application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interaction {
    pub kind: InteractionKind,
    /// Skill declaring the effect.
    pub skill: SkillId,
    /// Combatant the interaction originates from: the caster for ability
    /// effects, the attacker for damage-triggered passives.
    pub source: Option<CombatantId>,
    /// Post-reduction damage that raised the trigger, when there was any.
    pub incoming_damage: Option<u32>,
}

impl Interaction {
    pub fn ability_hit(skill: SkillId, caster: CombatantId) -> Self {
        Self {
            kind: InteractionKind::AbilityHit,
            skill,
            source: Some(caster),
            incoming_damage: None,
        }
    }

    pub fn self_effect(skill: SkillId, caster: CombatantId) -> Self {
        Self {
            kind: InteractionKind::SelfEffect,
            skill,
            source: Some(caster),
            incoming_damage: None,
        }
    }

    pub fn passive(
        trigger: Trigger,
        skill: SkillId,
        source: Option<CombatantId>,
        incoming_damage: Option<u32>,
    ) -> Self {
        Self {
            kind: InteractionKind::PassiveFire(trigger),
            skill,
            source,
            incoming_damage,
        }
    }

    pub const fn site(&self) -> EffectSite {
        match self.kind {
            InteractionKind::AbilityHit => EffectSite::AbilityHit,
            InteractionKind::SelfEffect => EffectSite::SelfEffect,
            InteractionKind::PassiveFire(trigger) => EffectSite::Passive(trigger),
        }
    }
}

/// What applying an effect did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectOutcome {
    Damage(DamageReport),
    Shield(ShieldGain),
    Installed(ModifierKind),
    Reflected { hp_lost: u32 },
    SurvivedFatal { hp: u32 },
    /// The effect was valid but found nothing to act on.
    NoEffect,
}

/// Applies `effect` to `target`.
///
/// # Errors
///
/// A misplaced effect (e.g. reflect outside an on-take-damage passive) is a
/// content error and fails before anything is mutated.
pub fn apply(
    ctx: &mut CombatContext<'_>,
    effect: &Effect,
    target: CombatantId,
    interaction: &Interaction,
) -> Result<EffectOutcome, ActionError> {
    let site = interaction.site();
    if !effect.permitted_at(site) {
        return Err(ContentError::MisplacedEffect {
            skill: interaction.skill.clone(),
            effect: effect.name(),
            site,
        }
        .into());
    }

    debug!(
        target: "combat::resolver",
        effect = effect.name(),
        combatant = %target,
        skill = %interaction.skill,
        %site,
        incoming = ?interaction.incoming_damage,
        "applying effect"
    );

    match *effect {
        Effect::Damage { amount } => {
            damage::deal_damage(ctx, interaction.source, target, &interaction.skill, amount)
                .map(EffectOutcome::Damage)
        }
        Effect::AddShield { amount } => add_shield(ctx, target, &interaction.skill, amount),
        Effect::DamageReduction { .. }
        | Effect::Provoke { .. }
        | Effect::ModifyShieldGain { .. }
        | Effect::ModifyShieldCapacity { .. } => {
            install(ctx, effect, target, &interaction.skill)
        }
        Effect::ReflectDamage { amount } => {
            let hp_lost =
                damage::reflect(ctx, target, interaction.source, &interaction.skill, amount)?;
            Ok(EffectOutcome::Reflected { hp_lost })
        }
        Effect::SurviveFatal => survive_fatal(ctx, target, &interaction.skill),
    }
}

fn add_shield(
    ctx: &mut CombatContext<'_>,
    target: CombatantId,
    skill: &SkillId,
    amount: u32,
) -> Result<EffectOutcome, ActionError> {
    let env = ctx.env;
    let combatant = ctx.combatant_mut(target)?;
    if combatant.is_defeated() {
        return Ok(EffectOutcome::NoEffect);
    }
    let gain = shield::gain(combatant, amount, &env)?;
    ctx.emit(CombatEvent::ShieldGained {
        target,
        skill: skill.clone(),
        gain,
    });
    Ok(EffectOutcome::Shield(gain))
}

fn install(
    ctx: &mut CombatContext<'_>,
    effect: &Effect,
    target: CombatantId,
    skill: &SkillId,
) -> Result<EffectOutcome, ActionError> {
    let Some((kind, condition)) = ModifierKind::from_effect(effect) else {
        return Ok(EffectOutcome::NoEffect);
    };

    let env = ctx.env;
    let combatant = ctx.combatant_mut(target)?;
    if combatant.is_defeated() {
        return Ok(EffectOutcome::NoEffect);
    }
    combatant.modifiers.install(StandingModifier {
        source: skill.clone(),
        kind,
        condition,
    });
    shield::settle(combatant, &env)?;

    ctx.emit(CombatEvent::ModifierInstalled {
        target,
        skill: skill.clone(),
        kind,
    });
    Ok(EffectOutcome::Installed(kind))
}

fn survive_fatal(
    ctx: &mut CombatContext<'_>,
    target: CombatantId,
    skill: &SkillId,
) -> Result<EffectOutcome, ActionError> {
    if ctx.combatant(target)?.is_standing() {
        return Ok(EffectOutcome::NoEffect);
    }
    if !ctx.fight.tracker.consume(target, FightFlag::SurviveFatalUsed) {
        return Ok(EffectOutcome::NoEffect);
    }

    let pinned = ctx.config.survive_fatal_hp;
    let combatant = ctx.combatant_mut(target)?;
    let hp = pinned.min(combatant.max_hp);
    combatant.hp = hp;

    ctx.emit(CombatEvent::SurvivedFatal {
        combatant: target,
        skill: skill.clone(),
        hp,
    });
    Ok(EffectOutcome::SurvivedFatal { hp })
}

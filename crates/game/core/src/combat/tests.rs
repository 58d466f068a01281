use crate::action::ActionError;
use crate::config::CombatConfig;
use crate::skill::{ContentError, Effect, SkillId, Trigger};
use crate::state::{Fight, FightFlag};
use crate::testing::{ALLY, BOSS, TANK, boss, tables, tank};

use super::*;

fn hit(ctx: &mut CombatContext<'_>, amount: u32) -> DamageReport {
    deal_damage(ctx, Some(BOSS), TANK, &"smash".into(), amount).unwrap()
}

fn fired(events: &[CombatEvent]) -> Vec<&str> {
    events
        .iter()
        .filter_map(|event| match event {
            CombatEvent::PassiveFired { skill, .. } => Some(skill.as_str()),
            _ => None,
        })
        .collect()
}

#[test]
fn counter_stance_reflects_its_configured_amount_after_hp_loss() {
    let tables = tables();
    let config = CombatConfig::default();
    let mut fight = Fight::begin([
        tank(TANK, &tables, &["counter_stance"]),
        boss(&tables, &[]),
    ]);
    let mut ctx = CombatContext::new(&mut fight, tables.env(), &config);

    let report = hit(&mut ctx, 3);
    assert_eq!(report.hp_lost, 3);

    let kinds: Vec<_> = ctx
        .events()
        .iter()
        .map(|event| match event {
            CombatEvent::Damaged { .. } => "damaged",
            CombatEvent::PassiveFired { .. } => "fired",
            CombatEvent::Reflected { .. } => "reflected",
            _ => "other",
        })
        .collect();
    assert_eq!(kinds, ["damaged", "fired", "reflected"]);

    hit(&mut ctx, 10);
    drop(ctx);

    assert_eq!(fight.combatant(TANK).unwrap().hp, 87);
    // One point per hit, regardless of how hard the hit was.
    assert_eq!(fight.combatant(BOSS).unwrap().hp, 28);
}

#[test]
fn reduction_applies_before_shield_and_can_suppress_take_damage() {
    let tables = tables();
    let config = CombatConfig::default();
    let mut fight = Fight::begin([
        tank(TANK, &tables, &["iron_skin", "counter_stance"]),
        boss(&tables, &[]),
    ]);
    fight.combatant_mut(TANK).unwrap().shield = 1;
    let mut ctx = CombatContext::new(&mut fight, tables.env(), &config);

    let report = hit(&mut ctx, 3);
    assert_eq!((report.reduced, report.absorbed, report.hp_lost), (2, 1, 1));

    let report = hit(&mut ctx, 1);
    assert_eq!(report.reduced, 0);
    drop(ctx);

    // Reflected once: the fully reduced hit raised no trigger.
    assert_eq!(fight.combatant(BOSS).unwrap().hp, 29);
    assert_eq!(fight.combatant(TANK).unwrap().hp, 99);
}

#[test]
fn fully_absorbed_damage_still_counts_as_taken() {
    let tables = tables();
    let config = CombatConfig::default();
    let mut fight = Fight::begin([
        tank(TANK, &tables, &["counter_stance"]),
        boss(&tables, &[]),
    ]);
    fight.combatant_mut(TANK).unwrap().shield = 4;
    let mut ctx = CombatContext::new(&mut fight, tables.env(), &config);

    let report = hit(&mut ctx, 3);
    assert_eq!((report.absorbed, report.hp_lost), (3, 0));
    drop(ctx);

    assert_eq!(fight.combatant(TANK).unwrap().shield, 1);
    assert_eq!(fight.combatant(BOSS).unwrap().hp, 29);
}

#[test]
fn undying_saves_once_per_fight() {
    let tables = tables();
    let config = CombatConfig::default();
    let mut fight = Fight::begin([tank(TANK, &tables, &["undying"]), boss(&tables, &[])]);
    let mut ctx = CombatContext::new(&mut fight, tables.env(), &config);

    let first = hit(&mut ctx, 150);
    assert!(first.survived_fatal);
    assert!(!first.defeated);
    assert_eq!(ctx.combatant(TANK).unwrap().hp, 1);

    let second = hit(&mut ctx, 150);
    assert!(!second.survived_fatal);
    assert!(second.defeated);
    assert_eq!(ctx.combatant(TANK).unwrap().hp, 0);
    assert!(
        ctx.events()
            .contains(&CombatEvent::Defeated { combatant: TANK })
    );
    drop(ctx);

    assert!(fight.tracker.is_set(TANK, FightFlag::SurviveFatalUsed));
}

#[test]
fn lethal_hit_raises_take_damage_before_the_fatal_path() {
    let tables = tables();
    let config = CombatConfig::default();
    let mut fight = Fight::begin([
        tank(TANK, &tables, &["undying", "counter_stance"]),
        boss(&tables, &[]),
    ]);
    fight.combatant_mut(TANK).unwrap().hp = 2;
    let mut ctx = CombatContext::new(&mut fight, tables.env(), &config);

    let report = hit(&mut ctx, 10);
    assert!(report.survived_fatal);
    assert_eq!(report.hp_lost, 2);

    let kinds: Vec<_> = ctx
        .events()
        .iter()
        .map(|event| match event {
            CombatEvent::Damaged { .. } => "damaged",
            CombatEvent::PassiveFired { .. } => "fired",
            CombatEvent::Reflected { .. } => "reflected",
            CombatEvent::SurvivedFatal { .. } => "survived",
            _ => "other",
        })
        .collect();
    assert_eq!(
        kinds,
        ["damaged", "fired", "reflected", "fired", "survived"]
    );
    assert_eq!(fired(ctx.events()), ["counter_stance", "undying"]);
    drop(ctx);

    assert_eq!(fight.combatant(TANK).unwrap().hp, 1);
    assert_eq!(fight.combatant(BOSS).unwrap().hp, 29);
}

#[test]
fn defeated_tank_still_reflects_the_killing_blow() {
    let tables = tables();
    let config = CombatConfig::default();
    let mut fight = Fight::begin([
        tank(TANK, &tables, &["counter_stance"]),
        boss(&tables, &[]),
    ]);
    fight.combatant_mut(TANK).unwrap().hp = 2;
    let mut ctx = CombatContext::new(&mut fight, tables.env(), &config);

    let report = hit(&mut ctx, 8);
    assert!(report.defeated);

    let reflected = ctx
        .events()
        .iter()
        .position(|event| matches!(event, CombatEvent::Reflected { amount: 1, .. }))
        .unwrap();
    let defeated = ctx
        .events()
        .iter()
        .position(|event| *event == CombatEvent::Defeated { combatant: TANK })
        .unwrap();
    assert!(reflected < defeated);
    drop(ctx);

    assert_eq!(fight.combatant(BOSS).unwrap().hp, 29);
}

#[test]
fn same_trigger_passives_fire_in_ascending_id_order() {
    let tables = tables();
    let config = CombatConfig::default();
    let mut fight = Fight::begin([
        tank(TANK, &tables, &["counter_stance", "brace"]),
        boss(&tables, &[]),
    ]);
    let mut ctx = CombatContext::new(&mut fight, tables.env(), &config);

    hit(&mut ctx, 3);
    assert_eq!(fired(ctx.events()), ["brace", "counter_stance"]);
    assert_eq!(ctx.combatant(TANK).unwrap().shield, 1);
    assert_eq!(ctx.combatant(BOSS).unwrap().hp, 29);
}

#[test]
fn first_survive_fatal_ends_the_fatal_dispatch() {
    let tables = tables();
    let config = CombatConfig::default();
    let mut fight = Fight::begin([
        tank(TANK, &tables, &["unyielding", "undying", "death_rattle"]),
        boss(&tables, &[]),
    ]);
    let mut ctx = CombatContext::new(&mut fight, tables.env(), &config);

    let first = hit(&mut ctx, 150);
    assert!(first.survived_fatal);
    // `unyielding` sorts after `undying` and is never evaluated.
    assert_eq!(fired(ctx.events()), ["death_rattle", "undying"]);
    assert_eq!(ctx.combatant(TANK).unwrap().hp, 1);

    // The once-per-fight flag belongs to the combatant, not the skill.
    let second = hit(&mut ctx, 150);
    assert!(second.defeated);
    assert_eq!(
        fired(ctx.events()),
        ["death_rattle", "undying", "death_rattle"]
    );
}

#[test]
fn exactly_lethal_damage_is_fatal() {
    let tables = tables();
    let config = CombatConfig::default();
    let mut fight = Fight::begin([tank(TANK, &tables, &[]), boss(&tables, &[])]);
    let mut ctx = CombatContext::new(&mut fight, tables.env(), &config);

    assert!(!hit(&mut ctx, 99).defeated);
    let report = hit(&mut ctx, 1);
    assert!(report.defeated);
    assert_eq!(report.hp_lost, 1);
}

#[test]
fn reflect_can_defeat_the_attacker_but_never_chains() {
    let tables = tables();
    let config = CombatConfig::default();
    let mut attacker = boss(&tables, &["counter_stance"]);
    attacker.hp = 1;
    let mut fight = Fight::begin([tank(TANK, &tables, &["counter_stance"]), attacker]);
    let mut ctx = CombatContext::new(&mut fight, tables.env(), &config);

    hit(&mut ctx, 3);
    let reflected = ctx
        .events()
        .iter()
        .filter(|event| matches!(event, CombatEvent::Reflected { .. }))
        .count();
    assert_eq!(reflected, 1);
    assert!(ctx.combatant(BOSS).unwrap().is_defeated());
    assert!(
        ctx.events()
            .contains(&CombatEvent::Defeated { combatant: BOSS })
    );

    // A defeated attacker takes no further reflection.
    assert_eq!(reflect(&mut ctx, TANK, Some(BOSS), &"counter_stance".into(), 1).unwrap(), 0);
    assert_eq!(reflect(&mut ctx, TANK, None, &"counter_stance".into(), 1).unwrap(), 0);
}

#[test]
fn misplaced_effect_fails_before_mutation() {
    let tables = tables();
    let config = CombatConfig::default();
    let mut fight = Fight::begin([tank(TANK, &tables, &[]), boss(&tables, &[])]);
    let before = fight.clone();
    let mut ctx = CombatContext::new(&mut fight, tables.env(), &config);

    let interaction = Interaction::ability_hit("bad".into(), TANK);
    let err = resolver::apply(
        &mut ctx,
        &Effect::ReflectDamage { amount: 4 },
        BOSS,
        &interaction,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ActionError::Content(ContentError::MisplacedEffect { .. })
    ));

    let survive = Interaction::passive(Trigger::OnTakeDamage, "bad".into(), None, Some(2));
    assert!(resolver::apply(&mut ctx, &Effect::SurviveFatal, TANK, &survive).is_err());
    drop(ctx);

    assert_eq!(fight, before);
}

#[test]
fn tick_fires_immediate_always_passives_only() {
    let tables = tables();
    let config = CombatConfig::default();
    let mut fight = Fight::begin([tank(TANK, &tables, &["fortify", "iron_skin", "last_stand"])]);
    let mut ctx = CombatContext::new(&mut fight, tables.env(), &config);

    let outcome = dispatch(&mut ctx, TANK, TriggerEvent::Tick).unwrap();
    assert_eq!(outcome.fired, vec![SkillId::from("fortify")]);
    assert_eq!(ctx.combatant(TANK).unwrap().shield, 1);
    assert!(ctx.combatant(TANK).unwrap().modifiers.is_empty());
}

#[test]
fn reinstalling_a_modifier_replaces_it() {
    let tables = tables();
    let config = CombatConfig::default();
    let mut fight = Fight::begin([tank(TANK, &tables, &[]), tank(ALLY, &tables, &[])]);
    let mut ctx = CombatContext::new(&mut fight, tables.env(), &config);

    let interaction = Interaction::ability_hit("taunt".into(), TANK);
    for _ in 0..3 {
        resolver::apply(&mut ctx, &Effect::Provoke { amount: 5 }, TANK, &interaction).unwrap();
    }
    let env = ctx.env;
    assert_eq!(ctx.combatant(TANK).unwrap().threat(&env).unwrap(), 5);
    assert_eq!(ctx.combatant(ALLY).unwrap().threat(&env).unwrap(), 0);
}

#[test]
fn evaluating_twice_gives_the_same_answer() {
    let tables = tables();
    let mut tank = tank(TANK, &tables, &["last_stand"]);
    tank.hp = 24;
    let env = tables.env();
    let condition = crate::skill::Condition::hp_below(25);

    assert_eq!(evaluate(&condition, &tank), evaluate(&condition, &tank));
    assert_eq!(
        ActiveModifiers::collect(&tank, &env).unwrap(),
        ActiveModifiers::collect(&tank, &env).unwrap()
    );
}

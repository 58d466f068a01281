//! Fixtures shared by the integration tests: the tank tree and a boss.
#![allow(dead_code)]

use combat_core::{
    Ability, BossDefinition, BossTable, CharacterAttributes, CharacterClass, CharacterSheet,
    ClassTable, CombatEnv, Combatant, CombatantId, Condition, Effect, Env, Fight, Passive,
    SkillKind, SkillNode, SkillTable, TargetType, Trigger,
};

pub const TANK: CombatantId = CombatantId(1);
pub const WARRIOR: CombatantId = CombatantId(2);
pub const HEALER: CombatantId = CombatantId(3);
pub const BOSS: CombatantId = CombatantId(10);

pub struct Content {
    pub skills: SkillTable,
    pub classes: ClassTable,
    pub bosses: BossTable,
}

impl Content {
    pub fn env(&self) -> CombatEnv<'_> {
        Env::with_all(&self.skills, &self.classes, &self.bosses).as_combat_env()
    }

    pub fn fight(&self, party: &[(CombatantId, CharacterSheet)]) -> Fight {
        let env = self.env();
        let mut combatants: Vec<Combatant> = party
            .iter()
            .map(|(id, sheet)| Combatant::from_character(*id, sheet, &env).unwrap())
            .collect();
        let boss = self.bosses.iter().next().unwrap();
        combatants.push(Combatant::from_boss(BOSS, boss, &env).unwrap());
        Fight::begin(combatants)
    }
}

fn node(id: &str, class: Option<CharacterClass>, kind: SkillKind) -> SkillNode {
    SkillNode {
        id: id.into(),
        name: id.replace('_', " "),
        description: String::new(),
        class,
        level_required: 1,
        requires: None,
        kind,
    }
}

fn ability(
    id: &str,
    class: Option<CharacterClass>,
    target_type: TargetType,
    effects: Vec<Effect>,
    self_effects: Vec<Effect>,
) -> SkillNode {
    node(
        id,
        class,
        SkillKind::Ability(Ability {
            cost: 1,
            target_type,
            hits: 1,
            effects,
            self_effects,
        }),
    )
}

fn passive(id: &str, trigger: Trigger, effect: Effect) -> SkillNode {
    node(
        id,
        Some(CharacterClass::Tank),
        SkillKind::Passive(Passive {
            trigger,
            effect,
            condition: None,
        }),
    )
}

pub fn content() -> Content {
    let tank = Some(CharacterClass::Tank);
    let skills = SkillTable::from_iter([
        ability(
            "taunt",
            tank,
            TargetType::SelfOnly,
            vec![Effect::Provoke { amount: 3 }],
            vec![Effect::AddShield { amount: 2 }],
        ),
        ability(
            "shield_wall",
            tank,
            TargetType::AllParty,
            vec![Effect::AddShield { amount: 1 }],
            vec![],
        ),
        ability(
            "shield_bash",
            tank,
            TargetType::SingleEnemy,
            vec![Effect::Damage { amount: 2 }],
            vec![Effect::AddShield { amount: 2 }],
        ),
        passive(
            "counter_stance",
            Trigger::OnTakeDamage,
            Effect::ReflectDamage { amount: 1 },
        ),
        passive(
            "last_stand",
            Trigger::Always,
            Effect::ModifyShieldGain {
                amount: 2,
                condition: Some(Condition::hp_below(25)),
            },
        ),
        passive("undying", Trigger::OnFatalDamage, Effect::SurviveFatal),
        passive(
            "iron_skin",
            Trigger::Always,
            Effect::DamageReduction { amount: 1 },
        ),
        passive(
            "bulwark",
            Trigger::Always,
            Effect::ModifyShieldCapacity { amount: 1 },
        ),
        ability(
            "crush",
            None,
            TargetType::SingleEnemy,
            vec![Effect::Damage { amount: 3 }],
            vec![],
        ),
        ability(
            "quake",
            None,
            TargetType::AllEnemies,
            vec![Effect::Damage { amount: 200 }],
            vec![],
        ),
    ]);

    let classes = ClassTable::from_iter([
        (
            CharacterClass::Tank,
            CharacterAttributes::new(100, 2, 5).with_regen(1).with_threat(10),
        ),
        (
            CharacterClass::Warrior,
            CharacterAttributes::new(80, 1, 5).with_regen(1).with_threat(5),
        ),
        (
            CharacterClass::Healer,
            CharacterAttributes::new(60, 1, 5).with_regen(1),
        ),
    ]);

    let bosses = BossTable::from_iter([BossDefinition {
        id: "gatekeeper".to_owned(),
        name: "The Gatekeeper".to_owned(),
        level: 1,
        attributes: CharacterAttributes::new(50, 0, 10),
        skills: vec!["crush".into(), "quake".into()],
    }]);

    Content {
        skills,
        classes,
        bosses,
    }
}

pub fn tank_with(skills: &[&str]) -> CharacterSheet {
    skills
        .iter()
        .fold(CharacterSheet::new("Brann", CharacterClass::Tank, 10), |sheet, id| {
            sheet.with_skill(*id)
        })
}

pub fn member(class: CharacterClass) -> CharacterSheet {
    CharacterSheet::new(class.to_string(), class, 1)
}

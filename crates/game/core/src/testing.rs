//! Shared fixtures for unit tests: a small tank tree and a training dummy.

use crate::env::{BossTable, ClassTable, CombatEnv, Env, SkillTable};
use crate::skill::{
    Ability, CharacterAttributes, CharacterClass, Condition, Effect, Passive, SkillKind,
    SkillNode, TargetType, Trigger,
};
use crate::state::{Combatant, CombatantId, Side};

pub(crate) const TANK: CombatantId = CombatantId(1);
pub(crate) const ALLY: CombatantId = CombatantId(2);
pub(crate) const HEALER: CombatantId = CombatantId(3);
pub(crate) const BOSS: CombatantId = CombatantId(10);

pub(crate) struct Tables {
    pub skills: SkillTable,
    pub classes: ClassTable,
    pub bosses: BossTable,
}

impl Tables {
    pub fn env(&self) -> CombatEnv<'_> {
        Env::with_all(&self.skills, &self.classes, &self.bosses).as_combat_env()
    }
}

pub(crate) fn node(id: &str, class: Option<CharacterClass>, kind: SkillKind) -> SkillNode {
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

pub(crate) fn ability(
    id: &str,
    cost: u32,
    target_type: TargetType,
    hits: u32,
    effects: Vec<Effect>,
    self_effects: Vec<Effect>,
) -> SkillNode {
    node(
        id,
        Some(CharacterClass::Tank),
        SkillKind::Ability(Ability {
            cost,
            target_type,
            hits,
            effects,
            self_effects,
        }),
    )
}

pub(crate) fn passive(
    id: &str,
    trigger: Trigger,
    effect: Effect,
    condition: Option<Condition>,
) -> SkillNode {
    node(
        id,
        Some(CharacterClass::Tank),
        SkillKind::Passive(Passive {
            trigger,
            effect,
            condition,
        }),
    )
}

pub(crate) fn tables() -> Tables {
    let mut smash = ability(
        "smash",
        0,
        TargetType::SingleEnemy,
        1,
        vec![Effect::Damage { amount: 3 }],
        vec![],
    );
    smash.class = None;

    let skills = SkillTable::from_iter([
        ability(
            "taunt",
            1,
            TargetType::SelfOnly,
            1,
            vec![Effect::Provoke { amount: 5 }],
            vec![Effect::AddShield { amount: 2 }],
        ),
        ability(
            "shield_wall",
            2,
            TargetType::AllParty,
            1,
            vec![Effect::AddShield { amount: 1 }],
            vec![],
        ),
        ability(
            "shield_bash",
            1,
            TargetType::SingleEnemy,
            2,
            vec![Effect::Damage { amount: 2 }],
            vec![Effect::AddShield { amount: 1 }],
        ),
        passive(
            "counter_stance",
            Trigger::OnTakeDamage,
            Effect::ReflectDamage { amount: 1 },
            None,
        ),
        passive(
            "last_stand",
            Trigger::Always,
            Effect::ModifyShieldGain {
                amount: 2,
                condition: None,
            },
            Some(Condition::hp_below(25)),
        ),
        passive("undying", Trigger::OnFatalDamage, Effect::SurviveFatal, None),
        passive("unyielding", Trigger::OnFatalDamage, Effect::SurviveFatal, None),
        passive(
            "death_rattle",
            Trigger::OnFatalDamage,
            Effect::AddShield { amount: 1 },
            None,
        ),
        passive(
            "brace",
            Trigger::OnTakeDamage,
            Effect::AddShield { amount: 1 },
            None,
        ),
        passive(
            "iron_skin",
            Trigger::Always,
            Effect::DamageReduction { amount: 1 },
            None,
        ),
        passive(
            "fortify",
            Trigger::Always,
            Effect::AddShield { amount: 1 },
            None,
        ),
        smash,
    ]);

    Tables {
        skills,
        classes: ClassTable::new(),
        bosses: BossTable::new(),
    }
}

/// A party member with 100 HP, shield capacity 4 and 5 energy.
pub(crate) fn tank(id: CombatantId, tables: &Tables, skills: &[&str]) -> Combatant {
    let mut tank = Combatant::new(
        id,
        format!("tank{}", id.0),
        Side::Party,
        CharacterAttributes::new(100, 4, 5).with_regen(2),
    );
    grant(&mut tank, tables, skills);
    tank
}

/// An enemy with 30 HP and no shield.
pub(crate) fn boss(tables: &Tables, skills: &[&str]) -> Combatant {
    let mut boss = Combatant::new(
        BOSS,
        "dummy",
        Side::Enemy,
        CharacterAttributes::new(30, 0, 5),
    );
    grant(&mut boss, tables, skills);
    boss
}

fn grant(combatant: &mut Combatant, tables: &Tables, skills: &[&str]) {
    use crate::env::SkillOracle;

    for id in skills {
        let node = tables
            .skills
            .skill(&(*id).into())
            .unwrap_or_else(|| panic!("fixture skill '{id}' missing"));
        combatant.grant_skill(node);
    }
}

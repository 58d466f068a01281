//! Validated, read-only content shared by every fight.

use std::collections::BTreeSet;

use anyhow::{Context, anyhow};
use combat_core::{
    BossDefinition, BossOracle, BossTable, CharacterAttributes, CharacterClass, CharacterSheet,
    ClassOracle, ClassTable, CombatEnv, Combatant, CombatantId, Env, SkillId, SkillNode,
    SkillOracle, SkillTable,
};

use crate::loaders::LoadResult;

/// Skill, class and boss tables loaded once at startup.
#[derive(Clone, Debug, Default)]
pub struct ContentTables {
    pub skills: SkillTable,
    pub classes: ClassTable,
    pub bosses: BossTable,
}

impl ContentTables {
    /// Borrows the tables as the engine's oracle bundle.
    pub fn env(&self) -> CombatEnv<'_> {
        Env::with_all(self, self, self).as_combat_env()
    }

    /// Looks a boss up by id, falling back to the boss of a numeric level.
    pub fn find_boss(&self, selector: &str) -> Option<&BossDefinition> {
        self.bosses.boss(selector).or_else(|| {
            selector
                .parse::<u32>()
                .ok()
                .and_then(|level| self.bosses.boss_for_level(level))
        })
    }

    /// Character sheet owning every skill `class` can have unlocked at `level`.
    ///
    /// A skill is included when its level requirement is met and its
    /// prerequisite (if any) is included too, so the sheet satisfies the unlock
    /// gating the engine takes as given.
    pub fn character(&self, name: &str, class: CharacterClass, level: u32) -> CharacterSheet {
        let eligible: Vec<&SkillNode> = self
            .skills
            .class_skills(class)
            .into_iter()
            .filter(|node| node.level_required <= level)
            .collect();

        let mut owned: BTreeSet<SkillId> = BTreeSet::new();
        // Prerequisites form chains; repeat until no new skill unlocks.
        loop {
            let before = owned.len();
            for node in &eligible {
                let unlocked = node.requires.as_ref().is_none_or(|req| owned.contains(req));
                if unlocked {
                    owned.insert(node.id.clone());
                }
            }
            if owned.len() == before {
                break;
            }
        }

        let mut sheet = CharacterSheet::new(name, class, level);
        sheet.skills = owned;
        sheet
    }

    /// Builds party combatants from character sheets, numbering them from 1.
    pub fn party(&self, sheets: &[CharacterSheet]) -> LoadResult<Vec<Combatant>> {
        let env = self.env();
        sheets
            .iter()
            .zip(1u32..)
            .map(|(sheet, id)| {
                Combatant::from_character(CombatantId(id), sheet, &env)
                    .with_context(|| format!("cannot build party member '{}'", sheet.name))
            })
            .collect()
    }

    /// Builds the enemy combatant for `selector` (boss id or level).
    pub fn boss_combatant(&self, id: CombatantId, selector: &str) -> LoadResult<Combatant> {
        let boss = self
            .find_boss(selector)
            .ok_or_else(|| anyhow!("no boss with id or level '{selector}'"))?;
        Combatant::from_boss(id, boss, &self.env())
            .with_context(|| format!("cannot build boss '{}'", boss.id))
    }
}

impl SkillOracle for ContentTables {
    fn skill(&self, id: &SkillId) -> Option<&SkillNode> {
        self.skills.skill(id)
    }

    fn class_skills(&self, class: CharacterClass) -> Vec<&SkillNode> {
        self.skills.class_skills(class)
    }
}

impl ClassOracle for ContentTables {
    fn attributes(&self, class: CharacterClass) -> Option<CharacterAttributes> {
        self.classes.attributes(class)
    }
}

impl BossOracle for ContentTables {
    fn boss(&self, id: &str) -> Option<&BossDefinition> {
        self.bosses.boss(id)
    }

    fn boss_for_level(&self, level: u32) -> Option<&BossDefinition> {
        self.bosses.boss_for_level(level)
    }
}

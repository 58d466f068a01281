//! Cross-reference and placement checks over loaded content.
//!
//! Runs once at load time so the engine never sees a dangling id or an effect
//! it has no rule for.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use combat_core::{
    BossDefinition, CharacterAttributes, CharacterClass, CombatConfig, ContentError, SkillId,
    SkillNode,
};

/// What is wrong with one content entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationIssue {
    DuplicateId,
    MissingPrerequisite(SkillId),
    PrerequisiteClassMismatch(SkillId),
    PrerequisiteLevelAbove {
        prerequisite: SkillId,
        prerequisite_level: u32,
        level: u32,
    },
    Content(ContentError),
    MissingSkill(SkillId),
    NoAbilities,
    MissingAttributes(CharacterClass),
    ZeroMaxHp,
}

/// A validation error with context about what failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub source_id: String,
    pub issue: ValidationIssue,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}': ", self.source_type, self.source_id)?;
        match &self.issue {
            ValidationIssue::DuplicateId => f.write_str("id defined more than once"),
            ValidationIssue::MissingPrerequisite(id) => {
                write!(f, "requires missing skill '{id}'")
            }
            ValidationIssue::PrerequisiteClassMismatch(id) => {
                write!(f, "requires '{id}' from a different class")
            }
            ValidationIssue::PrerequisiteLevelAbove {
                prerequisite,
                prerequisite_level,
                level,
            } => write!(
                f,
                "requires '{prerequisite}' (level {prerequisite_level}) above its own level {level}"
            ),
            ValidationIssue::Content(error) => write!(f, "{error}"),
            ValidationIssue::MissingSkill(id) => write!(f, "references missing skill '{id}'"),
            ValidationIssue::NoAbilities => f.write_str("has no ability to act with"),
            ValidationIssue::MissingAttributes(class) => {
                write!(f, "class {class} has skills but no attributes")
            }
            ValidationIssue::ZeroMaxHp => f.write_str("max_hp must be positive"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validates raw loaded content. Returns every problem found, empty if the
/// content is consistent.
pub fn validate_content(
    skills: &[SkillNode],
    classes: &BTreeMap<CharacterClass, CharacterAttributes>,
    bosses: &[BossDefinition],
    config: &CombatConfig,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut push = |source_type: &'static str, source_id: &str, issue: ValidationIssue| {
        errors.push(ValidationError {
            source_type,
            source_id: source_id.to_owned(),
            issue,
        });
    };

    let mut by_id: BTreeMap<&SkillId, &SkillNode> = BTreeMap::new();
    for node in skills {
        if by_id.insert(&node.id, node).is_some() {
            push("Skill", node.id.as_str(), ValidationIssue::DuplicateId);
        }
    }

    for node in skills {
        let id = node.id.as_str();
        if let Err(error) = node.validate(config.max_hits) {
            push("Skill", id, ValidationIssue::Content(error));
        }

        let Some(required) = &node.requires else {
            continue;
        };
        let Some(prerequisite) = by_id.get(required) else {
            push(
                "Skill",
                id,
                ValidationIssue::MissingPrerequisite(required.clone()),
            );
            continue;
        };
        if prerequisite.class != node.class {
            push(
                "Skill",
                id,
                ValidationIssue::PrerequisiteClassMismatch(required.clone()),
            );
        }
        if prerequisite.level_required > node.level_required {
            push(
                "Skill",
                id,
                ValidationIssue::PrerequisiteLevelAbove {
                    prerequisite: required.clone(),
                    prerequisite_level: prerequisite.level_required,
                    level: node.level_required,
                },
            );
        }
    }

    let classes_with_skills: BTreeSet<CharacterClass> =
        skills.iter().filter_map(|node| node.class).collect();
    for class in classes_with_skills {
        if !classes.contains_key(&class) {
            push(
                "Class",
                class.into(),
                ValidationIssue::MissingAttributes(class),
            );
        }
    }
    for (class, attributes) in classes {
        if attributes.max_hp == 0 {
            push("Class", (*class).into(), ValidationIssue::ZeroMaxHp);
        }
    }

    let mut boss_ids = BTreeSet::new();
    for boss in bosses {
        if !boss_ids.insert(boss.id.as_str()) {
            push("Boss", &boss.id, ValidationIssue::DuplicateId);
        }
        if boss.attributes.max_hp == 0 {
            push("Boss", &boss.id, ValidationIssue::ZeroMaxHp);
        }
        let mut has_ability = false;
        for skill in &boss.skills {
            match by_id.get(skill) {
                Some(node) => has_ability |= node.is_ability(),
                None => push("Boss", &boss.id, ValidationIssue::MissingSkill(skill.clone())),
            }
        }
        if !has_ability {
            push("Boss", &boss.id, ValidationIssue::NoAbilities);
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::{Ability, Effect, Passive, SkillKind, TargetType, Trigger};

    fn skill(id: &str, level: u32, requires: Option<&str>, kind: SkillKind) -> SkillNode {
        SkillNode {
            id: id.into(),
            name: id.to_owned(),
            description: String::new(),
            class: Some(CharacterClass::Tank),
            level_required: level,
            requires: requires.map(SkillId::from),
            kind,
        }
    }

    fn guard() -> SkillKind {
        SkillKind::Ability(Ability {
            cost: 1,
            target_type: TargetType::SelfOnly,
            hits: 1,
            effects: vec![],
            self_effects: vec![Effect::AddShield { amount: 1 }],
        })
    }

    fn tank_attributes() -> BTreeMap<CharacterClass, CharacterAttributes> {
        BTreeMap::from([(CharacterClass::Tank, CharacterAttributes::new(100, 2, 5))])
    }

    #[test]
    fn consistent_content_has_no_errors() {
        let skills = vec![
            skill("guard", 1, None, guard()),
            skill("brace", 2, Some("guard"), guard()),
        ];
        let errors = validate_content(&skills, &tank_attributes(), &[], &CombatConfig::default());
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn prerequisite_problems_are_reported() {
        let mut foreign = skill("volley", 1, None, guard());
        foreign.class = Some(CharacterClass::Mage);
        let skills = vec![
            skill("guard", 4, None, guard()),
            skill("brace", 2, Some("guard"), guard()),
            skill("ghostly", 2, Some("nowhere"), guard()),
            skill("mixed", 2, Some("volley"), guard()),
            foreign,
            skill("guard", 1, None, guard()),
        ];
        let errors = validate_content(&skills, &tank_attributes(), &[], &CombatConfig::default());
        let issues: Vec<_> = errors.iter().map(|e| &e.issue).collect();

        assert!(issues.contains(&&ValidationIssue::DuplicateId));
        assert!(issues.contains(&&ValidationIssue::MissingPrerequisite("nowhere".into())));
        assert!(issues.contains(&&ValidationIssue::PrerequisiteClassMismatch("volley".into())));
        assert!(issues.contains(&&ValidationIssue::MissingAttributes(CharacterClass::Mage)));
        assert!(issues.iter().any(|issue| matches!(
            issue,
            ValidationIssue::PrerequisiteLevelAbove { level: 2, .. }
        )));
    }

    #[test]
    fn misplaced_effects_and_bad_bosses_are_reported() {
        let skills = vec![skill(
            "thorns",
            1,
            None,
            SkillKind::Passive(Passive {
                trigger: Trigger::Always,
                effect: Effect::ReflectDamage { amount: 1 },
                condition: None,
            }),
        )];
        let bosses = vec![BossDefinition {
            id: "husk".to_owned(),
            name: "Husk".to_owned(),
            level: 1,
            attributes: CharacterAttributes::new(10, 0, 0),
            skills: vec!["thorns".into(), "gone".into()],
        }];
        let errors =
            validate_content(&skills, &tank_attributes(), &bosses, &CombatConfig::default());

        assert!(errors.iter().any(|e| matches!(
            e.issue,
            ValidationIssue::Content(ContentError::MisplacedEffect { .. })
        )));
        assert!(errors
            .iter()
            .any(|e| e.issue == ValidationIssue::MissingSkill("gone".into())));
        assert!(errors.iter().any(|e| e.issue == ValidationIssue::NoAbilities));
        assert!(errors[0].to_string().starts_with("Skill 'thorns'"));
    }
}

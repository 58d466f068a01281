//! List skill nodes.

use anyhow::Result;
use clap::Parser;
use combat_core::{CharacterClass, Effect, SkillKind, SkillNode};

use super::ContentArgs;

/// List skills, grouped by class and sorted by unlock level
#[derive(Parser)]
pub struct Skills {
    /// Only show this class (tank, warrior, mage, healer); `boss` for boss skills
    #[arg(short, long, value_name = "CLASS")]
    class: Option<String>,
}

impl Skills {
    pub fn execute(self, content: &ContentArgs) -> Result<()> {
        let (_, tables) = content.load()?;

        let filter: Option<Option<CharacterClass>> = match self.class.as_deref() {
            None => None,
            Some("boss") => Some(None),
            Some(name) => Some(Some(name.parse().map_err(|_| {
                anyhow::anyhow!("unknown class '{name}'")
            })?)),
        };

        let mut nodes: Vec<&SkillNode> = tables
            .skills
            .iter()
            .filter(|node| filter.is_none_or(|class| node.class == class))
            .collect();
        nodes.sort_by(|a, b| {
            (a.class, a.level_required, &a.id).cmp(&(b.class, b.level_required, &b.id))
        });

        for node in nodes {
            let class = node.class.map_or("boss".to_owned(), |c| c.to_string());
            let requires = node
                .requires
                .as_ref()
                .map(|id| format!(" (requires {id})"))
                .unwrap_or_default();
            println!(
                "{class:<8} L{:<2} {:<16} {}{requires}",
                node.level_required,
                node.id,
                summarize(&node.kind)
            );
        }
        Ok(())
    }
}

fn summarize(kind: &SkillKind) -> String {
    match kind {
        SkillKind::Ability(ability) => {
            let effects: Vec<String> = ability.effects.iter().map(describe).collect();
            let selfs: Vec<String> = ability.self_effects.iter().map(describe).collect();
            let mut line = format!(
                "ability cost={} {} x{} [{}]",
                ability.cost,
                ability.target_type,
                ability.hits,
                effects.join(", ")
            );
            if !selfs.is_empty() {
                line.push_str(&format!(" self [{}]", selfs.join(", ")));
            }
            line
        }
        SkillKind::Passive(passive) => {
            let gate = passive
                .condition
                .map(|c| format!(" if {c:?}"))
                .unwrap_or_default();
            format!(
                "passive {} [{}]{gate}",
                passive.trigger,
                describe(&passive.effect)
            )
        }
    }
}

fn describe(effect: &Effect) -> String {
    match effect {
        Effect::Damage { amount }
        | Effect::AddShield { amount }
        | Effect::DamageReduction { amount }
        | Effect::ReflectDamage { amount }
        | Effect::Provoke { amount } => format!("{} {amount}", effect.name()),
        Effect::ModifyShieldGain { amount, condition } => match condition {
            Some(c) => format!("{} x{amount} if {c:?}", effect.name()),
            None => format!("{} x{amount}", effect.name()),
        },
        Effect::ModifyShieldCapacity { amount } => format!("{} {amount:+}", effect.name()),
        Effect::SurviveFatal => effect.name().to_owned(),
    }
}

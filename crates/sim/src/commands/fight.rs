//! Scripted boss fight.
//!
//! Both sides follow a fixed policy so runs are reproducible: every combatant
//! cycles through its abilities, starting at a different one each round and
//! skipping those it cannot afford. The boss always targets the party member
//! with the highest threat.

use std::str::FromStr;

use anyhow::{Context, Result, ensure};
use clap::Parser;
use combat_content::ContentTables;
use combat_core::combat::CombatEvent;
use combat_core::{
    ActionCommand, ActionOutcome, BeginTurn, CharacterClass, CombatConfig, CombatEngine,
    CombatEnv, Combatant, CombatantDelta, CombatantId, Fight as Encounter, Side, TargetType,
};
use serde::Serialize;
use tracing::{debug, info};

use super::ContentArgs;

const BOSS_ID: CombatantId = CombatantId(100);

/// Run a deterministic fight against a boss
#[derive(Parser)]
pub struct Fight {
    /// Boss id, or the dungeon level whose boss to fight
    #[arg(short, long, value_name = "ID|LEVEL")]
    boss: String,

    /// Party members as class:level
    #[arg(
        short,
        long,
        value_name = "CLASS:LEVEL",
        num_args = 1..,
        default_values = ["tank:8", "warrior:6", "healer:5"]
    )]
    party: Vec<PartyMember>,

    /// Stop after this many rounds
    #[arg(short, long, default_value_t = 30)]
    rounds: u32,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// One line per action and state change
    Summary,
    /// One JSON object per turn and action
    Json,
}

#[derive(Clone, Copy, Debug)]
struct PartyMember {
    class: CharacterClass,
    level: u32,
}

impl FromStr for PartyMember {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (class, level) = s
            .split_once(':')
            .ok_or_else(|| format!("expected CLASS:LEVEL, got '{s}'"))?;
        let class = class
            .parse()
            .map_err(|_| format!("unknown class '{class}'"))?;
        let level = level
            .parse()
            .map_err(|_| format!("invalid level '{level}'"))?;
        Ok(Self { class, level })
    }
}

#[derive(Serialize)]
#[serde(tag = "record", rename_all = "snake_case")]
enum Record<'a> {
    Turn {
        round: u32,
        outcome: &'a combat_core::TurnOutcome,
    },
    Action {
        round: u32,
        outcome: &'a ActionOutcome,
    },
    Skipped {
        round: u32,
        combatant: CombatantId,
        reason: String,
    },
    Result {
        rounds: u32,
        winner: Option<Side>,
    },
}

impl Fight {
    pub fn execute(self, content: &ContentArgs) -> Result<()> {
        let (config, tables) = content.load()?;
        let mut encounter = self.assemble(&tables)?;
        let env = tables.env();

        if matches!(self.format, OutputFormat::Summary) {
            for combatant in encounter.combatants() {
                println!(
                    "{:<16} {:<6} hp {:>3} shield {}/{} energy {}",
                    combatant.name,
                    combatant.side,
                    combatant.hp,
                    combatant.shield,
                    combatant.shield_capacity(&env)?,
                    combatant.energy
                );
            }
        }

        let mut played = 0;
        for round in 1..=self.rounds {
            if encounter.is_over() {
                break;
            }
            played = round;
            self.play_round(round, &mut encounter, env, &config)?;
        }

        let winner = encounter.winner();
        info!(target: "combat::sim", rounds = played, ?winner, "fight finished");
        match self.format {
            OutputFormat::Json => emit(&Record::Result {
                rounds: played,
                winner,
            })?,
            OutputFormat::Summary => match winner {
                Some(side) => println!("== {side} wins after {played} round(s)"),
                None => println!("== undecided after {played} round(s)"),
            },
        }
        Ok(())
    }

    fn assemble(&self, tables: &ContentTables) -> Result<Encounter> {
        ensure!(
            self.party.len() < BOSS_ID.0 as usize,
            "a party is limited to {} members",
            BOSS_ID.0 - 1
        );
        let sheets: Vec<_> = self
            .party
            .iter()
            .enumerate()
            .map(|(i, member)| {
                let name = format!("{}{}", member.class, i + 1);
                tables.character(&name, member.class, member.level)
            })
            .collect();
        let mut combatants = tables.party(&sheets)?;
        combatants.push(tables.boss_combatant(BOSS_ID, &self.boss)?);
        Ok(Encounter::begin(combatants))
    }

    fn play_round(
        &self,
        round: u32,
        encounter: &mut Encounter,
        env: CombatEnv<'_>,
        config: &CombatConfig,
    ) -> Result<()> {
        let order: Vec<CombatantId> = encounter.ids().collect();
        for id in order {
            if encounter.is_over() {
                break;
            }
            if encounter.combatant(id).is_none_or(Combatant::is_defeated) {
                continue;
            }

            let mut engine = CombatEngine::new(encounter, config);
            let turn = engine
                .begin_turn(env, BeginTurn::new(id))
                .with_context(|| format!("turn start of {id} failed"))?;
            self.report_turn(round, &turn, engine.fight())?;
            if engine.fight().combatant(id).is_none_or(Combatant::is_defeated) {
                continue;
            }

            let Some(command) = choose(engine.fight(), id, env, round)? else {
                self.report_skip(round, engine.fight(), id, "no affordable ability")?;
                continue;
            };
            debug!(target: "combat::sim", ?command, "chosen");
            match engine.execute(env, &command) {
                Ok(outcome) => self.report_action(round, &outcome, engine.fight())?,
                Err(error) if error.is_rejection() => {
                    self.report_skip(round, engine.fight(), id, &error.to_string())?
                }
                Err(error) => return Err(error).context("engine failure"),
            }
        }
        Ok(())
    }

    fn report_turn(
        &self,
        round: u32,
        outcome: &combat_core::TurnOutcome,
        encounter: &Encounter,
    ) -> Result<()> {
        match self.format {
            OutputFormat::Json => emit(&Record::Turn { round, outcome }),
            OutputFormat::Summary => {
                if !outcome.deltas.is_empty() || !outcome.passives_fired().is_empty() {
                    println!("[{round}] {} begins turn", name(encounter, outcome.combatant));
                    print_events(encounter, &outcome.events);
                    print_deltas(encounter, &outcome.deltas);
                }
                Ok(())
            }
        }
    }

    fn report_action(
        &self,
        round: u32,
        outcome: &ActionOutcome,
        encounter: &Encounter,
    ) -> Result<()> {
        match self.format {
            OutputFormat::Json => emit(&Record::Action { round, outcome }),
            OutputFormat::Summary => {
                let targets: Vec<&str> =
                    outcome.targets.iter().map(|id| name(encounter, *id)).collect();
                println!(
                    "[{round}] {} uses {} on {}",
                    name(encounter, outcome.caster),
                    outcome.skill,
                    targets.join(", ")
                );
                print_events(encounter, &outcome.events);
                print_deltas(encounter, &outcome.deltas);
                Ok(())
            }
        }
    }

    fn report_skip(
        &self,
        round: u32,
        encounter: &Encounter,
        combatant: CombatantId,
        reason: &str,
    ) -> Result<()> {
        match self.format {
            OutputFormat::Json => emit(&Record::Skipped {
                round,
                combatant,
                reason: reason.to_owned(),
            }),
            OutputFormat::Summary => {
                println!("[{round}] {} waits: {reason}", name(encounter, combatant));
                Ok(())
            }
        }
    }
}

/// Picks the next ability for `id`, rotating the starting point by round.
fn choose(
    encounter: &Encounter,
    id: CombatantId,
    env: CombatEnv<'_>,
    round: u32,
) -> Result<Option<ActionCommand>> {
    let Some(caster) = encounter.combatant(id) else {
        return Ok(None);
    };
    let actions: Vec<_> = caster.actions().collect();
    if actions.is_empty() {
        return Ok(None);
    }

    let start = round as usize % actions.len();
    let Some(action) = actions
        .iter()
        .cycle()
        .skip(start)
        .take(actions.len())
        .find(|action| action.cost <= caster.energy)
    else {
        return Ok(None);
    };

    let command = ActionCommand::new(id, action.id.clone());
    let target = match action.target_type {
        TargetType::SingleEnemy => match caster.side {
            Side::Enemy => most_threatening(encounter, env)?,
            Side::Party => encounter.standing(Side::Enemy).first().copied(),
        },
        TargetType::SingleAlly => most_wounded(encounter, caster.side),
        TargetType::SelfOnly | TargetType::AllEnemies | TargetType::AllParty => {
            return Ok(Some(command));
        }
    };
    Ok(target.map(|target| command.with_target(target)))
}

/// Standing party member with the highest threat; lowest id wins ties.
fn most_threatening(encounter: &Encounter, env: CombatEnv<'_>) -> Result<Option<CombatantId>> {
    let mut best: Option<(u32, CombatantId)> = None;
    for id in encounter.standing(Side::Party) {
        let Some(member) = encounter.combatant(id) else {
            continue;
        };
        let threat = member.threat(&env)?;
        if best.is_none_or(|(top, _)| threat > top) {
            best = Some((threat, id));
        }
    }
    Ok(best.map(|(_, id)| id))
}

/// Standing ally with the lowest HP; lowest id wins ties.
fn most_wounded(encounter: &Encounter, side: Side) -> Option<CombatantId> {
    encounter
        .standing(side)
        .into_iter()
        .filter_map(|id| encounter.combatant(id))
        .min_by_key(|c| (c.hp, c.id))
        .map(|c| c.id)
}

fn name(encounter: &Encounter, id: CombatantId) -> &str {
    encounter.combatant(id).map_or("?", |c| c.name.as_str())
}

fn print_events(encounter: &Encounter, events: &[CombatEvent]) {
    for event in events {
        match event {
            CombatEvent::PassiveFired { owner, skill, .. } => {
                println!("      {} triggers {skill}", name(encounter, *owner))
            }
            CombatEvent::Reflected {
                reflector,
                target,
                amount,
                ..
            } => println!(
                "      {} reflects {amount} onto {}",
                name(encounter, *reflector),
                name(encounter, *target)
            ),
            CombatEvent::SurvivedFatal { combatant, hp, .. } => {
                println!("      {} refuses to fall ({hp} hp)", name(encounter, *combatant))
            }
            CombatEvent::Defeated { combatant } => {
                println!("      {} is defeated", name(encounter, *combatant))
            }
            _ => {}
        }
    }
}

fn print_deltas(encounter: &Encounter, deltas: &[CombatantDelta]) {
    for delta in deltas {
        println!(
            "      {:<16} hp {:>3} -> {:<3} shield {} -> {}",
            name(encounter, delta.combatant),
            delta.hp_before,
            delta.hp_after,
            delta.shield_before,
            delta.shield_after
        );
    }
}

fn emit(record: &Record<'_>) -> Result<()> {
    let line = serde_json::to_string(record).context("failed to serialize fight record")?;
    println!("{line}");
    Ok(())
}

//! Mutable state shared by every step of one resolution.

use crate::action::ActionError;
use crate::config::CombatConfig;
use crate::env::CombatEnv;
use crate::state::{Combatant, CombatantId, Fight};

use super::events::CombatEvent;

/// Everything the resolver, damage pipeline and dispatcher read or mutate.
pub struct CombatContext<'a> {
    pub fight: &'a mut Fight,
    pub env: CombatEnv<'a>,
    pub config: &'a CombatConfig,
    events: Vec<CombatEvent>,
}

impl<'a> CombatContext<'a> {
    pub fn new(fight: &'a mut Fight, env: CombatEnv<'a>, config: &'a CombatConfig) -> Self {
        Self {
            fight,
            env,
            config,
            events: Vec::new(),
        }
    }

    pub fn combatant(&self, id: CombatantId) -> Result<&Combatant, ActionError> {
        self.fight
            .combatant(id)
            .ok_or(ActionError::TargetNotFound(id))
    }

    pub fn combatant_mut(&mut self, id: CombatantId) -> Result<&mut Combatant, ActionError> {
        self.fight
            .combatant_mut(id)
            .ok_or(ActionError::TargetNotFound(id))
    }

    pub fn emit(&mut self, event: CombatEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[CombatEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<CombatEvent> {
        self.events
    }
}

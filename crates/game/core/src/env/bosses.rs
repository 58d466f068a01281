use std::collections::BTreeMap;

use crate::skill::BossDefinition;

/// Oracle providing boss definitions by id or by level.
pub trait BossOracle: Send + Sync {
    fn boss(&self, id: &str) -> Option<&BossDefinition>;

    /// The boss guarding `level`, if one is defined for exactly that level.
    fn boss_for_level(&self, level: u32) -> Option<&BossDefinition>;
}

#[derive(Clone, Debug, Default)]
pub struct BossTable {
    bosses: BTreeMap<String, BossDefinition>,
}

impl BossTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, boss: BossDefinition) -> Option<BossDefinition> {
        self.bosses.insert(boss.id.clone(), boss)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BossDefinition> {
        self.bosses.values()
    }

    pub fn len(&self) -> usize {
        self.bosses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bosses.is_empty()
    }
}

impl FromIterator<BossDefinition> for BossTable {
    fn from_iter<T: IntoIterator<Item = BossDefinition>>(iter: T) -> Self {
        let mut table = Self::new();
        for boss in iter {
            table.insert(boss);
        }
        table
    }
}

impl BossOracle for BossTable {
    fn boss(&self, id: &str) -> Option<&BossDefinition> {
        self.bosses.get(id)
    }

    fn boss_for_level(&self, level: u32) -> Option<&BossDefinition> {
        self.bosses.values().find(|boss| boss.level == level)
    }
}

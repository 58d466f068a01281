/// Combat configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// HP a combatant is pinned to when a survive-fatal passive intercepts lethal damage.
    pub survive_fatal_hp: u32,

    /// Upper bound on an ability's `hits`. Content above this is rejected.
    pub max_hits: u32,

    /// Whether `begin_turn` regenerates the combatant's energy.
    pub energy_regen_on_turn: bool,
}

impl CombatConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SURVIVE_FATAL_HP: u32 = 1;
    pub const DEFAULT_MAX_HITS: u32 = 16;

    pub fn new() -> Self {
        Self {
            survive_fatal_hp: Self::DEFAULT_SURVIVE_FATAL_HP,
            max_hits: Self::DEFAULT_MAX_HITS,
            energy_regen_on_turn: true,
        }
    }

    pub fn with_max_hits(mut self, max_hits: u32) -> Self {
        self.max_hits = max_hits;
        self
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}

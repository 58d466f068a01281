//! Character classes and their base attributes.

/// Character class a skill tree belongs to.
///
/// Parsed from snake_case names on the command line (`tank`, `healer`).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharacterClass {
    Tank,
    Warrior,
    Mage,
    Healer,
}

/// Base numeric stats for a class, loaded once and never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterAttributes {
    pub max_hp: u32,
    pub shield_capacity: u32,
    pub max_energy: u32,
    /// Energy restored at the start of each of the combatant's turns.
    pub energy_regen: u32,
    /// Base targeting score read by enemy AI; provoke raises it.
    pub threat: u32,
}

impl CharacterAttributes {
    pub const fn new(max_hp: u32, shield_capacity: u32, max_energy: u32) -> Self {
        Self {
            max_hp,
            shield_capacity,
            max_energy,
            energy_regen: 0,
            threat: 0,
        }
    }

    pub const fn with_regen(mut self, energy_regen: u32) -> Self {
        self.energy_regen = energy_regen;
        self
    }

    pub const fn with_threat(mut self, threat: u32) -> Self {
        self.threat = threat;
        self
    }
}

/// Target set an ability resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetType {
    /// The caster only.
    SelfOnly,
    /// One chosen living combatant on the opposing side.
    SingleEnemy,
    /// Every living combatant on the opposing side.
    AllEnemies,
    /// One chosen living combatant on the caster's side (the caster included).
    SingleAlly,
    /// Every living combatant on the caster's side, the caster included.
    AllParty,
}

impl TargetType {
    /// Whether the caller must name a target when using the ability.
    pub const fn needs_explicit_target(&self) -> bool {
        matches!(self, Self::SingleEnemy | Self::SingleAlly)
    }
}

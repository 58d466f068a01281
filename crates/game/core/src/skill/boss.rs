use super::class::CharacterAttributes;
use super::node::SkillId;

/// Boss identity, base attributes and skills.
///
/// `skills` are ids into the shared skill table; bosses may own passives as
/// well as abilities.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BossDefinition {
    pub id: String,
    pub name: String,
    pub level: u32,
    pub attributes: CharacterAttributes,
    pub skills: Vec<SkillId>,
}

//! Traits describing read-only content data.
//!
//! Oracles expose skill nodes, class attributes, and boss definitions. The
//! [`Env`] aggregate bundles them so the engine can access everything it needs
//! without hard coupling to concrete implementations. All oracles are
//! immutable after load and shared by every fight.
mod bosses;
mod classes;
mod skills;

pub use bosses::{BossOracle, BossTable};
pub use classes::{ClassOracle, ClassTable};
pub use skills::{SkillOracle, SkillTable};

use crate::skill::{ContentError, SkillId, SkillNode};

/// Aggregates read-only oracles required by the engine.
pub struct Env<'a, S, C, B>
where
    S: SkillOracle + ?Sized,
    C: ClassOracle + ?Sized,
    B: BossOracle + ?Sized,
{
    skills: Option<&'a S>,
    classes: Option<&'a C>,
    bosses: Option<&'a B>,
}

// Hand-written so `CombatEnv` (trait objects) stays `Copy`.
impl<S, C, B> Clone for Env<'_, S, C, B>
where
    S: SkillOracle + ?Sized,
    C: ClassOracle + ?Sized,
    B: BossOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, C, B> Copy for Env<'_, S, C, B>
where
    S: SkillOracle + ?Sized,
    C: ClassOracle + ?Sized,
    B: BossOracle + ?Sized,
{
}

pub type CombatEnv<'a> = Env<'a, dyn SkillOracle + 'a, dyn ClassOracle + 'a, dyn BossOracle + 'a>;

impl<'a, S, C, B> Env<'a, S, C, B>
where
    S: SkillOracle + ?Sized,
    C: ClassOracle + ?Sized,
    B: BossOracle + ?Sized,
{
    pub fn new(skills: Option<&'a S>, classes: Option<&'a C>, bosses: Option<&'a B>) -> Self {
        Self {
            skills,
            classes,
            bosses,
        }
    }

    pub fn with_all(skills: &'a S, classes: &'a C, bosses: &'a B) -> Self {
        Self::new(Some(skills), Some(classes), Some(bosses))
    }

    pub fn empty() -> Self {
        Self {
            skills: None,
            classes: None,
            bosses: None,
        }
    }

    /// Returns the SkillOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::OracleUnavailable` if no skill oracle was provided.
    pub fn skills(&self) -> Result<&'a S, ContentError> {
        self.skills.ok_or(ContentError::OracleUnavailable("skills"))
    }

    /// Returns the ClassOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::OracleUnavailable` if no class oracle was provided.
    pub fn classes(&self) -> Result<&'a C, ContentError> {
        self.classes.ok_or(ContentError::OracleUnavailable("classes"))
    }

    /// Returns the BossOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::OracleUnavailable` if no boss oracle was provided.
    pub fn bosses(&self) -> Result<&'a B, ContentError> {
        self.bosses.ok_or(ContentError::OracleUnavailable("bosses"))
    }

    /// Looks up a skill node, failing fast on ids missing from the tables.
    pub fn skill(&self, id: &SkillId) -> Result<&'a SkillNode, ContentError> {
        self.skills()?
            .skill(id)
            .ok_or_else(|| ContentError::UnknownSkill(id.clone()))
    }
}

impl<'a, S, C, B> Env<'a, S, C, B>
where
    S: SkillOracle + 'a,
    C: ClassOracle + 'a,
    B: BossOracle + 'a,
{
    /// Converts this environment into a trait-object based `CombatEnv` (borrows self).
    pub fn as_combat_env(&self) -> CombatEnv<'a> {
        let skills: Option<&'a dyn SkillOracle> = self.skills.map(|skills| skills as _);
        let classes: Option<&'a dyn ClassOracle> = self.classes.map(|classes| classes as _);
        let bosses: Option<&'a dyn BossOracle> = self.bosses.map(|bosses| bosses as _);
        Env::new(skills, classes, bosses)
    }
}

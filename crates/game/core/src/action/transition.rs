use crate::config::CombatConfig;
use crate::env::CombatEnv;
use crate::state::Fight;

/// Three-phase state transition over a [`Fight`].
///
/// The validation hooks receive read-only state and must stay side-effect
/// free. `apply` may assume `pre_validate` succeeded on the same state.
pub trait CombatTransition {
    type Error;
    type Outcome;

    /// Validates pre-conditions using the fight **before** mutation.
    fn pre_validate(
        &self,
        _fight: &Fight,
        _env: &CombatEnv<'_>,
        _config: &CombatConfig,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Mutates the fight and reports what happened.
    fn apply(
        &self,
        fight: &mut Fight,
        env: &CombatEnv<'_>,
        config: &CombatConfig,
    ) -> Result<Self::Outcome, Self::Error>;

    /// Validates post-conditions using the fight **after** mutation.
    fn post_validate(&self, _fight: &Fight, _env: &CombatEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}

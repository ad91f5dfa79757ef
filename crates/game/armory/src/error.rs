//! Weapon construction and scoring errors.

use fuzzy_logic::FuzzyError;
use game_script::ScriptError;

pub type Result<T> = std::result::Result<T, WeaponError>;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum WeaponError {
    /// The weapon's rule base could not be built or queried.
    #[error(transparent)]
    Fuzzy(#[from] FuzzyError),

    /// A tuning constant is missing or has the wrong type.
    #[error(transparent)]
    Script(#[from] ScriptError),

    /// A tuning constant is present but outside its valid range.
    #[error("weapon parameter '{key}' = {value} {reason}")]
    InvalidParam {
        key: String,
        value: f64,
        reason: &'static str,
    },
}

//! CliError - everything that stops a scenario from being resolved

use damage_core::attack::AttackError;
use damage_core::config::ConfigError;
use damage_core::dice::DiceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Attack can't be resolved: {0}")]
    Attack(#[from] AttackError),
    #[error("Invalid damage roll: {0}")]
    Dice(#[from] DiceError),
    #[error("Invalid damage roll: {expression} came to {total}")]
    NonPositiveDamage { expression: String, total: i32 },
    #[error("No targets selected")]
    NoTargets,
    #[error("Failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
}

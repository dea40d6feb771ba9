//! damage_cli - resolve attacks from scenario files at the table

pub mod dice;
pub mod error;
pub mod ordnance;
pub mod scenario;

pub use dice::DiceSource;
pub use error::CliError;
pub use ordnance::{load_targets, run_ordnance, OrdnanceTargets};
pub use scenario::{load_scenario, parse_scenario, Outcome, Scenario, Target};

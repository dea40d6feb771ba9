//! Ordnance runs - one damage roll against every target in a file

use crate::error::CliError;
use damage_core::combat::{resolve_ordnance, OrdnanceOutcome, OrdnanceTarget};
use damage_core::config::{load_toml, parse_toml};
use damage_core::dice::{Dice, DiceExpression};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdnanceTargets {
    #[serde(default)]
    pub targets: Vec<OrdnanceTarget>,
}

pub fn load_targets(path: &Path) -> Result<OrdnanceTargets, CliError> {
    Ok(load_toml(path)?)
}

pub fn parse_targets(content: &str) -> Result<OrdnanceTargets, CliError> {
    Ok(parse_toml(content)?)
}

/// Roll `damage` once and apply it to every target
pub fn run_ordnance(
    targets: &OrdnanceTargets,
    damage: &str,
    pierce: i32,
    multiplier: i32,
    dice: &mut impl Dice,
) -> Result<(i32, Vec<OrdnanceOutcome>), CliError> {
    if targets.targets.is_empty() {
        return Err(CliError::NoTargets);
    }

    let expression: DiceExpression = damage.parse()?;
    let rolled = expression.roll(dice);
    if rolled <= 0 {
        return Err(CliError::NonPositiveDamage {
            expression: expression.to_string(),
            total: rolled,
        });
    }
    tracing::info!(%expression, rolled, pierce, multiplier, "ordnance damage rolled");

    Ok((rolled, resolve_ordnance(&targets.targets, rolled, pierce, multiplier)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use damage_core::dice::ScriptedDice;

    const TARGETS: &str = r#"
[[targets]]
name = "Grunt Minor"
[targets.defense]
wounds = 12
[targets.defense.armour]
head = { protection = 1, resistance = 3 }
chest = { protection = 2, resistance = 4 }
left_arm = { protection = 1, resistance = 3 }
right_arm = { protection = 1, resistance = 3 }
left_leg = { protection = 1, resistance = 3 }
right_leg = { protection = 1, resistance = 3 }

[[targets]]
name = "Elite Minor"
[targets.defense]
wounds = 40
shields = { current = 20, max = 20 }
[targets.defense.armour]
head = { protection = 4, resistance = 8 }
chest = { protection = 6, resistance = 10 }
left_arm = { protection = 4, resistance = 8 }
right_arm = { protection = 4, resistance = 8 }
left_leg = { protection = 4, resistance = 8 }
right_leg = { protection = 4, resistance = 8 }
"#;

    #[test]
    fn test_ordnance_run() {
        let targets = parse_targets(TARGETS).unwrap();
        let mut dice = ScriptedDice::new([6, 4]);
        let (rolled, outcomes) = run_ordnance(&targets, "2d10 + 5", 2, 1, &mut dice).unwrap();

        assert_eq!(rolled, 15);
        assert_eq!(outcomes[0].report(), "[1] Grunt Minor is dead.");
        assert_eq!(outcomes[1].report(), "[2] Elite Minor took 15 shield damage and 0 wound damage.");
    }

    #[test]
    fn test_zero_damage_roll_rejected() {
        let targets = parse_targets(TARGETS).unwrap();
        let mut dice = ScriptedDice::new([3]);
        let err = run_ordnance(&targets, "1d6 - 3", 0, 1, &mut dice).unwrap_err();
        assert!(matches!(err, CliError::NonPositiveDamage { total: 0, .. }));
    }

    #[test]
    fn test_no_targets() {
        let targets = parse_targets("").unwrap();
        let err = run_ordnance(&targets, "1d6", 0, 1, &mut ScriptedDice::default()).unwrap_err();
        assert!(matches!(err, CliError::NoTargets));
    }
}

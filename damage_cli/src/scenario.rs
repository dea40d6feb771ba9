//! Scenario files - an attack, a target and the GM's choices in one TOML file

use crate::error::CliError;
use damage_core::attack::{AttackRecord, WeaponSpecialRules};
use damage_core::combat::{
    resolve_person_hits_with_dice, resolve_vehicle_hits_with_dice, PersonContext,
    PersonResolution, VehicleContext, VehicleResolution,
};
use damage_core::config::{load_toml, parse_toml, RuleSet};
use damage_core::defense::{PersonDefense, VehicleDefense};
use damage_core::dice::Dice;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Target of the attack, tagged with `kind = "person"` or `kind = "vehicle"`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Target {
    Person {
        name: String,
        defense: PersonDefense,
        #[serde(default)]
        context: PersonContext,
    },
    Vehicle {
        name: String,
        defense: VehicleDefense,
        #[serde(default)]
        context: VehicleContext,
    },
}

impl Target {
    pub fn name(&self) -> &str {
        match self {
            Target::Person { name, .. } | Target::Vehicle { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub attack: AttackRecord,
    pub target: Target,
    /// Dice results to replay instead of rolling
    #[serde(default)]
    pub rolls: Vec<u32>,
}

/// What a scenario did to its target
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Person {
        name: String,
        resolution: PersonResolution,
    },
    Vehicle {
        name: String,
        resolution: VehicleResolution,
    },
}

impl Outcome {
    /// Result lines, one block per affected actor
    pub fn report(&self, reveal_remaining: bool) -> Vec<String> {
        match self {
            Outcome::Person { name, resolution } => vec![resolution.summary(name, reveal_remaining)],
            Outcome::Vehicle { name, resolution } => {
                let mut blocks = vec![resolution.summary(name, reveal_remaining)];
                blocks.extend(
                    resolution
                        .crew_hits
                        .iter()
                        .map(|hit| hit.resolution.summary(&hit.name, reveal_remaining)),
                );
                blocks
            }
        }
    }
}

pub fn load_scenario(path: &Path) -> Result<Scenario, CliError> {
    Ok(load_toml(path)?)
}

pub fn parse_scenario(content: &str) -> Result<Scenario, CliError> {
    Ok(parse_toml(content)?)
}

impl Scenario {
    /// Check the attack against the target and resolve it
    pub fn resolve(&self, rules: &RuleSet, dice: &mut impl Dice) -> Result<Outcome, CliError> {
        let traits = WeaponSpecialRules::resolve(&self.attack.special_rules(), rules);
        tracing::debug!(?traits, target = self.target.name(), "resolving scenario");

        match &self.target {
            Target::Person {
                name,
                defense,
                context,
            } => {
                let hits = self.attack.person_hits(context.called_shot)?;
                let resolution =
                    resolve_person_hits_with_dice(&hits, defense, &traits, context, dice);
                Ok(Outcome::Person {
                    name: name.clone(),
                    resolution,
                })
            }
            Target::Vehicle {
                name,
                defense,
                context,
            } => {
                let hits = self.attack.vehicle_hits()?;
                let resolution =
                    resolve_vehicle_hits_with_dice(&hits, defense, &traits, context, rules, dice);
                Ok(Outcome::Vehicle {
                    name: name.clone(),
                    resolution,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use damage_core::dice::ScriptedDice;

    const PERSON: &str = r#"
[attack]
special_rules = ["Spread (2)"]

[[attack.hits]]
hit_number = 1
hit_roll = 70
damage_instances = [{ damage = 12, pierce = 2, location = "Chest" }]

[[attack.hits]]
hit_number = 2
hit_roll = 5
damage_instances = [{ damage = 9, location = "Head" }]

[target]
kind = "person"
name = 'Spartan "Noble" Six'

[target.defense]
wounds = 30
shields = { current = 10, max = 10 }

[target.defense.armour]
head = { protection = 3, resistance = 5 }
chest = { protection = 3, resistance = 5 }
left_arm = { protection = 3, resistance = 5 }
right_arm = { protection = 3, resistance = 5 }
left_leg = { protection = 3, resistance = 5 }
right_leg = { protection = 3, resistance = 5 }

[target.context]
applied_hits = [1]
"#;

    #[test]
    fn test_person_scenario() {
        let scenario = parse_scenario(PERSON).unwrap();
        let outcome = scenario
            .resolve(&RuleSet::default(), &mut ScriptedDice::default())
            .unwrap();

        let Outcome::Person { resolution, .. } = &outcome else {
            panic!("expected a person outcome");
        };
        // 12 + 2 pierce against 10 shields leaves 4, not enough for resistance 5
        assert_eq!(resolution.shield_damage, 10);
        assert_eq!(resolution.wound_damage, 0);
        assert_eq!(resolution.skipped_hits, vec![2]);

        let report = outcome.report(true);
        assert_eq!(report.len(), 1);
        assert!(report[0].starts_with("Noble\n"));
        assert!(report[0].contains("Shields remaining: 0"));
    }

    #[test]
    fn test_vehicle_attack_on_person_rejected() {
        let toml = PERSON
            .replace("location = \"Chest\"", "location = \"Engine\"")
            .replace("location = \"Head\"", "location = \"Hull\"");
        let scenario = parse_scenario(&toml).unwrap();
        let err = scenario
            .resolve(&RuleSet::default(), &mut ScriptedDice::default())
            .unwrap_err();
        assert!(matches!(err, CliError::Attack(_)));
    }
}

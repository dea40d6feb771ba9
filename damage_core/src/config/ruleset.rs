//! Rule set - the tunable parts of the damage rules
//!
//! Earlier versions of the damage rules differed only in which traits add
//! pierce against shields, whether Headshot exists, and a few constants.
//! Those differences live here as data so one engine serves every variant.

use super::ConfigError;
use crate::attack::WeaponTrait;
use crate::types::BodyLocation;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A complete, versioned set of damage rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Label for the rule revision
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub shields: ShieldRules,
    #[serde(default)]
    pub person: PersonRules,
    #[serde(default)]
    pub crew: CrewRules,
    /// Percentile roll to body location, ordered by `max_roll`
    #[serde(default = "default_hit_locations")]
    pub hit_locations: Vec<HitLocationBand>,
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSet {
            version: default_version(),
            shields: ShieldRules::default(),
            person: PersonRules::default(),
            crew: CrewRules::default(),
            hit_locations: default_hit_locations(),
        }
    }
}

fn default_version() -> String {
    "canonical".to_string()
}

/// How weapon traits interact with energy shields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShieldRules {
    /// Traits that add the weapon's pierce to damage against shields
    #[serde(default = "default_pierce_traits")]
    pub pierce_traits: Vec<WeaponTrait>,
    /// Pierce multiplier for Penetrating weapons against shields
    #[serde(default = "default_penetrating_multiplier")]
    pub penetrating_multiplier: i32,
    /// Pierce multiplier for Penetrating weapons that also carry a boost trait
    #[serde(default = "default_penetrating_boosted_multiplier")]
    pub penetrating_boosted_multiplier: i32,
    #[serde(default = "default_penetrating_boost_traits")]
    pub penetrating_boost_traits: Vec<WeaponTrait>,
}

impl Default for ShieldRules {
    fn default() -> Self {
        ShieldRules {
            pierce_traits: default_pierce_traits(),
            penetrating_multiplier: default_penetrating_multiplier(),
            penetrating_boosted_multiplier: default_penetrating_boosted_multiplier(),
            penetrating_boost_traits: default_penetrating_boost_traits(),
        }
    }
}

fn default_pierce_traits() -> Vec<WeaponTrait> {
    vec![
        WeaponTrait::Spread,
        WeaponTrait::Cauterize,
        WeaponTrait::Kinetic,
        WeaponTrait::Blast,
        WeaponTrait::Kill,
        WeaponTrait::Carpet,
    ]
}
fn default_penetrating_multiplier() -> i32 {
    3
}
fn default_penetrating_boosted_multiplier() -> i32 {
    5
}
fn default_penetrating_boost_traits() -> Vec<WeaponTrait> {
    vec![WeaponTrait::Blast, WeaponTrait::Kill]
}

/// Person-target rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonRules {
    /// Headshot hits to the head ignore the toughness part of resistance
    #[serde(default = "default_true")]
    pub headshot_uses_protection: bool,
    /// Sides of the bonus die Kinetic weapons add against unshielded targets
    #[serde(default = "default_kinetic_bonus_die")]
    pub kinetic_bonus_die: u32,
}

impl Default for PersonRules {
    fn default() -> Self {
        PersonRules {
            headshot_uses_protection: true,
            kinetic_bonus_die: default_kinetic_bonus_die(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_kinetic_bonus_die() -> u32 {
    10
}

/// Vehicle crew hit rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewRules {
    #[serde(default = "default_hit_die")]
    pub hit_die: u32,
    /// A crew member is hit when their roll is at least this value
    #[serde(default = "default_hit_threshold")]
    pub hit_threshold: u32,
}

impl Default for CrewRules {
    fn default() -> Self {
        CrewRules {
            hit_die: default_hit_die(),
            hit_threshold: default_hit_threshold(),
        }
    }
}

fn default_hit_die() -> u32 {
    100
}
fn default_hit_threshold() -> u32 {
    96
}

/// Rolls up to and including `max_roll` land on `location`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitLocationBand {
    pub max_roll: u32,
    pub location: BodyLocation,
}

impl HitLocationBand {
    pub fn new(max_roll: u32, location: BodyLocation) -> Self {
        HitLocationBand { max_roll, location }
    }
}

fn default_hit_locations() -> Vec<HitLocationBand> {
    vec![
        HitLocationBand::new(10, BodyLocation::Head),
        HitLocationBand::new(20, BodyLocation::LeftArm),
        HitLocationBand::new(30, BodyLocation::RightArm),
        HitLocationBand::new(45, BodyLocation::LeftLeg),
        HitLocationBand::new(60, BodyLocation::RightLeg),
        HitLocationBand::new(100, BodyLocation::Chest),
    ]
}

impl RuleSet {
    /// The bundled canonical rule set
    pub fn canonical() -> Self {
        Self::parse_or_default(include_str!("../../config/ruleset.toml"))
    }

    fn parse_or_default(content: &str) -> Self {
        match parse_ruleset(content) {
            Ok(rules) => rules,
            Err(error) => {
                tracing::warn!(%error, "bundled rule set is invalid, using built-in defaults");
                RuleSet::default()
            }
        }
    }

    /// Body location for a percentile hit roll
    ///
    /// Rolls past the end of the table land on the last band.
    pub fn hit_location(&self, hit_roll: u32) -> BodyLocation {
        self.hit_locations
            .iter()
            .find(|band| hit_roll <= band.max_roll)
            .or_else(|| self.hit_locations.last())
            .map(|band| band.location)
            .unwrap_or(BodyLocation::Chest)
    }

    /// Check the rule set is internally consistent
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.person.kinetic_bonus_die == 0 {
            return Err(ConfigError::ValidationError(
                "person.kinetic_bonus_die must have at least one side".to_string(),
            ));
        }
        if self.crew.hit_die == 0 {
            return Err(ConfigError::ValidationError(
                "crew.hit_die must have at least one side".to_string(),
            ));
        }
        if self.crew.hit_threshold == 0 || self.crew.hit_threshold > self.crew.hit_die {
            return Err(ConfigError::ValidationError(format!(
                "crew.hit_threshold {} can't be rolled on a d{}",
                self.crew.hit_threshold, self.crew.hit_die
            )));
        }
        if self.shields.penetrating_multiplier < 0 || self.shields.penetrating_boosted_multiplier < 0
        {
            return Err(ConfigError::ValidationError(
                "penetrating multipliers can't be negative".to_string(),
            ));
        }

        let mut previous = 0;
        for band in &self.hit_locations {
            if band.max_roll <= previous {
                return Err(ConfigError::ValidationError(format!(
                    "hit location bands must be strictly increasing, got {} after {}",
                    band.max_roll, previous
                )));
            }
            previous = band.max_roll;
        }
        if previous < 100 {
            return Err(ConfigError::ValidationError(format!(
                "hit location table stops at {}, must cover rolls up to 100",
                previous
            )));
        }

        Ok(())
    }
}

/// Load and validate a rule set from a TOML file
pub fn load_ruleset(path: &Path) -> Result<RuleSet, ConfigError> {
    let rules: RuleSet = super::load_toml(path)?;
    rules.validate()?;
    Ok(rules)
}

/// Parse and validate a rule set from a TOML string
pub fn parse_ruleset(content: &str) -> Result<RuleSet, ConfigError> {
    let rules: RuleSet = super::parse_toml(content)?;
    rules.validate()?;
    Ok(rules)
}

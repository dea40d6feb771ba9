//! AttackRecord - structured attack data as an external log supplies it
//!
//! Locations arrive as display names. Converting a record into typed hits is
//! where mode mismatches and missing data are caught, before any resolution.

use super::{DamageInstance, Hit, PersonHit, VehicleHit, WeaponTrait};
use crate::types::{BodyLocation, Breakpoint, LocationParseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Attack data that can't be resolved against the chosen target
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttackError {
    #[error("attack has no hits")]
    NoHits,
    #[error(transparent)]
    UnknownLocation(#[from] LocationParseError),
    #[error("hit {hit_number} has a damage instance with no location")]
    MissingLocation { hit_number: u32 },
    #[error("vehicle hit detected but target is not a vehicle")]
    VehicleAttackOnPerson,
    #[error("hit {hit_number} has roll {hit_roll}, expected 1-100")]
    HitRollOutOfRange { hit_number: u32, hit_roll: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDamageInstance {
    pub damage: i32,
    #[serde(default)]
    pub pierce: i32,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawHit {
    pub hit_number: u32,
    #[serde(default)]
    pub hit_roll: u32,
    #[serde(default)]
    pub damage_instances: Vec<RawDamageInstance>,
}

/// One weapon attack as recorded: its hits and the weapon's special rules
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackRecord {
    #[serde(default)]
    pub hits: Vec<RawHit>,
    #[serde(default)]
    pub special_rules: Vec<String>,
}

impl AttackRecord {
    /// Weapon traits named by the record
    pub fn special_rules(&self) -> Vec<WeaponTrait> {
        WeaponTrait::parse_list(&self.special_rules)
    }

    fn instances(&self) -> impl Iterator<Item = &RawDamageInstance> {
        self.hits.iter().flat_map(|h| h.damage_instances.iter())
    }

    /// True when every damage instance is aimed at a vehicle breakpoint
    pub fn is_vehicle_attack(&self) -> bool {
        let mut instances = self.instances().peekable();
        instances.peek().is_some()
            && instances.all(|i| {
                i.location
                    .as_deref()
                    .is_some_and(|loc| loc.parse::<Breakpoint>().is_ok())
            })
    }

    /// Typed hits for a person target
    ///
    /// `fallback` fills instances recorded without a location, normally the
    /// called shot location.
    pub fn person_hits(&self, fallback: Option<BodyLocation>) -> Result<Vec<PersonHit>, AttackError> {
        if self.hits.is_empty() {
            return Err(AttackError::NoHits);
        }
        if self.is_vehicle_attack() {
            return Err(AttackError::VehicleAttackOnPerson);
        }

        self.hits
            .iter()
            .map(|raw| {
                let instances = raw
                    .damage_instances
                    .iter()
                    .map(|inst| {
                        let location = match inst.location.as_deref() {
                            Some(name) => name.parse::<BodyLocation>()?,
                            None => fallback.ok_or(AttackError::MissingLocation {
                                hit_number: raw.hit_number,
                            })?,
                        };
                        Ok(DamageInstance::new(inst.damage.max(0), inst.pierce.max(0), location))
                    })
                    .collect::<Result<Vec<_>, AttackError>>()?;
                Ok(Hit::new(raw.hit_number, raw.hit_roll, instances))
            })
            .collect()
    }

    /// Typed hits for a vehicle target
    ///
    /// Instances with no location, or aimed at a body location, strike the hull.
    pub fn vehicle_hits(&self) -> Result<Vec<VehicleHit>, AttackError> {
        if self.hits.is_empty() {
            return Err(AttackError::NoHits);
        }

        self.hits
            .iter()
            .map(|raw| {
                if !(1..=100).contains(&raw.hit_roll) {
                    return Err(AttackError::HitRollOutOfRange {
                        hit_number: raw.hit_number,
                        hit_roll: raw.hit_roll,
                    });
                }
                let instances = raw
                    .damage_instances
                    .iter()
                    .map(|inst| {
                        let location = match inst.location.as_deref() {
                            None => Breakpoint::Hull,
                            Some(name) => match name.parse::<Breakpoint>() {
                                Ok(bp) => bp,
                                Err(err) => {
                                    name.parse::<BodyLocation>().map_err(|_| err)?;
                                    Breakpoint::Hull
                                }
                            },
                        };
                        Ok(DamageInstance::new(inst.damage.max(0), inst.pierce.max(0), location))
                    })
                    .collect::<Result<Vec<_>, AttackError>>()?;
                Ok(Hit::new(raw.hit_number, raw.hit_roll, instances))
            })
            .collect()
    }
}

//! Hit and DamageInstance - one rolled attack outcome and its damage

use crate::types::{BodyLocation, Breakpoint};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One discrete application of damage within a hit
///
/// `damage` and `pierce` are never negative. `L` is the location type of the
/// target profile: [`BodyLocation`] for people, [`Breakpoint`] for vehicles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageInstance<L> {
    pub damage: i32,
    pub pierce: i32,
    pub location: L,
}

impl<L> DamageInstance<L> {
    pub fn new(damage: i32, pierce: i32, location: L) -> Self {
        DamageInstance {
            damage,
            pierce,
            location,
        }
    }
}

/// One attack roll and the damage it dealt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hit<L> {
    /// 1-based sequence number, used to pick which hits landed
    pub hit_number: u32,
    /// Percentile attack roll
    pub hit_roll: u32,
    pub instances: Vec<DamageInstance<L>>,
}

pub type PersonHit = Hit<BodyLocation>;
pub type VehicleHit = Hit<Breakpoint>;

impl<L: Copy> Hit<L> {
    pub fn new(hit_number: u32, hit_roll: u32, instances: Vec<DamageInstance<L>>) -> Self {
        Hit {
            hit_number,
            hit_roll,
            instances,
        }
    }

    /// A burst-fire hit: several damage rolls sharing one pierce and location
    pub fn burst(hit_number: u32, hit_roll: u32, damages: &[i32], pierce: i32, location: L) -> Self {
        Hit {
            hit_number,
            hit_roll,
            instances: damages
                .iter()
                .map(|&damage| DamageInstance::new(damage, pierce, location))
                .collect(),
        }
    }
}

/// Hit numbers the GM confirmed as landed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppliedHits(BTreeSet<u32>);

impl AppliedHits {
    pub fn new(hit_numbers: impl IntoIterator<Item = u32>) -> Self {
        AppliedHits(hit_numbers.into_iter().collect())
    }

    /// Every hit in the attack counts
    pub fn all<L>(hits: &[Hit<L>]) -> Self {
        AppliedHits(hits.iter().map(|h| h.hit_number).collect())
    }

    pub fn contains(&self, hit_number: u32) -> bool {
        self.0.contains(&hit_number)
    }
}

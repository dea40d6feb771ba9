//! Damage deltas - what a resolution changes on a target

use crate::defense::{Breakpoints, PersonDefense, VehicleDefense};
use crate::types::Breakpoint;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// The mutable part of a person target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonState {
    pub wounds: i32,
    pub shields: i32,
}

impl PersonState {
    pub fn of(defense: &PersonDefense) -> Self {
        PersonState {
            wounds: defense.wounds,
            shields: defense.shields.current,
        }
    }

    /// Write this state back onto a defense snapshot
    pub fn write_to(&self, defense: &mut PersonDefense) {
        defense.wounds = self.wounds;
        defense.shields.current = self.shields;
    }
}

/// Damage taken by a person
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonDelta {
    pub shield_damage: i32,
    pub wound_damage: i32,
}

impl PersonDelta {
    pub fn new(shield_damage: i32, wound_damage: i32) -> Self {
        PersonDelta {
            shield_damage,
            wound_damage,
        }
    }

    /// The delta that turns `old` into `new`
    pub fn between(old: &PersonState, new: &PersonState) -> Self {
        PersonDelta {
            shield_damage: old.shields.saturating_sub(new.shields),
            wound_damage: old.wounds.saturating_sub(new.wounds),
        }
    }

    pub fn apply(&self, state: &PersonState) -> PersonState {
        PersonState {
            wounds: state.wounds.saturating_sub(self.wound_damage),
            shields: state.shields.saturating_sub(self.shield_damage),
        }
    }

    pub fn combine(&self, other: &PersonDelta) -> PersonDelta {
        PersonDelta {
            shield_damage: self.shield_damage.saturating_add(other.shield_damage),
            wound_damage: self.wound_damage.saturating_add(other.wound_damage),
        }
    }
}

/// The mutable part of a vehicle target
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleState {
    pub shields: i32,
    pub breakpoints: Breakpoints,
}

impl VehicleState {
    pub fn of(defense: &VehicleDefense) -> Self {
        VehicleState {
            shields: defense.shields.current,
            breakpoints: defense.breakpoints.clone(),
        }
    }
}

/// Damage taken by a vehicle; only breakpoints that changed are listed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleDelta {
    pub shield_damage: i32,
    #[serde(default)]
    pub breakpoint_damage: BTreeMap<Breakpoint, i32>,
}

impl VehicleDelta {
    pub fn new(shield_damage: i32) -> Self {
        VehicleDelta {
            shield_damage,
            breakpoint_damage: BTreeMap::new(),
        }
    }

    /// Add damage to a breakpoint; zero is ignored
    pub fn with_damage(mut self, breakpoint: Breakpoint, damage: i32) -> Self {
        if damage != 0 {
            let total = self.breakpoint_damage.entry(breakpoint).or_insert(0);
            *total = total.saturating_add(damage);
            if self.breakpoint_damage.get(&breakpoint) == Some(&0) {
                self.breakpoint_damage.remove(&breakpoint);
            }
        }
        self
    }

    /// The delta that turns `old` into `new`
    ///
    /// A breakpoint missing on either side counts as zero health.
    pub fn between(old: &VehicleState, new: &VehicleState) -> Self {
        let keys: BTreeSet<Breakpoint> = old
            .breakpoints
            .iter()
            .chain(new.breakpoints.iter())
            .map(|(bp, _)| bp)
            .collect();

        keys.into_iter().fold(
            VehicleDelta::new(old.shields.saturating_sub(new.shields)),
            |delta, bp| {
                let before = old.breakpoints.get(bp).unwrap_or(0);
                let after = new.breakpoints.get(bp).unwrap_or(0);
                delta.with_damage(bp, before.saturating_sub(after))
            },
        )
    }

    pub fn apply(&self, state: &VehicleState) -> VehicleState {
        let mut breakpoints = state.breakpoints.clone();
        for (bp, damage) in &self.breakpoint_damage {
            breakpoints.damage(*bp, *damage);
        }
        VehicleState {
            shields: state.shields.saturating_sub(self.shield_damage),
            breakpoints,
        }
    }
}

//! Resolution context - the GM's choices for one resolution call

use crate::attack::{AppliedHits, DamageInstance};
use crate::defense::Cover;
use crate::types::{BodyLocation, Breakpoint, VehicleFacing};
use serde::{Deserialize, Serialize};

/// Adjustments applied identically to every damage instance in a call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    /// Added to pierce, e.g. from a charge
    #[serde(default)]
    pub extra_pierce: i32,
    /// Multiplies damage, e.g. inside a grenade's kill radius
    #[serde(default = "default_damage_multiplier")]
    pub damage_multiplier: i32,
}

fn default_damage_multiplier() -> i32 {
    1
}

impl Default for Modifiers {
    fn default() -> Self {
        Modifiers {
            extra_pierce: 0,
            damage_multiplier: default_damage_multiplier(),
        }
    }
}

impl Modifiers {
    /// The instance as it lands: damage multiplied, pierce increased
    pub fn apply<L: Copy>(&self, instance: &DamageInstance<L>) -> DamageInstance<L> {
        DamageInstance {
            damage: instance.damage.saturating_mul(self.damage_multiplier).max(0),
            pierce: instance.pierce.saturating_add(self.extra_pierce).max(0),
            location: instance.location,
        }
    }
}

/// Context for resolving an attack against a person
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonContext {
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub cover: Cover<BodyLocation>,
    /// Forces every instance onto one location
    #[serde(default)]
    pub called_shot: Option<BodyLocation>,
    /// Hits that landed; `None` applies every hit
    #[serde(default)]
    pub applied_hits: Option<AppliedHits>,
}

impl PersonContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_extra_pierce(mut self, extra_pierce: i32) -> Self {
        self.modifiers.extra_pierce = extra_pierce;
        self
    }

    pub fn with_damage_multiplier(mut self, multiplier: i32) -> Self {
        self.modifiers.damage_multiplier = multiplier;
        self
    }

    pub fn with_cover(mut self, cover: Cover<BodyLocation>) -> Self {
        self.cover = cover;
        self
    }

    pub fn with_called_shot(mut self, location: BodyLocation) -> Self {
        self.called_shot = Some(location);
        self
    }

    pub fn with_applied_hits(mut self, applied: AppliedHits) -> Self {
        self.applied_hits = Some(applied);
        self
    }

    pub fn applies(&self, hit_number: u32) -> bool {
        hit_applies(self.applied_hits.as_ref(), hit_number)
    }
}

/// Context for resolving an attack against a vehicle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleContext {
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub cover: Cover<VehicleFacing>,
    /// Side the attack comes from, the same for every instance
    #[serde(default)]
    pub facing: VehicleFacing,
    /// Breakpoints the GM aimed at; the hits are applied once per entry
    #[serde(default)]
    pub breakpoint_overrides: Vec<Breakpoint>,
    #[serde(default)]
    pub applied_hits: Option<AppliedHits>,
}

impl VehicleContext {
    pub fn new(facing: VehicleFacing) -> Self {
        VehicleContext {
            facing,
            ..Self::default()
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_extra_pierce(mut self, extra_pierce: i32) -> Self {
        self.modifiers.extra_pierce = extra_pierce;
        self
    }

    pub fn with_damage_multiplier(mut self, multiplier: i32) -> Self {
        self.modifiers.damage_multiplier = multiplier;
        self
    }

    pub fn with_cover(mut self, cover: Cover<VehicleFacing>) -> Self {
        self.cover = cover;
        self
    }

    pub fn with_breakpoint_override(mut self, breakpoint: Breakpoint) -> Self {
        self.breakpoint_overrides.push(breakpoint);
        self
    }

    /// Aim at every breakpoint, as a Blast weapon does
    pub fn with_all_breakpoints(mut self) -> Self {
        self.breakpoint_overrides = Breakpoint::all().to_vec();
        self
    }

    pub fn with_applied_hits(mut self, applied: AppliedHits) -> Self {
        self.applied_hits = Some(applied);
        self
    }

    pub fn applies(&self, hit_number: u32) -> bool {
        hit_applies(self.applied_hits.as_ref(), hit_number)
    }
}

fn hit_applies(applied: Option<&AppliedHits>, hit_number: u32) -> bool {
    applied.map_or(true, |applied| applied.contains(hit_number))
}

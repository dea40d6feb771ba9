//! PersonResolution and VehicleResolution - Outcome of resolving an attack

use super::delta::{PersonDelta, PersonState, VehicleDelta, VehicleState};
use crate::attack::DamageInstance;
use crate::damage::{PersonInstanceDamage, VehicleInstanceDamage};
use crate::defense::{CrewRole, PersonDefense, VehicleDefense};
use crate::types::{BodyLocation, Breakpoint};
use serde::{Deserialize, Serialize};

/// Name to use in result lines: the quoted callsign if there is one
///
/// `Spartan "Noble" Six` becomes `Noble`.
pub fn display_name(name: &str) -> &str {
    let mut quoted = name.split('"');
    match (quoted.next(), quoted.next(), quoted.next()) {
        (Some(_), Some(callsign), Some(_)) if !callsign.is_empty() => callsign,
        _ => name,
    }
}

/// One resolved instance against a person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonInstanceOutcome {
    pub hit_number: u32,
    /// The instance as it landed, after modifiers and called shot
    pub instance: DamageInstance<BodyLocation>,
    pub damage: PersonInstanceDamage,
}

/// Result of resolving an attack against a person
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonResolution {
    /// Shield damage plus wound damage
    pub total_damage: i32,
    pub shield_damage: i32,
    pub wound_damage: i32,
    /// Target has a shield generator at all
    pub has_shields: bool,
    pub before: PersonState,
    pub after: PersonState,
    pub instances: Vec<PersonInstanceOutcome>,
    /// Hit numbers left out because they didn't land
    pub skipped_hits: Vec<u32>,
}

impl PersonResolution {
    /// Empty resolution starting from the target's current state
    pub fn new(target: &PersonDefense) -> Self {
        let state = PersonState::of(target);
        PersonResolution {
            has_shields: target.shields.has_shields(),
            before: state,
            after: state,
            ..Self::default()
        }
    }

    pub(crate) fn record(
        &mut self,
        hit_number: u32,
        instance: DamageInstance<BodyLocation>,
        damage: PersonInstanceDamage,
    ) {
        self.total_damage = self.total_damage.saturating_add(damage.total());
        self.shield_damage = self.shield_damage.saturating_add(damage.shield_damage);
        self.wound_damage = self.wound_damage.saturating_add(damage.wound_damage);
        self.after.shields = self.after.shields.saturating_sub(damage.shield_damage);
        self.after.wounds = self.after.wounds.saturating_sub(damage.wound_damage);
        self.instances.push(PersonInstanceOutcome {
            hit_number,
            instance,
            damage,
        });
    }

    pub fn is_down(&self) -> bool {
        self.after.wounds <= 0
    }

    pub fn delta(&self) -> PersonDelta {
        PersonDelta::new(self.shield_damage, self.wound_damage)
    }

    /// Result lines for the table
    ///
    /// Remaining shields and wounds are only shown when `reveal_remaining`.
    pub fn summary(&self, name: &str, reveal_remaining: bool) -> String {
        let name = display_name(name);
        let mut lines = vec![name.to_string(), String::new()];

        if self.total_damage <= 0 {
            lines.push("No damage taken.".to_string());
            return lines.join("\n");
        }

        if self.is_down() {
            lines.push(format!("{} is down!", name));
            lines.push(String::new());
        }

        if self.has_shields {
            lines.push(format!("Shield damage: {}", self.shield_damage));
            if reveal_remaining {
                lines.push(format!("Shields remaining: {}", self.after.shields));
            }
            lines.push(String::new());
        }

        lines.push(format!("Wound damage: {}", self.wound_damage));
        if reveal_remaining {
            lines.push(format!("Wounds remaining: {}", self.after.wounds));
        }

        lines.join("\n")
    }
}

/// One resolved instance against a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleInstanceOutcome {
    pub hit_number: u32,
    /// Breakpoint the instance was aimed at, after any override
    pub aimed_at: Breakpoint,
    /// Instance as it landed; its location is the breakpoint that took the damage
    pub instance: DamageInstance<Breakpoint>,
    pub damage: VehicleInstanceDamage,
    /// A crew hit check was rolled for this instance
    pub crew_checked: bool,
}

impl VehicleInstanceOutcome {
    pub fn redirected(&self) -> bool {
        self.aimed_at != self.instance.location
    }
}

/// Health lost by one breakpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakpointDamage {
    pub breakpoint: Breakpoint,
    pub damage: i32,
    pub remaining: i32,
}

/// A crew member caught by damage through the hull
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewHit {
    pub crew_id: String,
    pub name: String,
    pub role: CrewRole,
    pub hit_number: u32,
    /// Percentile roll that picked this crew member
    pub roll: u32,
    pub location: BodyLocation,
    pub resolution: PersonResolution,
}

/// Result of resolving an attack against a vehicle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleResolution {
    /// Shield damage plus vehicle damage
    pub total_damage: i32,
    pub shield_damage: i32,
    pub vehicle_damage: i32,
    pub has_shields: bool,
    pub before: VehicleState,
    pub after: VehicleState,
    pub instances: Vec<VehicleInstanceOutcome>,
    /// Crew hits in the order they happened
    pub crew_hits: Vec<CrewHit>,
    pub skipped_hits: Vec<u32>,
}

impl VehicleResolution {
    pub fn new(target: &VehicleDefense) -> Self {
        let state = VehicleState::of(target);
        VehicleResolution {
            has_shields: target.shields.has_shields(),
            before: state.clone(),
            after: state,
            ..Self::default()
        }
    }

    pub(crate) fn record(&mut self, outcome: VehicleInstanceOutcome) {
        let damage = outcome.damage;
        self.total_damage = self.total_damage.saturating_add(damage.total());
        self.shield_damage = self.shield_damage.saturating_add(damage.shield_damage);
        self.vehicle_damage = self.vehicle_damage.saturating_add(damage.vehicle_damage);
        self.after.shields = self.after.shields.saturating_sub(damage.shield_damage);
        self.after
            .breakpoints
            .damage(outcome.instance.location, damage.vehicle_damage);
        self.instances.push(outcome);
    }

    /// Breakpoints that lost health, in breakpoint order
    pub fn damaged_breakpoints(&self) -> Vec<BreakpointDamage> {
        self.after
            .breakpoints
            .iter()
            .filter_map(|(breakpoint, remaining)| {
                let before = self.before.breakpoints.get(breakpoint).unwrap_or(0);
                (remaining < before).then_some(BreakpointDamage {
                    breakpoint,
                    damage: before - remaining,
                    remaining,
                })
            })
            .collect()
    }

    pub fn delta(&self) -> VehicleDelta {
        VehicleDelta::between(&self.before, &self.after)
    }

    /// Total damage per crew member, in the order they were first hit
    pub fn crew_deltas(&self) -> Vec<(String, PersonDelta)> {
        let mut deltas: Vec<(String, PersonDelta)> = Vec::new();
        for hit in &self.crew_hits {
            let delta = hit.resolution.delta();
            match deltas.iter_mut().find(|(id, _)| *id == hit.crew_id) {
                Some((_, total)) => *total = total.combine(&delta),
                None => deltas.push((hit.crew_id.clone(), delta)),
            }
        }
        deltas
    }

    pub fn summary(&self, name: &str, reveal_remaining: bool) -> String {
        let name = display_name(name);
        let mut lines = vec![name.to_string(), String::new()];

        if self.total_damage <= 0 {
            lines.push("No damage taken.".to_string());
            return lines.join("\n");
        }

        if self.has_shields {
            lines.push(format!("Shield damage: {}", self.shield_damage));
            if reveal_remaining {
                lines.push(format!("Remaining shields: {}", self.after.shields));
            }
            lines.push(String::new());
        }

        for damaged in self.damaged_breakpoints() {
            lines.push(format!("{} damage: {}", damaged.breakpoint, damaged.damage));
            if reveal_remaining {
                lines.push(format!("{} integrity: {}", damaged.breakpoint, damaged.remaining));
            }
            lines.push(String::new());
        }

        while lines.last().is_some_and(String::is_empty) {
            lines.pop();
        }
        lines.join("\n")
    }
}

//! Target snapshots - the defensive state a resolution call starts from

use super::{PersonArmour, Shields, VehicleArmour};
use crate::types::Breakpoint;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Defensive stats of a person target
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonDefense {
    pub armour: PersonArmour,
    /// Current wounds; negative means defeated by that much
    pub wounds: i32,
    #[serde(default)]
    pub shields: Shields,
}

impl PersonDefense {
    pub fn new(armour: PersonArmour, wounds: i32, shields: Shields) -> Self {
        PersonDefense {
            armour,
            wounds,
            shields,
        }
    }
}

/// Health of each vehicle breakpoint
///
/// Vehicles don't always have every breakpoint. A missing breakpoint counts
/// as destroyed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Breakpoints(BTreeMap<Breakpoint, i32>);

impl Breakpoints {
    pub fn new(values: impl IntoIterator<Item = (Breakpoint, i32)>) -> Self {
        Breakpoints(values.into_iter().collect())
    }

    pub fn get(&self, breakpoint: Breakpoint) -> Option<i32> {
        self.0.get(&breakpoint).copied()
    }

    /// Present with health above zero
    pub fn is_intact(&self, breakpoint: Breakpoint) -> bool {
        self.get(breakpoint).is_some_and(|health| health > 0)
    }

    /// Take `amount` off a breakpoint; health may go negative
    ///
    /// A missing breakpoint is only added when it actually loses health.
    pub fn damage(&mut self, breakpoint: Breakpoint, amount: i32) {
        if amount == 0 {
            return;
        }
        let health = self.0.entry(breakpoint).or_insert(0);
        *health = health.saturating_sub(amount);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Breakpoint, i32)> + '_ {
        self.0.iter().map(|(bp, health)| (*bp, *health))
    }
}

/// Which crew list a crew member sits in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrewRole {
    Operator,
    Gunner,
    Complement,
}

/// Someone riding in a vehicle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewMember {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub defense: PersonDefense,
}

/// Vehicle crew slots; empty slots are `None`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crew {
    #[serde(default)]
    pub operators: Vec<Option<CrewMember>>,
    #[serde(default)]
    pub gunners: Vec<Option<CrewMember>>,
    #[serde(default)]
    pub complement: Vec<Option<CrewMember>>,
}

impl Crew {
    /// Occupied slots: operators, then gunners, then complement
    pub fn members(&self) -> impl Iterator<Item = (CrewRole, &CrewMember)> {
        let operators = self.operators.iter().flatten().map(|m| (CrewRole::Operator, m));
        let gunners = self.gunners.iter().flatten().map(|m| (CrewRole::Gunner, m));
        let complement = self
            .complement
            .iter()
            .flatten()
            .map(|m| (CrewRole::Complement, m));
        operators.chain(gunners).chain(complement)
    }
}

/// Defensive stats of a vehicle target
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleDefense {
    pub armour: VehicleArmour,
    pub breakpoints: Breakpoints,
    #[serde(default)]
    pub shields: Shields,
    /// Crew of an open-topped vehicle get no protection from its armour
    #[serde(default)]
    pub open_top: bool,
    #[serde(default)]
    pub crew: Crew,
}

//! Location types shared by person and vehicle targets

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A location name that didn't match any known location
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind}: {name:?}")]
pub struct LocationParseError {
    pub kind: &'static str,
    pub name: String,
}

/// Lowercase and drop separators so "Left Arm", "left_arm" and "left-arm" compare equal
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Body location on a person target
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyLocation {
    Head,
    Chest,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl BodyLocation {
    /// Get all body locations
    pub fn all() -> &'static [BodyLocation] {
        &[
            BodyLocation::Head,
            BodyLocation::Chest,
            BodyLocation::LeftArm,
            BodyLocation::RightArm,
            BodyLocation::LeftLeg,
            BodyLocation::RightLeg,
        ]
    }

    /// Display name as it appears in attack records
    pub fn name(self) -> &'static str {
        match self {
            BodyLocation::Head => "Head",
            BodyLocation::Chest => "Chest",
            BodyLocation::LeftArm => "Left Arm",
            BodyLocation::RightArm => "Right Arm",
            BodyLocation::LeftLeg => "Left Leg",
            BodyLocation::RightLeg => "Right Leg",
        }
    }
}

impl fmt::Display for BodyLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BodyLocation {
    type Err = LocationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        BodyLocation::all()
            .iter()
            .copied()
            .find(|loc| normalize(loc.name()) == wanted)
            .ok_or_else(|| LocationParseError {
                kind: "body location",
                name: s.to_string(),
            })
    }
}

/// Side of a vehicle an attack comes from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleFacing {
    #[default]
    Front,
    Side,
    Back,
    Top,
    Bottom,
}

impl VehicleFacing {
    pub fn all() -> &'static [VehicleFacing] {
        &[
            VehicleFacing::Front,
            VehicleFacing::Side,
            VehicleFacing::Back,
            VehicleFacing::Top,
            VehicleFacing::Bottom,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            VehicleFacing::Front => "Front",
            VehicleFacing::Side => "Side",
            VehicleFacing::Back => "Back",
            VehicleFacing::Top => "Top",
            VehicleFacing::Bottom => "Bottom",
        }
    }
}

impl fmt::Display for VehicleFacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VehicleFacing {
    type Err = LocationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        VehicleFacing::all()
            .iter()
            .copied()
            .find(|facing| normalize(facing.name()) == wanted)
            .ok_or_else(|| LocationParseError {
                kind: "vehicle facing",
                name: s.to_string(),
            })
    }
}

/// Vehicle subsystem with its own health pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Breakpoint {
    Engine,
    Hull,
    Mobility,
    Optics,
    Weapon,
}

impl Breakpoint {
    pub fn all() -> &'static [Breakpoint] {
        &[
            Breakpoint::Engine,
            Breakpoint::Hull,
            Breakpoint::Mobility,
            Breakpoint::Optics,
            Breakpoint::Weapon,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            Breakpoint::Engine => "Engine",
            Breakpoint::Hull => "Hull",
            Breakpoint::Mobility => "Mobility",
            Breakpoint::Optics => "Optics",
            Breakpoint::Weapon => "Weapon",
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Breakpoint {
    type Err = LocationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Breakpoint::all()
            .iter()
            .copied()
            .find(|bp| normalize(bp.name()) == wanted)
            .ok_or_else(|| LocationParseError {
                kind: "breakpoint",
                name: s.to_string(),
            })
    }
}

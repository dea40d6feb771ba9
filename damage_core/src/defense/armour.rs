//! Armour - resistance per body location or per vehicle facing

use super::Cover;
use crate::types::{BodyLocation, VehicleFacing};
use serde::{Deserialize, Serialize};

/// Armour at one body location
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationArmour {
    /// Armour alone, without the toughness modifier
    pub protection: i32,
    /// Protection plus the toughness modifier
    pub resistance: i32,
}

impl LocationArmour {
    pub fn new(protection: i32, resistance: i32) -> Self {
        LocationArmour {
            protection,
            resistance,
        }
    }
}

/// Armour for every body location of a person
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonArmour {
    pub head: LocationArmour,
    pub chest: LocationArmour,
    pub left_arm: LocationArmour,
    pub right_arm: LocationArmour,
    pub left_leg: LocationArmour,
    pub right_leg: LocationArmour,
}

impl PersonArmour {
    /// The same armour at every location
    pub fn uniform(protection: i32, resistance: i32) -> Self {
        let armour = LocationArmour::new(protection, resistance);
        PersonArmour {
            head: armour,
            chest: armour,
            left_arm: armour,
            right_arm: armour,
            left_leg: armour,
            right_leg: armour,
        }
    }

    pub fn get(&self, location: BodyLocation) -> LocationArmour {
        match location {
            BodyLocation::Head => self.head,
            BodyLocation::Chest => self.chest,
            BodyLocation::LeftArm => self.left_arm,
            BodyLocation::RightArm => self.right_arm,
            BodyLocation::LeftLeg => self.left_leg,
            BodyLocation::RightLeg => self.right_leg,
        }
    }

    pub fn get_mut(&mut self, location: BodyLocation) -> &mut LocationArmour {
        match location {
            BodyLocation::Head => &mut self.head,
            BodyLocation::Chest => &mut self.chest,
            BodyLocation::LeftArm => &mut self.left_arm,
            BodyLocation::RightArm => &mut self.right_arm,
            BodyLocation::LeftLeg => &mut self.left_leg,
            BodyLocation::RightLeg => &mut self.right_leg,
        }
    }

    /// Builder-style override for one location
    pub fn with(mut self, location: BodyLocation, armour: LocationArmour) -> Self {
        *self.get_mut(location) = armour;
        self
    }

    /// Add a flat amount to protection and resistance everywhere
    ///
    /// Used when a crew member sits behind a vehicle's armour.
    pub fn reinforced(&self, extra: i32) -> Self {
        let mut armour = *self;
        for location in BodyLocation::all() {
            let slot = armour.get_mut(*location);
            slot.protection = slot.protection.saturating_add(extra);
            slot.resistance = slot.resistance.saturating_add(extra);
        }
        armour
    }

    /// Lowest resistance over every location
    pub fn lowest_resistance(&self) -> i32 {
        BodyLocation::all()
            .iter()
            .map(|loc| self.get(*loc).resistance)
            .min()
            .unwrap_or(0)
    }

    /// Lowest resistance among locations not in cover, if any are exposed
    pub fn lowest_exposed_resistance(&self, cover: &Cover<BodyLocation>) -> Option<i32> {
        BodyLocation::all()
            .iter()
            .filter(|loc| !cover.contains(**loc))
            .map(|loc| self.get(*loc).resistance)
            .min()
    }
}

/// Vehicle armour per facing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleArmour {
    pub front: i32,
    pub side: i32,
    pub back: i32,
    pub top: i32,
    pub bottom: i32,
}

impl VehicleArmour {
    pub fn uniform(value: i32) -> Self {
        VehicleArmour {
            front: value,
            side: value,
            back: value,
            top: value,
            bottom: value,
        }
    }

    pub fn get(&self, facing: VehicleFacing) -> i32 {
        match facing {
            VehicleFacing::Front => self.front,
            VehicleFacing::Side => self.side,
            VehicleFacing::Back => self.back,
            VehicleFacing::Top => self.top,
            VehicleFacing::Bottom => self.bottom,
        }
    }
}

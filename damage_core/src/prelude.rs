//! Prelude module for convenient imports
//!
//! ```rust
//! use damage_core::prelude::*;
//! ```

// Attacks
pub use crate::attack::{AppliedHits, AttackRecord, DamageInstance, Hit, WeaponSpecialRules, WeaponTrait};

// Targets
pub use crate::defense::{Cover, PersonArmour, PersonDefense, Shields, VehicleArmour, VehicleDefense};

// Resolution
pub use crate::combat::{
    resolve_person_hits, resolve_person_hits_with_dice, resolve_vehicle_hits,
    resolve_vehicle_hits_with_dice, PersonContext, PersonResolution, VehicleContext,
    VehicleResolution,
};

// Dice and rules
pub use crate::config::RuleSet;
pub use crate::dice::{Dice, RngDice, ScriptedDice};
pub use crate::types::{BodyLocation, Breakpoint, VehicleFacing};

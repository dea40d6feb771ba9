//! damage_core - Damage resolution for a tabletop wargame
//!
//! This library provides:
//! - Attack input: hits, damage instances, weapon special rules and the
//!   adapter from recorded attacks
//! - Defense: armour per body location or vehicle facing, shields, cover
//! - Instance resolution: one damage instance against shields then armour
//! - Combat resolution: folding every hit of an attack over a person or a
//!   vehicle, including crew caught by damage through the hull
//! - Deltas and result lines for whatever applies and reports the damage
//! - Rule sets: the rule variants as TOML configuration

pub mod attack;
pub mod combat;
pub mod config;
pub mod damage;
pub mod defense;
pub mod dice;
pub mod prelude;
pub mod types;

// Re-export core types for convenience
pub use attack::{
    AppliedHits, AttackError, AttackRecord, DamageInstance, Hit, PersonHit, VehicleHit,
    WeaponSpecialRules, WeaponTrait,
};
pub use combat::{
    display_name, resolve_ordnance, resolve_person_hits, resolve_person_hits_with_dice,
    resolve_vehicle_hits, resolve_vehicle_hits_with_dice, CrewHit, Modifiers, OrdnanceOutcome,
    OrdnanceTarget, PersonContext, PersonDelta, PersonResolution, PersonState, VehicleContext,
    VehicleDelta, VehicleResolution, VehicleState,
};
pub use config::{ConfigError, RuleSet};
pub use damage::{resolve_person_instance, resolve_vehicle_instance};
pub use defense::{
    resolve_shield_layer, Breakpoints, Cover, Crew, CrewMember, CrewRole, LocationArmour,
    PersonArmour, PersonDefense, Shields, VehicleArmour, VehicleDefense,
};
pub use dice::{Dice, DiceError, DiceExpression, RngDice, ScriptedDice};
pub use types::{BodyLocation, Breakpoint, VehicleFacing};

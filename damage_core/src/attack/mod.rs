//! Attack input - hits, damage instances, weapon traits and the record adapter

mod hit;
mod record;
mod special_rules;

pub use hit::{AppliedHits, DamageInstance, Hit, PersonHit, VehicleHit};
pub use record::{AttackError, AttackRecord, RawDamageInstance, RawHit};
pub use special_rules::{WeaponSpecialRules, WeaponTrait};

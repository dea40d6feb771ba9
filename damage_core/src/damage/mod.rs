//! Instance resolution - one damage instance against one target

mod person;
mod vehicle;

pub use person::{resolve_person_instance, PersonInstanceDamage};
pub use vehicle::{resolve_vehicle_instance, VehicleInstanceDamage};

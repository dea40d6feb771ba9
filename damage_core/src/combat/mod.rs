//! Combat resolution - fold attacks over person and vehicle targets

mod context;
mod crew;
mod delta;
mod ordnance;
mod resolution;
mod result;
mod vehicle;

pub use context::{Modifiers, PersonContext, VehicleContext};
pub use delta::{PersonDelta, PersonState, VehicleDelta, VehicleState};
pub use ordnance::{resolve_ordnance, OrdnanceOutcome, OrdnanceTarget};
pub use resolution::{resolve_person_hits, resolve_person_hits_with_dice};
pub use result::{
    display_name, BreakpointDamage, CrewHit, PersonInstanceOutcome, PersonResolution,
    VehicleInstanceOutcome, VehicleResolution,
};
pub use vehicle::{resolve_vehicle_hits, resolve_vehicle_hits_with_dice};

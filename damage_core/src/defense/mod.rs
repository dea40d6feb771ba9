//! Defense system - Armour, Shields, Cover and target snapshots

mod armour;
mod cover;
mod shields;
mod target;

pub use armour::{LocationArmour, PersonArmour, VehicleArmour};
pub use cover::Cover;
pub use shields::{resolve_shield_layer, ShieldLayer, Shields};
pub use target::{Breakpoints, Crew, CrewMember, CrewRole, PersonDefense, VehicleDefense};

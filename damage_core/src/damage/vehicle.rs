//! Vehicle instance resolution - shields, then the armour of one facing

use crate::attack::{DamageInstance, WeaponSpecialRules};
use crate::defense::{resolve_shield_layer, Cover, VehicleArmour};
use crate::types::{Breakpoint, VehicleFacing};
use serde::{Deserialize, Serialize};

/// Damage one instance dealt to a vehicle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleInstanceDamage {
    pub shield_damage: i32,
    pub vehicle_damage: i32,
}

impl VehicleInstanceDamage {
    pub fn total(&self) -> i32 {
        self.shield_damage.saturating_add(self.vehicle_damage)
    }
}

/// Resolve one damage instance against a vehicle
///
/// The facing is fixed for the whole attack. The breakpoint on `instance`
/// is not looked at here; the caller redirects and applies the damage.
pub fn resolve_vehicle_instance(
    instance: &DamageInstance<Breakpoint>,
    armour: &VehicleArmour,
    facing: VehicleFacing,
    traits: &WeaponSpecialRules,
    cover: &Cover<VehicleFacing>,
    remaining_shields: i32,
) -> VehicleInstanceDamage {
    let in_cover = cover.contains(facing);
    let armour_value = armour.get(facing).saturating_add(cover.bonus_at(facing));

    let result = if remaining_shields > 0 {
        let layer = resolve_shield_layer(
            instance.damage,
            instance.pierce,
            traits,
            remaining_shields,
            in_cover,
            cover.points,
        );

        let mut armour_damage = layer.armour_damage;
        if traits.kinetic {
            armour_damage = armour_damage.saturating_add(instance.damage);
        }

        let vehicle_damage = if armour_damage > 0 {
            armour_damage.saturating_sub(armour_value).max(0)
        } else {
            0
        };

        VehicleInstanceDamage {
            shield_damage: layer.shield_damage,
            vehicle_damage,
        }
    } else {
        let effective = armour_value.saturating_sub(instance.pierce).max(0);
        VehicleInstanceDamage {
            shield_damage: 0,
            vehicle_damage: instance.damage.saturating_sub(effective).max(0),
        }
    };

    tracing::debug!(
        %facing,
        damage = instance.damage,
        pierce = instance.pierce,
        remaining_shields,
        shield_damage = result.shield_damage,
        vehicle_damage = result.vehicle_damage,
        "resolved vehicle instance"
    );

    result
}

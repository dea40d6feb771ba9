//! Person instance resolution - shields, then armour at a body location

use crate::attack::{DamageInstance, WeaponSpecialRules};
use crate::defense::{resolve_shield_layer, Cover, PersonArmour};
use crate::dice::Dice;
use crate::types::BodyLocation;
use serde::{Deserialize, Serialize};

/// Damage one instance dealt to a person
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonInstanceDamage {
    pub shield_damage: i32,
    pub wound_damage: i32,
}

impl PersonInstanceDamage {
    pub fn total(&self) -> i32 {
        self.shield_damage.saturating_add(self.wound_damage)
    }
}

/// Resistance the instance has to beat, or `None` when nothing can be hit
fn resistance_at(
    location: BodyLocation,
    armour: &PersonArmour,
    traits: &WeaponSpecialRules,
    cover: &Cover<BodyLocation>,
) -> Option<i32> {
    let at_location = armour.get(location);

    let mut resistance = if traits.headshot && location == BodyLocation::Head {
        Some(at_location.protection)
    } else {
        Some(at_location.resistance)
    };

    // Blast finds the weakest spot that isn't behind cover
    if traits.blast {
        resistance = armour.lowest_exposed_resistance(cover);
    }

    resistance.map(|r| r.saturating_add(cover.bonus_at(location)))
}

/// Resolve one damage instance against a person
///
/// `instance` already carries any extra pierce and damage multiplier.
/// `remaining_shields` is the shield pool left after earlier instances in
/// the same call. The Kinetic bonus die is the only roll taken from `dice`.
pub fn resolve_person_instance(
    instance: &DamageInstance<BodyLocation>,
    armour: &PersonArmour,
    traits: &WeaponSpecialRules,
    cover: &Cover<BodyLocation>,
    remaining_shields: i32,
    dice: &mut impl Dice,
) -> PersonInstanceDamage {
    let resistance = resistance_at(instance.location, armour, traits, cover);

    let result = if remaining_shields > 0 {
        let layer = resolve_shield_layer(
            instance.damage,
            instance.pierce,
            traits,
            remaining_shields,
            cover.contains(instance.location),
            cover.points,
        );

        let mut armour_damage = layer.armour_damage;
        if traits.kinetic {
            armour_damage = armour_damage.saturating_add(instance.damage);
        }

        // Pierce was spent on the shields
        let wound_damage = match resistance {
            Some(resistance) if armour_damage > 0 => armour_damage.saturating_sub(resistance).max(0),
            _ => 0,
        };

        PersonInstanceDamage {
            shield_damage: layer.shield_damage,
            wound_damage,
        }
    } else {
        let wound_damage = match resistance {
            Some(resistance) => {
                let effective = resistance.saturating_sub(instance.pierce).max(0);
                let mut damage = instance.damage;
                if traits.kinetic {
                    let bonus = i32::try_from(dice.roll(traits.kinetic_bonus_die)).unwrap_or(i32::MAX);
                    damage = damage.saturating_add(bonus);
                }
                damage.saturating_sub(effective).max(0)
            }
            None => 0,
        };

        PersonInstanceDamage {
            shield_damage: 0,
            wound_damage,
        }
    };

    tracing::debug!(
        location = %instance.location,
        damage = instance.damage,
        pierce = instance.pierce,
        remaining_shields,
        shield_damage = result.shield_damage,
        wound_damage = result.wound_damage,
        "resolved person instance"
    );

    result
}

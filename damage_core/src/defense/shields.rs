//! Energy shields - the layer every hit meets before armour

use crate::attack::WeaponSpecialRules;
use serde::{Deserialize, Serialize};

/// Shield pool of a target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shields {
    pub current: i32,
    /// Zero means the target has no shield generator
    pub max: i32,
}

impl Shields {
    pub fn new(current: i32, max: i32) -> Self {
        Shields { current, max }
    }

    pub fn full(max: i32) -> Self {
        Shields { current: max, max }
    }

    pub fn has_shields(&self) -> bool {
        self.max > 0
    }
}

/// How one damage instance splits between the shields and the armour behind them
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShieldLayer {
    /// Taken off the shield pool, never more than the shields had
    pub shield_damage: i32,
    /// Carried on to the armour; zero or less means nothing got through
    pub armour_damage: i32,
}

/// Split damage between energy shields and armour
///
/// Pierce only matters here through weapon traits: traits in the rule set's
/// pierce group add it to the damage, and Penetrating replaces that with a
/// multiple of pierce. Cover still soaks damage aimed at shields. Whatever
/// bonus pierce is left once the shields drop doesn't reach the armour.
pub fn resolve_shield_layer(
    damage: i32,
    pierce: i32,
    traits: &WeaponSpecialRules,
    shields: i32,
    in_cover: bool,
    cover_points: i32,
) -> ShieldLayer {
    let shields = shields.max(0);

    let mut pierce_against_shields: i32 = 0;
    if traits.adds_pierce_against_shields {
        pierce_against_shields = pierce_against_shields.saturating_add(pierce);
    }
    if let Some(multiplier) = traits.penetrating_multiplier {
        pierce_against_shields = pierce.saturating_mul(multiplier);
    }

    let mut total = damage.saturating_add(pierce_against_shields);
    if in_cover {
        total = total.saturating_sub(cover_points);
    }
    let total = total.max(0);

    if shields > total {
        return ShieldLayer {
            shield_damage: total,
            armour_damage: 0,
        };
    }

    let mut armour_damage = total - shields;

    // Bonus pierce hits the shields first, so only what exceeded them is lost
    if traits.adds_pierce_against_shields {
        let remaining_pierce = pierce_against_shields - shields;
        if remaining_pierce > 0 {
            armour_damage -= remaining_pierce;
        }
    }

    ShieldLayer {
        shield_damage: shields,
        armour_damage,
    }
}

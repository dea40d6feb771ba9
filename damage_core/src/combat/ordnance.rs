//! Ordnance - one damage roll applied to a whole group of people
//!
//! A simpler rule than a full attack: no locations, no weapon traits. Each
//! target's shields soak the hit first, then pierce and the target's weakest
//! armour decide what becomes wounds.

use super::delta::{PersonDelta, PersonState};
use crate::defense::PersonDefense;
use serde::{Deserialize, Serialize};

/// A person caught in the blast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdnanceTarget {
    pub name: String,
    pub defense: PersonDefense,
}

impl OrdnanceTarget {
    pub fn new(name: impl Into<String>, defense: PersonDefense) -> Self {
        OrdnanceTarget {
            name: name.into(),
            defense,
        }
    }
}

/// What the ordnance did to one target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdnanceOutcome {
    /// 1-based position in the target list
    pub index: usize,
    pub name: String,
    pub shield_damage: i32,
    pub wound_damage: i32,
    pub before: PersonState,
    pub after: PersonState,
}

impl OrdnanceOutcome {
    pub fn is_dead(&self) -> bool {
        self.after.wounds <= 0
    }

    pub fn delta(&self) -> PersonDelta {
        PersonDelta::new(self.shield_damage, self.wound_damage)
    }

    /// One result line, e.g. `[2] Grunt took 6 wound damage.`
    pub fn report(&self) -> String {
        if self.is_dead() {
            format!("[{}] {} is dead.", self.index, self.name)
        } else if self.shield_damage > 0 {
            format!(
                "[{}] {} took {} shield damage and {} wound damage.",
                self.index, self.name, self.shield_damage, self.wound_damage
            )
        } else {
            format!("[{}] {} took {} wound damage.", self.index, self.name, self.wound_damage)
        }
    }
}

fn ordnance_damage(defense: &PersonDefense, damage: i32, pierce: i32) -> (i32, i32) {
    let shields = defense.shields.current;
    let mut remaining = damage;
    let mut shield_damage = 0;

    if shields > 0 {
        if shields >= remaining {
            shield_damage = remaining;
            remaining = 0;
        } else {
            shield_damage = shields;
            remaining -= shields;
        }
    }

    let mut wound_damage = 0;
    if remaining > 0 {
        wound_damage = remaining
            .saturating_add(pierce)
            .saturating_sub(defense.armour.lowest_resistance())
            .max(0);
    }

    (shield_damage, wound_damage)
}

/// Apply one ordnance damage roll to every target
///
/// `damage` is multiplied by `multiplier` before anything else.
pub fn resolve_ordnance(
    targets: &[OrdnanceTarget],
    damage: i32,
    pierce: i32,
    multiplier: i32,
) -> Vec<OrdnanceOutcome> {
    let damage = damage.saturating_mul(multiplier).max(0);
    let pierce = pierce.max(0);

    targets
        .iter()
        .enumerate()
        .map(|(idx, target)| {
            let (shield_damage, wound_damage) = ordnance_damage(&target.defense, damage, pierce);
            let before = PersonState::of(&target.defense);
            let after = PersonDelta::new(shield_damage, wound_damage).apply(&before);

            tracing::debug!(
                target = %target.name,
                shield_damage,
                wound_damage,
                "ordnance resolved"
            );

            OrdnanceOutcome {
                index: idx + 1,
                name: target.name.clone(),
                shield_damage,
                wound_damage,
                before,
                after,
            }
        })
        .collect()
}

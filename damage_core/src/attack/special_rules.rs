//! Weapon special rules and how they resolve against a rule set

use crate::config::RuleSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named weapon trait that changes damage resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponTrait {
    /// Head hits ignore the toughness part of resistance
    Headshot,
    /// Punches through shields to armour; bonus die against unshielded targets
    Kinetic,
    /// Multiplied pierce against shields
    Penetrating,
    /// Always finds the weakest location that isn't in cover
    Blast,
    Kill,
    Spread,
    Cauterize,
    Carpet,
}

impl WeaponTrait {
    pub fn all() -> &'static [WeaponTrait] {
        &[
            WeaponTrait::Headshot,
            WeaponTrait::Kinetic,
            WeaponTrait::Penetrating,
            WeaponTrait::Blast,
            WeaponTrait::Kill,
            WeaponTrait::Spread,
            WeaponTrait::Cauterize,
            WeaponTrait::Carpet,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            WeaponTrait::Headshot => "Headshot",
            WeaponTrait::Kinetic => "Kinetic",
            WeaponTrait::Penetrating => "Penetrating",
            WeaponTrait::Blast => "Blast",
            WeaponTrait::Kill => "Kill",
            WeaponTrait::Spread => "Spread",
            WeaponTrait::Cauterize => "Cauterize",
            WeaponTrait::Carpet => "Carpet",
        }
    }

    /// Parse trait names, skipping any this engine doesn't model
    pub fn parse_list<S: AsRef<str>>(names: &[S]) -> Vec<WeaponTrait> {
        let mut traits = Vec::new();
        for name in names {
            match name.as_ref().parse::<WeaponTrait>() {
                Ok(t) if !traits.contains(&t) => traits.push(t),
                Ok(_) => {}
                Err(()) => tracing::debug!(rule = name.as_ref(), "ignoring special rule"),
            }
        }
        traits
    }
}

impl fmt::Display for WeaponTrait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WeaponTrait {
    type Err = ();

    /// Accepts rated names like `Blast (3)`; the rating is dropped
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bare = match s.find('(') {
            Some(idx) => &s[..idx],
            None => s,
        }
        .trim();

        WeaponTrait::all()
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(bare))
            .ok_or(())
    }
}

/// Weapon traits resolved against a rule set, fixed for one resolution call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponSpecialRules {
    /// Pierce is added to damage against shields
    pub adds_pierce_against_shields: bool,
    pub headshot: bool,
    pub kinetic: bool,
    /// Sides of the Kinetic bonus die
    pub kinetic_bonus_die: u32,
    pub blast: bool,
    /// Pierce multiplier against shields, set when Penetrating applies
    pub penetrating_multiplier: Option<i32>,
}

impl Default for WeaponSpecialRules {
    fn default() -> Self {
        WeaponSpecialRules {
            adds_pierce_against_shields: false,
            headshot: false,
            kinetic: false,
            kinetic_bonus_die: 10,
            blast: false,
            penetrating_multiplier: None,
        }
    }
}

impl WeaponSpecialRules {
    /// A weapon with no special rules
    pub fn none() -> Self {
        Self::default()
    }

    /// Resolve a weapon's trait list under `rules`
    pub fn resolve(traits: &[WeaponTrait], rules: &RuleSet) -> Self {
        let has = |t: WeaponTrait| traits.contains(&t);

        let penetrating_multiplier = if has(WeaponTrait::Penetrating) {
            let boosted = rules
                .shields
                .penetrating_boost_traits
                .iter()
                .any(|t| has(*t));
            Some(if boosted {
                rules.shields.penetrating_boosted_multiplier
            } else {
                rules.shields.penetrating_multiplier
            })
        } else {
            None
        };

        WeaponSpecialRules {
            adds_pierce_against_shields: rules.shields.pierce_traits.iter().any(|t| has(*t)),
            headshot: has(WeaponTrait::Headshot) && rules.person.headshot_uses_protection,
            kinetic: has(WeaponTrait::Kinetic),
            kinetic_bonus_die: rules.person.kinetic_bonus_die,
            blast: has(WeaponTrait::Blast),
            penetrating_multiplier,
        }
    }
}

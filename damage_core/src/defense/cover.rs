//! Cover - bonus resistance at covered locations

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Cover points and the locations they protect
///
/// `L` is a body location for people and a facing for vehicles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "L: Deserialize<'de> + Ord"))]
pub struct Cover<L: Ord> {
    #[serde(default)]
    pub points: i32,
    #[serde(default)]
    pub locations: BTreeSet<L>,
}

impl<L: Ord> Default for Cover<L> {
    fn default() -> Self {
        Cover {
            points: 0,
            locations: BTreeSet::new(),
        }
    }
}

impl<L: Ord> Cover<L> {
    pub fn new(points: i32, locations: impl IntoIterator<Item = L>) -> Self {
        Cover {
            points,
            locations: locations.into_iter().collect(),
        }
    }

    /// No cover anywhere
    pub fn none() -> Self {
        Self::default()
    }

    pub fn contains(&self, location: L) -> bool {
        self.locations.contains(&location)
    }

    /// Points added to resistance at `location`
    pub fn bonus_at(&self, location: L) -> i32 {
        if self.contains(location) {
            self.points
        } else {
            0
        }
    }
}

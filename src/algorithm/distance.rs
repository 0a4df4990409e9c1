use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

use crate::graph::Weight;

/// Best known distance to a vertex.
///
/// `Infinite` orders after every finite value, so it compares correctly against
/// any candidate without a magic number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Option<u64>", into = "Option<u64>")]
pub enum Distance {
    Finite(u64),
    Infinite,
}

impl Distance {
    pub const ZERO: Distance = Distance::Finite(0);

    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// The finite value, if any
    pub fn value(&self) -> Option<u64> {
        match self {
            Distance::Finite(value) => Some(*value),
            Distance::Infinite => None,
        }
    }
}

impl Default for Distance {
    fn default() -> Self {
        Distance::Infinite
    }
}

impl Add<Weight> for Distance {
    type Output = Distance;

    fn add(self, weight: Weight) -> Distance {
        match self {
            Distance::Finite(value) => value
                .checked_add(u64::from(weight))
                .map_or(Distance::Infinite, Distance::Finite),
            Distance::Infinite => Distance::Infinite,
        }
    }
}

impl From<Option<u64>> for Distance {
    fn from(value: Option<u64>) -> Self {
        value.map_or(Distance::Infinite, Distance::Finite)
    }
}

impl From<Distance> for Option<u64> {
    fn from(distance: Distance) -> Self {
        distance.value()
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(value) => write!(f, "{}", value),
            Distance::Infinite => f.write_str("∞"),
        }
    }
}

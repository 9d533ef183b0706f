use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identity of a discovered distribution.
///
/// Assigned once, in discovery order, and never reused within a loaded archive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DistributionId(pub u32);

impl DistributionId {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for DistributionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for DistributionId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(DistributionId)
    }
}

//! Start zones of a straight section

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::LayoutError;
use crate::geometry::{CanonicalRect, Intersection};

/// Rectangle between two diagonal intersections where the vehicle may start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StartZone {
    Z1,
    Z2,
    Z3,
    Z4,
    Z5,
    Z6,
}

impl StartZone {
    pub const ALL: [StartZone; 6] = [
        StartZone::Z1,
        StartZone::Z2,
        StartZone::Z3,
        StartZone::Z4,
        StartZone::Z5,
        StartZone::Z6,
    ];

    /// Zones left in a section whose inner wall was pulled onto the second arc
    pub const BEHIND_PULLED_WALL: [StartZone; 4] =
        [StartZone::Z6, StartZone::Z5, StartZone::Z4, StartZone::Z3];

    /// Zones the vehicle may start from in the obstacle round
    pub const OBSTACLE_ROUND: [StartZone; 2] = [StartZone::Z3, StartZone::Z4];

    /// The two diagonal corners of the zone
    pub const fn corners(&self) -> (Intersection, Intersection) {
        match self {
            StartZone::Z1 => (Intersection::X1, Intersection::BottomRight),
            StartZone::Z2 => (Intersection::T2, Intersection::BottomMiddle),
            StartZone::Z3 => (Intersection::X2, Intersection::T1),
            StartZone::Z4 => (Intersection::T4, Intersection::X1),
            StartZone::Z5 => (Intersection::TopMiddle, Intersection::T3),
            StartZone::Z6 => (Intersection::TopLeft, Intersection::X2),
        }
    }

    pub fn rect(&self) -> CanonicalRect {
        let (a, b) = self.corners();
        CanonicalRect::between(a, b)
    }

    pub fn name(&self) -> &'static str {
        match self {
            StartZone::Z1 => "Z1",
            StartZone::Z2 => "Z2",
            StartZone::Z3 => "Z3",
            StartZone::Z4 => "Z4",
            StartZone::Z5 => "Z5",
            StartZone::Z6 => "Z6",
        }
    }
}

impl fmt::Display for StartZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StartZone {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        StartZone::ALL
            .into_iter()
            .find(|z| z.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| LayoutError::UnknownStartZone(wanted.to_string()))
    }
}

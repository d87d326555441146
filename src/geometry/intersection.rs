//! Named points where arcs, radii and section borders cross
//!
//! ```text
//! TopLeft---TopMiddle---TopRight       outer wall
//!    |    Z6    |    Z5    |
//!   T4---------X2---------T3           first arc
//!    |    Z4    |    Z3    |
//!   T2---------X1---------T1           second arc
//!    |    Z2    |    Z1    |
//! BottomLeft-BottomMiddle-BottomRight  inner border
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::LayoutError;
use crate::geometry::{
    FIRST_LINE, INNER_BORDER, LEFT_POSITION, MIDDLE_POSITION, RIGHT_POSITION, SECOND_LINE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Intersection {
    TopLeft,
    TopMiddle,
    TopRight,
    T4,
    X2,
    T3,
    T2,
    X1,
    T1,
    BottomLeft,
    BottomMiddle,
    BottomRight,
}

impl Intersection {
    pub const ALL: [Intersection; 12] = [
        Intersection::TopLeft,
        Intersection::TopMiddle,
        Intersection::TopRight,
        Intersection::T4,
        Intersection::X2,
        Intersection::T3,
        Intersection::T2,
        Intersection::X1,
        Intersection::T1,
        Intersection::BottomLeft,
        Intersection::BottomMiddle,
        Intersection::BottomRight,
    ];

    /// Canonical `(h, w)` coordinates
    pub const fn position(&self) -> (i32, i32) {
        use Intersection::*;
        match self {
            TopLeft => (0, LEFT_POSITION),
            TopMiddle => (0, MIDDLE_POSITION),
            TopRight => (0, RIGHT_POSITION),
            T4 => (FIRST_LINE, LEFT_POSITION),
            X2 => (FIRST_LINE, MIDDLE_POSITION),
            T3 => (FIRST_LINE, RIGHT_POSITION),
            T2 => (SECOND_LINE, LEFT_POSITION),
            X1 => (SECOND_LINE, MIDDLE_POSITION),
            T1 => (SECOND_LINE, RIGHT_POSITION),
            BottomLeft => (INNER_BORDER, LEFT_POSITION),
            BottomMiddle => (INNER_BORDER, MIDDLE_POSITION),
            BottomRight => (INNER_BORDER, RIGHT_POSITION),
        }
    }

    pub const fn h(&self) -> i32 {
        self.position().0
    }

    pub const fn w(&self) -> i32 {
        self.position().1
    }

    pub fn name(&self) -> &'static str {
        use Intersection::*;
        match self {
            TopLeft => "TopLeft",
            TopMiddle => "TopMiddle",
            TopRight => "TopRight",
            T4 => "T4",
            X2 => "X2",
            T3 => "T3",
            T2 => "T2",
            X1 => "X1",
            T1 => "T1",
            BottomLeft => "BottomLeft",
            BottomMiddle => "BottomMiddle",
            BottomRight => "BottomRight",
        }
    }
}

impl fmt::Display for Intersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Intersection {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Intersection::ALL
            .into_iter()
            .find(|i| i.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| LayoutError::UnknownIntersection(wanted.to_string()))
    }
}

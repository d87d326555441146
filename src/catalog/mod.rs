//! Obstacle catalog
//!
//! The obstacle round is randomized over a fixed list of obstacle sets, one
//! per printed card of the rules. The list keeps the rules' duplicates
//! (21/23, 22/24, 27/29, 28/30) since they raise the odds of those cards.

pub mod obstacle;
pub mod rules;
pub mod start_zone;

use std::sync::OnceLock;

pub use obstacle::{Obstacle, ObstacleSet};
pub use rules::{blocks_parking, forbidden_ahead, PARKING_FORBIDDEN};
pub use start_zone::StartZone;

use crate::core::error::{LayoutError, Result};
use crate::core::types::Color;
use crate::geometry::Intersection;

use Color::{Green, Red};
use Intersection::{T1, T2, T3, T4, X1, X2};

/// Standard card list, indexed 0..=31
const STANDARD_SETS: [&[(Intersection, Color)]; 32] = [
    // Single sign on T1
    &[(T1, Green)], // 0
    &[(T1, Red)],   // 1
    // Single sign on X1
    &[(X1, Green)], // 2
    &[(X1, Red)],   // 3
    // Single sign on T2
    &[(T2, Green)], // 4
    &[(T2, Red)],   // 5
    // Single sign on T3
    &[(T3, Green)], // 6
    &[(T3, Red)],   // 7
    // Single sign on X2
    &[(X2, Green)], // 8
    &[(X2, Red)],   // 9
    // Single sign on T4
    &[(T4, Green)], // 10
    &[(T4, Red)],   // 11
    // T3 + T2
    &[(T3, Green), (T2, Green)], // 12
    &[(T3, Green), (T2, Red)],   // 13
    &[(T3, Red), (T2, Green)],   // 14
    &[(T3, Red), (T2, Red)],     // 15
    // T1 + T4
    &[(T1, Green), (T4, Green)], // 16
    &[(T1, Green), (T4, Red)],   // 17
    &[(T1, Red), (T4, Green)],   // 18
    &[(T1, Red), (T4, Red)],     // 19
    // T1 + T2
    &[(T1, Green), (T2, Green)], // 20
    &[(T1, Green), (T2, Red)],   // 21
    &[(T1, Red), (T2, Green)],   // 22
    &[(T1, Green), (T2, Red)],   // 23
    &[(T1, Red), (T2, Green)],   // 24
    &[(T1, Red), (T2, Red)],     // 25
    // T3 + T4
    &[(T3, Green), (T4, Green)], // 26
    &[(T3, Green), (T4, Red)],   // 27
    &[(T3, Red), (T4, Green)],   // 28
    &[(T3, Green), (T4, Red)],   // 29
    &[(T3, Red), (T4, Green)],   // 30
    &[(T3, Red), (T4, Red)],     // 31
];

/// Single green sign on X2
pub const MANDATORY_GREEN: usize = 8;

/// Single red sign on X2
pub const MANDATORY_RED: usize = 9;

/// One of these sets is placed in every obstacle round
pub const REQUIRED_SETS: [usize; 4] = [21, 22, 27, 28];

/// Read-only list of obstacle sets with its mandatory and required subsets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObstacleCatalog {
    sets: Vec<ObstacleSet>,
    mandatory_green: usize,
    mandatory_red: usize,
    required: Vec<usize>,
}

impl ObstacleCatalog {
    /// Build a catalog, checking that a draw of four distinct sets is possible
    ///
    /// Colors are not checked here; a sign without a usable color is reported
    /// when a draw containing it is evaluated.
    pub fn new(
        sets: Vec<ObstacleSet>,
        mandatory_green: usize,
        mandatory_red: usize,
        required: Vec<usize>,
    ) -> Result<Self> {
        if sets.len() < 4 {
            return Err(LayoutError::InvalidCatalog(format!(
                "{} obstacle sets cannot fill four sections",
                sets.len()
            )));
        }

        if let Some((index, set)) = sets
            .iter()
            .enumerate()
            .find(|(_, set)| set.is_empty() || set.len() > 2)
        {
            return Err(LayoutError::InvalidCatalog(format!(
                "obstacle set {} holds {} signs, expected 1 or 2",
                index,
                set.len()
            )));
        }

        let out_of_range = [mandatory_green, mandatory_red]
            .iter()
            .chain(required.iter())
            .copied()
            .find(|&index| index >= sets.len());
        if let Some(index) = out_of_range {
            return Err(LayoutError::UnknownObstacleSet(index));
        }

        if mandatory_green == mandatory_red {
            return Err(LayoutError::InvalidCatalog(
                "green and red mandatory sets must differ".into(),
            ));
        }

        if required.is_empty() {
            return Err(LayoutError::InvalidCatalog("required pool is empty".into()));
        }

        if required.contains(&mandatory_green) || required.contains(&mandatory_red) {
            return Err(LayoutError::InvalidCatalog(
                "required pool overlaps the mandatory sets".into(),
            ));
        }

        Ok(Self {
            sets,
            mandatory_green,
            mandatory_red,
            required,
        })
    }

    /// The catalog used by the competition
    pub fn standard() -> Self {
        Self {
            sets: STANDARD_SETS.iter().map(|&signs| ObstacleSet::from(signs)).collect(),
            mandatory_green: MANDATORY_GREEN,
            mandatory_red: MANDATORY_RED,
            required: REQUIRED_SETS.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&ObstacleSet> {
        self.sets.get(index).ok_or(LayoutError::UnknownObstacleSet(index))
    }

    /// Index of the mandatory set for `color`
    pub fn mandatory(&self, color: Color) -> Result<usize> {
        match color {
            Color::Green => Ok(self.mandatory_green),
            Color::Red => Ok(self.mandatory_red),
            Color::Undefined => Err(LayoutError::NoMandatorySet(color)),
        }
    }

    pub fn required(&self) -> &[usize] {
        &self.required
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &ObstacleSet)> {
        self.sets.iter().enumerate()
    }
}

static CATALOG: OnceLock<ObstacleCatalog> = OnceLock::new();

/// The process-wide standard catalog
pub fn catalog() -> &'static ObstacleCatalog {
    CATALOG.get_or_init(ObstacleCatalog::standard)
}

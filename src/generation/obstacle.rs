//! Obstacle round: rejection sampling over the obstacle catalog
//!
//! Four sets are drawn per attempt: a mandatory X2 set, one set from the
//! required pool and two free sets. A draw is kept only if it satisfies every
//! placement rule; otherwise it is thrown away as a whole and drawn again.
//! The rules are never relaxed, so there is no attempt limit.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::{blocks_parking, catalog, forbidden_ahead, ObstacleCatalog, StartZone};
use crate::core::error::{LayoutError, Result};
use crate::core::types::{Color, Direction, RoundKind, Section};
use crate::generation::scheme::{InnerWallConfig, LayoutScheme, Placement};

/// Number of straight sections, and so of sets per draw
const SETS_PER_DRAW: usize = 4;

/// A layout needs strictly more signs than this
const MIN_OBSTACLES_EXCLUSIVE: usize = 4;

/// Largest allowed difference between green and red signs
const MAX_COLOR_IMBALANCE: usize = 1;

/// How one drawn set constrains the section it ends up in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetAssessment {
    pub index: usize,
    /// Obstacle-round start zones with a sign right ahead of the vehicle
    pub forbidden_zones: Vec<StartZone>,
    /// Set holds a sign where the parking lot must stay free
    pub blocks_parking: bool,
}

impl SetAssessment {
    /// Start zones the vehicle may still use in this set's section
    pub fn usable_zones(&self) -> Vec<StartZone> {
        StartZone::OBSTACLE_ROUND
            .into_iter()
            .filter(|zone| !self.forbidden_zones.contains(zone))
            .collect()
    }

    pub fn can_host_start(&self) -> bool {
        !self.usable_zones().is_empty()
    }

    pub fn can_host_parking(&self) -> bool {
        !self.blocks_parking
    }
}

/// Counts and per-set constraints of one candidate draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawTally {
    pub sets: Vec<SetAssessment>,
    pub total: usize,
    pub green: usize,
    pub red: usize,
}

/// Why a draw was thrown away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    ColorImbalance { green: usize, red: usize },
    TooFewObstacles(usize),
    NoStartZone,
    NoParkingSection,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::ColorImbalance { green, red } => {
                write!(f, "{} green vs {} red signs", green, red)
            }
            Rejection::TooFewObstacles(total) => write!(f, "only {} signs", total),
            Rejection::NoStartZone => f.write_str("no section left for the start zone"),
            Rejection::NoParkingSection => f.write_str("no section left for the parking lot"),
        }
    }
}

impl DrawTally {
    pub fn indices(&self) -> Vec<usize> {
        self.sets.iter().map(|s| s.index).collect()
    }

    /// First violated rule, or None if the draw is acceptable
    pub fn rejection(&self) -> Option<Rejection> {
        if self.green.abs_diff(self.red) > MAX_COLOR_IMBALANCE {
            return Some(Rejection::ColorImbalance {
                green: self.green,
                red: self.red,
            });
        }
        if self.total <= MIN_OBSTACLES_EXCLUSIVE {
            return Some(Rejection::TooFewObstacles(self.total));
        }
        if !self.sets.iter().any(SetAssessment::can_host_start) {
            return Some(Rejection::NoStartZone);
        }
        if !self.sets.iter().any(SetAssessment::can_host_parking) {
            return Some(Rejection::NoParkingSection);
        }
        None
    }

    pub fn is_accepted(&self) -> bool {
        self.rejection().is_none()
    }
}

/// Tally the signs of the chosen sets and their start/parking constraints
///
/// Fails if a chosen index is outside the catalog or a sign is neither green
/// nor red; both mean the catalog itself is broken.
pub fn evaluate_draw(
    catalog: &ObstacleCatalog,
    direction: Direction,
    chosen: &[usize],
) -> Result<DrawTally> {
    let mut tally = DrawTally {
        sets: Vec::with_capacity(chosen.len()),
        total: 0,
        green: 0,
        red: 0,
    };

    for &index in chosen {
        let set = catalog.get(index)?;
        tally.total += set.len();

        for obstacle in set.iter() {
            match obstacle.color() {
                Color::Green => tally.green += 1,
                Color::Red => tally.red += 1,
                color @ Color::Undefined => {
                    return Err(LayoutError::InvalidObstacleColor { set: index, color });
                }
            }
        }

        let forbidden_zones = StartZone::OBSTACLE_ROUND
            .into_iter()
            .filter(|&zone| {
                forbidden_ahead(direction, zone)
                    .iter()
                    .any(|&intersection| set.occupies(intersection))
            })
            .collect();

        tally.sets.push(SetAssessment {
            index,
            forbidden_zones,
            blocks_parking: set.iter().any(|o| blocks_parking(o.position())),
        });
    }

    Ok(tally)
}

/// An accepted draw and how many attempts it took
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObstacleSolution {
    pub tally: DrawTally,
    pub attempts: u32,
}

/// Draw four distinct catalog indices: mandatory, required and two free ones
pub fn draw_candidates(
    rng: &mut impl Rng,
    catalog: &ObstacleCatalog,
) -> Result<[usize; SETS_PER_DRAW]> {
    let mandatory = catalog.mandatory(Color::random_defined(rng))?;

    let pool = catalog.required();
    let required = pool[rng.gen_range(0..pool.len())];

    let mut first = mandatory;
    while first == mandatory || first == required {
        first = rng.gen_range(0..catalog.len());
    }

    let mut second = mandatory;
    while second == mandatory || second == required || second == first {
        second = rng.gen_range(0..catalog.len());
    }

    Ok([mandatory, required, first, second])
}

/// Keep drawing until a draw satisfies every rule
pub fn solve_obstacles(
    rng: &mut impl Rng,
    direction: Direction,
    catalog: &ObstacleCatalog,
) -> Result<ObstacleSolution> {
    let mut attempts = 0u32;
    loop {
        attempts = attempts.saturating_add(1);
        let chosen = draw_candidates(rng, catalog)?;
        let tally = evaluate_draw(catalog, direction, &chosen)?;

        match tally.rejection() {
            None => {
                tracing::debug!(attempts, sets = ?chosen, "accepted obstacle draw");
                return Ok(ObstacleSolution { tally, attempts });
            }
            Some(reason) => {
                tracing::debug!(attempt = attempts, sets = ?chosen, %reason, "rejected obstacle draw");
            }
        }
    }
}

/// Generate an obstacle round from the standard catalog
pub fn generate_obstacle(rng: &mut impl Rng, direction: Direction) -> Result<LayoutScheme> {
    generate_obstacle_with(rng, direction, catalog())
}

/// Generate an obstacle round from `catalog`
///
/// Sections are shuffled and handed out one per drawn set. The start section
/// is the section of a set that leaves a usable start zone, the parking
/// section that of a set that keeps the parking intersections free.
pub fn generate_obstacle_with(
    rng: &mut impl Rng,
    direction: Direction,
    catalog: &ObstacleCatalog,
) -> Result<LayoutScheme> {
    let solution = solve_obstacles(rng, direction, catalog)?;
    let sets = &solution.tally.sets;

    let mut sections = Section::ALL;
    sections.shuffle(rng);
    let obstacles: Vec<Placement> = sets
        .iter()
        .zip(sections)
        .map(|(set, section)| Placement {
            set: set.index,
            section,
        })
        .collect();

    let start_candidates: Vec<usize> =
        (0..sets.len()).filter(|&i| sets[i].can_host_start()).collect();
    let parking_candidates: Vec<usize> =
        (0..sets.len()).filter(|&i| sets[i].can_host_parking()).collect();

    // Both lists are non-empty for an accepted draw
    let start_slot = start_candidates[rng.gen_range(0..start_candidates.len())];
    let parking_slot = parking_candidates[rng.gen_range(0..parking_candidates.len())];

    let zones = sets[start_slot].usable_zones();
    let start_zone = zones[rng.gen_range(0..zones.len())];

    let start_section = obstacles[start_slot].section;
    let parking_section = obstacles[parking_slot].section;

    let scheme = LayoutScheme {
        round: RoundKind::Obstacle,
        direction,
        start_section,
        start_zone,
        inner_walls: InnerWallConfig::default(),
        obstacles,
        parking_section: Some(parking_section),
    };

    tracing::info!(
        attempts = solution.attempts,
        start_section = %scheme.start_section,
        start_zone = %scheme.start_zone,
        "generated obstacle layout"
    );

    Ok(scheme)
}

//! Placement rules that depend only on intersections

use crate::catalog::StartZone;
use crate::core::types::Direction;
use crate::geometry::Intersection;

/// Intersections that must stay free in the section holding the parking lot
pub const PARKING_FORBIDDEN: [Intersection; 3] =
    [Intersection::T3, Intersection::T4, Intersection::X2];

/// Intersections directly ahead of a vehicle starting in `zone`
///
/// Only Z3 and Z4 are used in the obstacle round; every other zone has
/// nothing listed.
pub fn forbidden_ahead(direction: Direction, zone: StartZone) -> &'static [Intersection] {
    match (direction, zone) {
        (Direction::Clockwise, StartZone::Z3) => &[Intersection::T1, Intersection::T3],
        (Direction::Clockwise, StartZone::Z4) => &[Intersection::X1, Intersection::X2],
        (Direction::CounterClockwise, StartZone::Z3) => &[Intersection::X1, Intersection::X2],
        (Direction::CounterClockwise, StartZone::Z4) => &[Intersection::T2, Intersection::T4],
        _ => &[],
    }
}

/// True if a sign on `intersection` blocks the parking lot
pub fn blocks_parking(intersection: Intersection) -> bool {
    PARKING_FORBIDDEN.contains(&intersection)
}

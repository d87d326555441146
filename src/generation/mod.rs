//! Layout generation for both rounds

pub mod obstacle;
pub mod open;
pub mod scheme;

pub use obstacle::{
    draw_candidates, evaluate_draw, generate_obstacle, generate_obstacle_with, solve_obstacles,
    DrawTally, ObstacleSolution, Rejection, SetAssessment,
};
pub use open::{generate_open, generate_open_fixed_center};
pub use scheme::{InnerWallConfig, LayoutScheme, Placement};

use rand::Rng;

use crate::core::error::Result;
use crate::core::types::{Direction, RoundKind};

/// Generate a layout for `round` using the standard catalog
pub fn generate(round: RoundKind, direction: Direction, rng: &mut impl Rng) -> Result<LayoutScheme> {
    match round {
        RoundKind::Open => Ok(generate_open(rng, direction)),
        RoundKind::OpenFixedCenter => Ok(generate_open_fixed_center(rng, direction)),
        RoundKind::Obstacle => generate_obstacle(rng, direction),
    }
}

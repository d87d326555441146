//! Open round: inner walls and start position

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::StartZone;
use crate::core::types::{Direction, RoundKind, Section};
use crate::generation::scheme::{InnerWallConfig, LayoutScheme};

/// Randomize inner walls, start section and start zone
///
/// A start section whose wall was pulled inward loses Z1 and Z2, which now
/// lie behind the wall.
pub fn generate_open(rng: &mut impl Rng, direction: Direction) -> LayoutScheme {
    let inner_walls = draw_inner_walls(rng);
    let start_section = draw_section(rng);

    let allowed: &[StartZone] = if inner_walls.is_pulled(start_section) {
        &StartZone::BEHIND_PULLED_WALL
    } else {
        &StartZone::ALL
    };
    let start_zone = allowed[rng.gen_range(0..allowed.len())];

    tracing::debug!(
        %start_section,
        %start_zone,
        pulled = ?inner_walls.pulled_sides(),
        "generated open layout"
    );

    LayoutScheme {
        round: RoundKind::Open,
        direction,
        start_section,
        start_zone,
        inner_walls,
        obstacles: Vec::new(),
        parking_section: None,
    }
}

/// Open round with every inner wall kept on the inner border
///
/// The wall draw still happens so that both open variants consume the random
/// source identically, but its outcome is discarded.
pub fn generate_open_fixed_center(rng: &mut impl Rng, direction: Direction) -> LayoutScheme {
    let _discarded = draw_inner_walls(rng);
    let start_section = draw_section(rng);
    let start_zone = StartZone::ALL[rng.gen_range(0..StartZone::ALL.len())];

    tracing::debug!(%start_section, %start_zone, "generated fixed-center open layout");

    LayoutScheme {
        round: RoundKind::OpenFixedCenter,
        direction,
        start_section,
        start_zone,
        inner_walls: InnerWallConfig::default(),
        obstacles: Vec::new(),
        parking_section: None,
    }
}

/// Pick how many walls to pull (0..=4) and then which ones
fn draw_inner_walls(rng: &mut impl Rng) -> InnerWallConfig {
    let count = rng.gen_range(0..=Section::ALL.len());
    let sides: Vec<Section> = Section::ALL.choose_multiple(rng, count).copied().collect();
    InnerWallConfig::from_sides(&sides)
}

fn draw_section(rng: &mut impl Rng) -> Section {
    Section::ALL[rng.gen_range(0..Section::ALL.len())]
}

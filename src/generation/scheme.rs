//! Generated field layouts

use serde::{Deserialize, Serialize};

use crate::catalog::StartZone;
use crate::core::types::{Direction, RoundKind, Section};

/// Which inner walls were pulled from the inner border onto the second arc
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InnerWallConfig {
    pub north: bool,
    pub west: bool,
    pub south: bool,
    pub east: bool,
}

impl InnerWallConfig {
    /// Walls pulled inward on exactly the given sides
    pub fn from_sides(sides: &[Section]) -> Self {
        let mut config = Self::default();
        for &side in sides {
            config.set_pulled(side, true);
        }
        config
    }

    pub fn is_pulled(&self, side: Section) -> bool {
        match side {
            Section::North => self.north,
            Section::West => self.west,
            Section::South => self.south,
            Section::East => self.east,
        }
    }

    pub fn set_pulled(&mut self, side: Section, pulled: bool) {
        match side {
            Section::North => self.north = pulled,
            Section::West => self.west = pulled,
            Section::South => self.south = pulled,
            Section::East => self.east = pulled,
        }
    }

    pub fn pulled_sides(&self) -> Vec<Section> {
        Section::ALL.into_iter().filter(|&s| self.is_pulled(s)).collect()
    }

    /// True if every wall stays on the inner border
    pub fn is_fixed_center(&self) -> bool {
        !(self.north || self.west || self.south || self.east)
    }
}

/// An obstacle set from the catalog and the section it is placed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub set: usize,
    pub section: Section,
}

/// Everything a renderer needs to paint one round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutScheme {
    pub round: RoundKind,
    pub direction: Direction,
    pub start_section: Section,
    pub start_zone: StartZone,
    pub inner_walls: InnerWallConfig,
    /// Obstacle sets in draw order; empty for open rounds
    pub obstacles: Vec<Placement>,
    pub parking_section: Option<Section>,
}

impl LayoutScheme {
    /// Obstacle set placed in `section`
    pub fn set_in(&self, section: Section) -> Option<usize> {
        self.obstacles.iter().find(|p| p.section == section).map(|p| p.set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_walls_are_fixed() {
        let walls = InnerWallConfig::default();
        assert!(walls.is_fixed_center());
        assert!(walls.pulled_sides().is_empty());
    }

    #[test]
    fn test_from_sides() {
        let walls = InnerWallConfig::from_sides(&[Section::West, Section::East]);
        assert!(walls.is_pulled(Section::West));
        assert!(walls.is_pulled(Section::East));
        assert!(!walls.is_pulled(Section::North));
        assert_eq!(walls.pulled_sides(), vec![Section::West, Section::East]);
        assert!(!walls.is_fixed_center());
    }

    #[test]
    fn test_placement_lookups() {
        let scheme = LayoutScheme {
            round: RoundKind::Obstacle,
            direction: Direction::Clockwise,
            start_section: Section::South,
            start_zone: StartZone::Z3,
            inner_walls: InnerWallConfig::default(),
            obstacles: vec![
                Placement { set: 8, section: Section::North },
                Placement { set: 21, section: Section::South },
            ],
            parking_section: Some(Section::South),
        };
        assert_eq!(scheme.set_in(Section::North), Some(8));
        assert_eq!(scheme.set_in(Section::South), Some(21));
        assert_eq!(scheme.set_in(Section::East), None);
    }

    #[test]
    fn test_scheme_json_shape() {
        let scheme = LayoutScheme {
            round: RoundKind::Open,
            direction: Direction::CounterClockwise,
            start_section: Section::West,
            start_zone: StartZone::Z5,
            inner_walls: InnerWallConfig::from_sides(&[Section::West]),
            obstacles: Vec::new(),
            parking_section: None,
        };
        let json = serde_json::to_value(&scheme).unwrap();
        assert_eq!(json["round"], "open");
        assert_eq!(json["direction"], "ccw");
        assert_eq!(json["start_section"], "west");
        assert_eq!(json["start_zone"], "Z5");
        assert_eq!(json["inner_walls"]["west"], true);
        let back: LayoutScheme = serde_json::from_value(json).unwrap();
        assert_eq!(back, scheme);
    }
}

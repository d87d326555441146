//! Traffic signs and the fixed combinations they are placed in

use serde::{Deserialize, Serialize};

use crate::core::types::Color;
use crate::geometry::Intersection;

/// A traffic sign standing on an intersection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Obstacle {
    position: Intersection,
    color: Color,
}

impl Obstacle {
    pub const fn new(position: Intersection, color: Color) -> Self {
        Self { position, color }
    }

    pub fn position(&self) -> Intersection {
        self.position
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Re-color the sign; the position never changes once placed
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn is_green(&self) -> bool {
        self.color == Color::Green
    }

    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }
}

/// One to two signs placed together in a single section
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObstacleSet {
    obstacles: Vec<Obstacle>,
}

impl ObstacleSet {
    pub fn new(obstacles: Vec<Obstacle>) -> Self {
        Self { obstacles }
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// True if any sign of the set stands on `intersection`
    pub fn occupies(&self, intersection: Intersection) -> bool {
        self.obstacles.iter().any(|o| o.position() == intersection)
    }

    pub fn count_color(&self, color: Color) -> usize {
        self.obstacles.iter().filter(|o| o.color() == color).count()
    }
}

impl From<&[(Intersection, Color)]> for ObstacleSet {
    fn from(signs: &[(Intersection, Color)]) -> Self {
        Self::new(signs.iter().map(|&(i, c)| Obstacle::new(i, c)).collect())
    }
}

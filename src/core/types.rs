//! Core type definitions used throughout the codebase

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::error::LayoutError;

/// One of the four straight sections around the field center
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    North,
    West,
    South,
    East,
}

impl Section {
    /// All sections in draw order
    pub const ALL: [Section; 4] = [Section::North, Section::West, Section::South, Section::East];

    pub fn name(&self) -> &'static str {
        match self {
            Section::North => "north",
            Section::West => "west",
            Section::South => "south",
            Section::East => "east",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Section {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" | "n" => Ok(Section::North),
            "west" | "w" => Ok(Section::West),
            "south" | "s" => Ok(Section::South),
            "east" | "e" => Ok(Section::East),
            other => Err(LayoutError::UnknownSection(other.to_string())),
        }
    }
}

/// Driving direction of the vehicle around the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "cw")]
    Clockwise,
    #[serde(rename = "ccw")]
    CounterClockwise,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Clockwise, Direction::CounterClockwise];

    /// Pick a direction uniformly
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            Direction::Clockwise => "cw",
            Direction::CounterClockwise => "ccw",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for Direction {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cw" | "clockwise" => Ok(Direction::Clockwise),
            "ccw" | "counterclockwise" | "counter-clockwise" => Ok(Direction::CounterClockwise),
            other => Err(LayoutError::UnknownDirection(other.to_string())),
        }
    }
}

/// Traffic sign color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Green,
    Red,
    Undefined,
}

impl Color {
    /// Colors a traffic sign may actually carry
    pub const DEFINED: [Color; 2] = [Color::Green, Color::Red];

    /// Pick Green or Red uniformly
    pub fn random_defined(rng: &mut impl Rng) -> Self {
        Self::DEFINED[rng.gen_range(0..Self::DEFINED.len())]
    }

    pub fn is_defined(&self) -> bool {
        !matches!(self, Color::Undefined)
    }
}

/// Kind of round a layout is generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundKind {
    /// Open challenge with randomized inner walls
    Open,
    /// Open challenge with the inner walls kept at the inner border
    OpenFixedCenter,
    /// Obstacle challenge with traffic signs and a parking lot
    Obstacle,
}

//! Color definitions for field elements and traffic signs

use serde::{Deserialize, Serialize};

use crate::core::types::Color;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);

/// Colors used when painting a layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Mat surface
    pub field: Rgb,
    /// Outer and inner walls
    pub wall: Rgb,
    /// Arcs, radii and section borders
    pub line: Rgb,
    pub start_zone: Rgb,
    pub parking: Rgb,
    /// Direction indicator in the center section
    pub arrow: Rgb,
    pub green_sign: Rgb,
    pub red_sign: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            field: WHITE,
            wall: BLACK,
            line: BLACK,
            start_zone: Rgb::new(192, 192, 192), // Grey
            parking: Rgb::new(255, 0, 255),      // Magenta
            arrow: Rgb::new(0, 0, 255),          // Blue
            green_sign: Rgb::new(68, 214, 44),
            red_sign: Rgb::new(238, 39, 55),
        }
    }
}

impl Palette {
    /// Paint color for a traffic sign
    pub fn sign(&self, color: Color) -> Rgb {
        match color {
            Color::Green => self.green_sign,
            Color::Red => self.red_sign,
            Color::Undefined => BLACK,
        }
    }
}

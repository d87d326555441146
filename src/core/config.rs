//! Render configuration with documented constants
//!
//! The field geometry itself is fixed by the competition rules and lives in
//! `geometry`. Everything here only changes how a layout is painted.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{LayoutError, Result};
use crate::geometry::{FIRST_LINE, INNER_BORDER, SECTION_SIZE};
use crate::render::colors::Palette;

/// Upper bound for any stroke or barrier thickness (pixels)
pub const MAX_STROKE: u32 = 100;

/// Configuration for painting a layout onto a canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Colors for every painted element
    pub palette: Palette,

    /// Thickness of inner walls (pixels)
    pub wall_thickness: u32,

    /// Thickness of arc and radius lines (pixels)
    pub line_thickness: u32,

    /// Side of the square drawn for a traffic sign (pixels)
    ///
    /// Must stay below the 200 pixel gap between the two arcs, otherwise
    /// signs on T/X rows would touch.
    pub obstacle_size: u32,

    // === DIRECTION INDICATOR ===
    /// Radius of the arc in the center section showing the driving direction
    pub arrow_radius: u32,

    /// Stroke thickness of the arc and its arrowhead
    pub arrow_thickness: u32,

    // === PARKING LOT ===
    /// Thickness of one parking barrier (pixels)
    pub parking_barrier_thickness: u32,

    /// Length of a parking barrier measured from the outer wall
    pub parking_barrier_length: u32,

    /// Free space between the two barriers
    pub parking_barrier_gap: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            wall_thickness: 10,
            line_thickness: 2,
            obstacle_size: 100,
            arrow_radius: 350,
            arrow_thickness: 20,
            parking_barrier_thickness: 20,
            parking_barrier_length: 200,
            parking_barrier_gap: 300,
        }
    }
}

impl RenderConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) TOML document; missing keys keep defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: RenderConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    ///
    /// Every size is bounded by the field geometry, so the painter can work
    /// in `i32` pixel coordinates without wrapping.
    pub fn validate(&self) -> Result<()> {
        let strokes = [
            ("wall_thickness", self.wall_thickness),
            ("line_thickness", self.line_thickness),
            ("arrow_thickness", self.arrow_thickness),
            ("parking_barrier_thickness", self.parking_barrier_thickness),
        ];
        for (name, value) in strokes {
            if value == 0 || value > MAX_STROKE {
                return Err(LayoutError::Config(format!(
                    "{} ({}) should be in 1..={}",
                    name, value, MAX_STROKE
                )));
            }
        }

        let arc_gap = ((INNER_BORDER - FIRST_LINE) / 3) as u32;
        if self.obstacle_size == 0 || self.obstacle_size > arc_gap {
            return Err(LayoutError::Config(format!(
                "obstacle_size ({}) should be in 1..={}",
                self.obstacle_size, arc_gap
            )));
        }

        // The indicator lives inside the center section
        let center_half = (SECTION_SIZE / 2) as u32;
        if self.arrow_radius == 0 || self.arrow_radius >= center_half {
            return Err(LayoutError::Config(format!(
                "arrow_radius ({}) should be in 1..{}",
                self.arrow_radius, center_half
            )));
        }

        if self.parking_barrier_length > FIRST_LINE as u32 {
            return Err(LayoutError::Config(format!(
                "parking_barrier_length ({}) should not cross the first arc ({})",
                self.parking_barrier_length, FIRST_LINE
            )));
        }

        let parking_width = self
            .parking_barrier_thickness
            .checked_mul(2)
            .and_then(|bars| bars.checked_add(self.parking_barrier_gap))
            .filter(|&width| width <= SECTION_SIZE as u32);
        if parking_width.is_none() {
            return Err(LayoutError::Config(format!(
                "parking lot (2 x {} + {}) exceeds the section width ({})",
                self.parking_barrier_thickness, self.parking_barrier_gap, SECTION_SIZE
            )));
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<RenderConfig> = OnceLock::new();

/// Get the global render config (initializes with defaults if not set)
pub fn config() -> &'static RenderConfig {
    CONFIG.get_or_init(RenderConfig::default)
}

/// Set the global render config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: RenderConfig) -> std::result::Result<(), RenderConfig> {
    CONFIG.set(config)
}

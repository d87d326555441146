//! Painting of generated layouts
//!
//! Provides visual representation of a [`LayoutScheme`](crate::generation::LayoutScheme).
//! This module is READ-ONLY - it never modifies a scheme or the catalog.

pub mod colors;
pub mod painter;
pub mod raster;

pub use colors::{Palette, Rgb};
pub use painter::paint_layout;
pub use raster::RasterCanvas;

use crate::geometry::{PixelRect, Point};

/// Drawing surface in absolute pixel coordinates
///
/// Implementations clip to their own bounds; callers never check.
pub trait Canvas {
    /// Fill the half-open rectangle `rect`
    fn fill_rect(&mut self, rect: PixelRect, color: Rgb);

    /// Stroke an elliptic arc; angles in degrees, clockwise on screen, 0 = +x
    fn draw_arc(
        &mut self,
        center: Point,
        radii: (u32, u32),
        start_angle: f32,
        end_angle: f32,
        color: Rgb,
        thickness: u32,
    );

    /// Stroke a straight segment
    fn draw_line(&mut self, from: Point, to: Point, color: Rgb, thickness: u32);
}

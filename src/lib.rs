//! Field Randomizer - random layouts for the Future Engineers field
//!
//! Draws inner walls, start positions, traffic signs and the parking lot for
//! the open and obstacle rounds, and paints the result.

pub mod catalog;
pub mod core;
pub mod generation;
pub mod geometry;
pub mod render;

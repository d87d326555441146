//! Mapping of canonical section coordinates onto the field
//!
//! North is painted as defined, South is rotated by 180 degrees, West and
//! East swap the axes so the outer wall of the section stays outside.

use crate::core::types::Section;
use crate::geometry::{CanonicalRect, PixelRect, Point, BORDER, FIELD_SIZE};

/// Absolute pixel rectangle covered by `rect` when placed in `section`
pub fn transform(section: Section, rect: CanonicalRect) -> PixelRect {
    let (min_h, max_h) = (rect.min_h(), rect.max_h());
    let (min_w, max_w) = (rect.min_w(), rect.max_w());

    match section {
        Section::North => PixelRect::new(min_h + BORDER, min_w + BORDER, max_h + BORDER, max_w + BORDER),
        Section::South => PixelRect::new(
            FIELD_SIZE - max_h + BORDER,
            FIELD_SIZE - max_w + BORDER,
            FIELD_SIZE - min_h + BORDER,
            FIELD_SIZE - min_w + BORDER,
        ),
        Section::West => PixelRect::new(
            FIELD_SIZE - max_w + BORDER,
            min_h + BORDER,
            FIELD_SIZE - min_w + BORDER,
            max_h + BORDER,
        ),
        Section::East => PixelRect::new(
            min_w + BORDER,
            FIELD_SIZE - max_h + BORDER,
            max_w + BORDER,
            FIELD_SIZE - min_h + BORDER,
        ),
    }
}

/// Absolute pixel position of the canonical point `(h, w)` in `section`
pub fn transform_point(section: Section, h: i32, w: i32) -> Point {
    match section {
        Section::North => Point::new(w + BORDER, h + BORDER),
        Section::South => Point::new(FIELD_SIZE - w + BORDER, FIELD_SIZE - h + BORDER),
        Section::West => Point::new(h + BORDER, FIELD_SIZE - w + BORDER),
        Section::East => Point::new(FIELD_SIZE - h + BORDER, w + BORDER),
    }
}

/// Canonical rectangle that [`transform`] maps onto `rect` in `section`
///
/// The result is normalized, so `inverse(s, transform(s, r)) == r.normalized()`.
pub fn inverse(section: Section, rect: PixelRect) -> CanonicalRect {
    let top = rect.top - BORDER;
    let left = rect.left - BORDER;
    let bottom = rect.bottom - BORDER;
    let right = rect.right - BORDER;

    match section {
        Section::North => CanonicalRect::new(top, left, bottom, right),
        Section::South => CanonicalRect::new(
            FIELD_SIZE - bottom,
            FIELD_SIZE - right,
            FIELD_SIZE - top,
            FIELD_SIZE - left,
        ),
        Section::West => CanonicalRect::new(left, FIELD_SIZE - bottom, right, FIELD_SIZE - top),
        Section::East => CanonicalRect::new(FIELD_SIZE - right, top, FIELD_SIZE - left, bottom),
    }
}

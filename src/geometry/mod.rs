//! Field geometry
//!
//! The field is 3000x3000 units (one unit = one millimetre = one pixel).
//! Around the center section sit four straight sections with an identical
//! layout, so every shape is defined once in the coordinates of the north
//! section and mapped onto the other sections by [`transform`].
//!
//! Canonical coordinates are `(h, w)`: `h` grows from the outer wall towards
//! the center, `w` runs along the outer wall. The north section covers
//! `h` in `0..=1000` and `w` in `1000..=2000`.

pub mod intersection;
pub mod transform;

pub use intersection::Intersection;
pub use transform::{inverse, transform, transform_point};

/// Width and height of the field without the outer walls
pub const FIELD_SIZE: i32 = 3000;

/// Side of one of the nine square sections of the field
pub const SECTION_SIZE: i32 = FIELD_SIZE / 3;

/// Distance of the first arc from the outer wall
pub const FIRST_LINE: i32 = 400;

/// Distance of the second arc from the outer wall
pub const SECOND_LINE: i32 = FIRST_LINE + 200;

/// Border between a straight section and the center section
pub const INNER_BORDER: i32 = SECOND_LINE + 400;

/// Left radius of a straight section
pub const LEFT_POSITION: i32 = INNER_BORDER;

/// Middle radius of a straight section
pub const MIDDLE_POSITION: i32 = FIELD_SIZE / 2;

/// Right radius of a straight section
pub const RIGHT_POSITION: i32 = FIELD_SIZE - INNER_BORDER;

/// Margin around the field taken by the outer walls
pub const BORDER: i32 = 10;

/// Side of the full painted image, outer walls included
pub const CANVAS_SIZE: i32 = FIELD_SIZE + 2 * BORDER;

/// A point in absolute pixel coordinates (`x` = column, `y` = row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Center of the field in absolute pixel coordinates
pub const FIELD_CENTER: Point = Point::new(MIDDLE_POSITION + BORDER, MIDDLE_POSITION + BORDER);

/// A rectangle in canonical section coordinates given by two opposite corners
///
/// The corners may come in any order; only the spanned area matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanonicalRect {
    pub h1: i32,
    pub w1: i32,
    pub h2: i32,
    pub w2: i32,
}

impl CanonicalRect {
    pub const fn new(h1: i32, w1: i32, h2: i32, w2: i32) -> Self {
        Self { h1, w1, h2, w2 }
    }

    /// Square of side `size` centered on `(h, w)`
    pub fn centered(h: i32, w: i32, size: i32) -> Self {
        let half = size / 2;
        Self::new(h - half, w - half, h + half, w + half)
    }

    /// Rectangle spanned by two intersections
    pub fn between(a: Intersection, b: Intersection) -> Self {
        Self::new(a.h(), a.w(), b.h(), b.w())
    }

    pub fn min_h(&self) -> i32 {
        self.h1.min(self.h2)
    }

    pub fn max_h(&self) -> i32 {
        self.h1.max(self.h2)
    }

    pub fn min_w(&self) -> i32 {
        self.w1.min(self.w2)
    }

    pub fn max_w(&self) -> i32 {
        self.w1.max(self.w2)
    }

    /// Same area with corners ordered as (min, min) - (max, max)
    pub fn normalized(&self) -> Self {
        Self::new(self.min_h(), self.min_w(), self.max_h(), self.max_w())
    }

    /// Extent along `h`
    pub fn depth(&self) -> i32 {
        self.max_h() - self.min_h()
    }

    /// Extent along `w`
    pub fn span(&self) -> i32 {
        self.max_w() - self.min_w()
    }
}

/// An axis-aligned rectangle in absolute pixel coordinates, half-open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelRect {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
}

impl PixelRect {
    pub const fn new(top: i32, left: i32, bottom: i32, right: i32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x < self.right && point.y >= self.top && point.y < self.bottom
    }

    /// True if both rectangles share at least one pixel
    pub fn overlaps(&self, other: &PixelRect) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_constants() {
        assert_eq!(SECTION_SIZE, 1000);
        assert_eq!(SECOND_LINE, 600);
        assert_eq!(INNER_BORDER, 1000);
        assert_eq!((LEFT_POSITION, MIDDLE_POSITION, RIGHT_POSITION), (1000, 1500, 2000));
        // Left and right radii mirror each other around the middle one
        assert_eq!(MIDDLE_POSITION - LEFT_POSITION, RIGHT_POSITION - MIDDLE_POSITION);
    }

    #[test]
    fn test_canonical_rect_normalizes_corners() {
        let rect = CanonicalRect::new(600, 2000, 400, 1500);
        assert_eq!(rect.normalized(), CanonicalRect::new(400, 1500, 600, 2000));
        assert_eq!(rect.depth(), 200);
        assert_eq!(rect.span(), 500);
    }

    #[test]
    fn test_centered_square() {
        let rect = CanonicalRect::centered(400, 1500, 100);
        assert_eq!(rect, CanonicalRect::new(350, 1450, 450, 1550));
    }

    #[test]
    fn test_pixel_rect_overlap() {
        let a = PixelRect::new(0, 0, 10, 10);
        let b = PixelRect::new(5, 5, 15, 15);
        let c = PixelRect::new(10, 0, 20, 10);
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
        assert!(a.contains(Point::new(9, 9)));
        assert!(!a.contains(Point::new(10, 9)));
    }
}

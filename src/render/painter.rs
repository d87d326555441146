//! Paints a layout scheme onto a canvas
//!
//! Everything that repeats per section is defined once in canonical
//! coordinates and mapped with [`transform`]. Only the inner walls, which
//! depend on all four sides at once, and the direction indicator are painted
//! in absolute coordinates.

use crate::catalog::ObstacleCatalog;
use crate::core::config::RenderConfig;
use crate::core::error::Result;
use crate::core::types::{Direction, Section};
use crate::generation::{InnerWallConfig, LayoutScheme};
use crate::geometry::{
    transform, CanonicalRect, PixelRect, BORDER, CANVAS_SIZE, FIELD_CENTER, FIELD_SIZE,
    FIRST_LINE, INNER_BORDER, LEFT_POSITION, MIDDLE_POSITION, SECOND_LINE,
};
use crate::render::{Canvas, Rgb};

/// Arc of the direction indicator runs from the left of the center to its top
const ARROW_START_ANGLE: f32 = 180.0;
const ARROW_END_ANGLE: f32 = -90.0;

/// Arrowhead strokes relative to the arc end they are attached to
const CW_ARROWHEAD: [(i32, i32); 2] = [(-30, 80), (50, 75)];
const CCW_ARROWHEAD: [(i32, i32); 2] = [(80, -30), (75, 50)];

/// Paint the full field for `scheme`
pub fn paint_layout(
    canvas: &mut impl Canvas,
    scheme: &LayoutScheme,
    catalog: &ObstacleCatalog,
    config: &RenderConfig,
) -> Result<()> {
    paint_template(canvas, config);
    paint_start_zone(canvas, scheme, config);

    if let Some(section) = scheme.parking_section {
        paint_parking_lot(canvas, section, config);
    }
    paint_obstacles(canvas, scheme, catalog, config)?;

    paint_inner_walls(canvas, &scheme.inner_walls, config);
    paint_direction(canvas, scheme.direction, config);
    Ok(())
}

fn fill_canonical(canvas: &mut impl Canvas, section: Section, rect: CanonicalRect, color: Rgb) {
    canvas.fill_rect(transform(section, rect), color);
}

/// Empty mat: outer walls, arcs, radii and section borders
pub fn paint_template(canvas: &mut impl Canvas, config: &RenderConfig) {
    let palette = &config.palette;
    canvas.fill_rect(PixelRect::new(0, 0, CANVAS_SIZE, CANVAS_SIZE), palette.wall);
    canvas.fill_rect(
        PixelRect::new(BORDER, BORDER, FIELD_SIZE + BORDER, FIELD_SIZE + BORDER),
        palette.field,
    );

    let half = config.line_thickness as i32 / 2;
    for section in Section::ALL {
        // Arcs end at the corner sections
        for arc in [FIRST_LINE, SECOND_LINE] {
            fill_canonical(
                canvas,
                section,
                CanonicalRect::new(arc - half, INNER_BORDER, arc + half, FIELD_SIZE - INNER_BORDER),
                palette.line,
            );
        }

        // Inner border, running on as the side radii of the neighbouring sections
        fill_canonical(
            canvas,
            section,
            CanonicalRect::new(INNER_BORDER - half, 0, INNER_BORDER + half, FIELD_SIZE),
            palette.line,
        );

        fill_canonical(
            canvas,
            section,
            CanonicalRect::new(0, MIDDLE_POSITION - half, INNER_BORDER, MIDDLE_POSITION + half),
            palette.line,
        );
    }
}

pub fn paint_start_zone(canvas: &mut impl Canvas, scheme: &LayoutScheme, config: &RenderConfig) {
    fill_canonical(
        canvas,
        scheme.start_section,
        scheme.start_zone.rect(),
        config.palette.start_zone,
    );
}

/// Two barriers against the outer wall, left part of the section
pub fn paint_parking_lot(canvas: &mut impl Canvas, section: Section, config: &RenderConfig) {
    let thickness = config.parking_barrier_thickness as i32;
    let length = config.parking_barrier_length as i32;
    let second = LEFT_POSITION + thickness + config.parking_barrier_gap as i32;

    for left in [LEFT_POSITION, second] {
        fill_canonical(
            canvas,
            section,
            CanonicalRect::new(0, left, length, left + thickness),
            config.palette.parking,
        );
    }
}

pub fn paint_obstacles(
    canvas: &mut impl Canvas,
    scheme: &LayoutScheme,
    catalog: &ObstacleCatalog,
    config: &RenderConfig,
) -> Result<()> {
    let size = config.obstacle_size as i32;
    for placement in &scheme.obstacles {
        for obstacle in catalog.get(placement.set)?.iter() {
            let (h, w) = obstacle.position().position();
            fill_canonical(
                canvas,
                placement.section,
                CanonicalRect::centered(h, w, size),
                config.palette.sign(obstacle.color()),
            );
        }
    }
    Ok(())
}

/// Closed inner wall; a pulled side sits on the second arc instead of the inner border
pub fn paint_inner_walls(canvas: &mut impl Canvas, walls: &InnerWallConfig, config: &RenderConfig) {
    let depth = |side: Section| {
        if walls.is_pulled(side) {
            SECOND_LINE
        } else {
            INNER_BORDER
        }
    };

    let north = depth(Section::North) + BORDER;
    let west = depth(Section::West) + BORDER;
    let south = FIELD_SIZE - depth(Section::South) + BORDER;
    let east = FIELD_SIZE - depth(Section::East) + BORDER;

    let half = config.wall_thickness as i32 / 2;
    let color = config.palette.wall;

    canvas.fill_rect(PixelRect::new(north - half, west - half, north + half, east + half), color);
    canvas.fill_rect(PixelRect::new(north - half, west - half, south + half, west + half), color);
    canvas.fill_rect(PixelRect::new(south - half, west - half, south + half, east + half), color);
    canvas.fill_rect(PixelRect::new(north - half, east - half, south + half, east + half), color);
}

/// Arc with an arrowhead in the center section
pub fn paint_direction(canvas: &mut impl Canvas, direction: Direction, config: &RenderConfig) {
    let radius = config.arrow_radius;
    let color = config.palette.arrow;
    let thickness = config.arrow_thickness;

    canvas.draw_arc(
        FIELD_CENTER,
        (radius, radius),
        ARROW_START_ANGLE,
        ARROW_END_ANGLE,
        color,
        thickness,
    );

    let r = radius as i32;
    let (tip, strokes) = match direction {
        Direction::Clockwise => (FIELD_CENTER.offset(-r, 0), CW_ARROWHEAD),
        Direction::CounterClockwise => (FIELD_CENTER.offset(0, -r), CCW_ARROWHEAD),
    };
    for (dx, dy) in strokes {
        canvas.draw_line(tip, tip.offset(dx, dy), color, thickness);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{catalog, StartZone};
    use crate::core::types::RoundKind;
    use crate::generation::Placement;
    use crate::geometry::Point;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Rect(PixelRect, Rgb),
        Arc(Point, f32, f32),
        Line(Point, Point),
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl Canvas for Recorder {
        fn fill_rect(&mut self, rect: PixelRect, color: Rgb) {
            self.ops.push(Op::Rect(rect, color));
        }

        fn draw_arc(&mut self, center: Point, _: (u32, u32), start: f32, end: f32, _: Rgb, _: u32) {
            self.ops.push(Op::Arc(center, start, end));
        }

        fn draw_line(&mut self, from: Point, to: Point, _: Rgb, _: u32) {
            self.ops.push(Op::Line(from, to));
        }
    }

    fn obstacle_scheme() -> LayoutScheme {
        LayoutScheme {
            round: RoundKind::Obstacle,
            direction: Direction::Clockwise,
            start_section: Section::East,
            start_zone: StartZone::Z3,
            inner_walls: InnerWallConfig::default(),
            obstacles: vec![
                Placement { set: 8, section: Section::North },
                Placement { set: 21, section: Section::East },
                Placement { set: 13, section: Section::South },
                Placement { set: 9, section: Section::West },
            ],
            parking_section: Some(Section::East),
        }
    }

    #[test]
    fn test_template_draws_four_lines_per_section() {
        let mut canvas = Recorder::default();
        paint_template(&mut canvas, &RenderConfig::default());
        // background + field + 4 sections * 4 lines
        assert_eq!(canvas.ops.len(), 2 + 16);
    }

    #[test]
    fn test_obstacles_painted_per_sign() {
        let mut canvas = Recorder::default();
        let config = RenderConfig::default();
        paint_obstacles(&mut canvas, &obstacle_scheme(), catalog(), &config).unwrap();
        // 1 + 2 + 2 + 1 signs
        assert_eq!(canvas.ops.len(), 6);
        assert_eq!(
            canvas.ops[0],
            Op::Rect(PixelRect::new(360, 1460, 460, 1560), config.palette.green_sign)
        );
    }

    #[test]
    fn test_unknown_set_is_reported() {
        let mut scheme = obstacle_scheme();
        scheme.obstacles[0].set = 77;
        let mut canvas = Recorder::default();
        let result = paint_layout(&mut canvas, &scheme, catalog(), &RenderConfig::default());
        assert!(matches!(
            result,
            Err(crate::core::error::LayoutError::UnknownObstacleSet(77))
        ));
    }

    #[test]
    fn test_pulled_wall_moves_onto_second_arc() {
        let mut canvas = Recorder::default();
        let walls = InnerWallConfig::from_sides(&[Section::North]);
        paint_inner_walls(&mut canvas, &walls, &RenderConfig::default());
        match &canvas.ops[0] {
            Op::Rect(rect, _) => {
                assert_eq!(rect.top, SECOND_LINE + BORDER - 5);
                assert_eq!(rect.bottom, SECOND_LINE + BORDER + 5);
                assert_eq!(rect.left, INNER_BORDER + BORDER - 5);
                assert_eq!(rect.right, FIELD_SIZE - INNER_BORDER + BORDER + 5);
            }
            other => panic!("expected a rect, got {:?}", other),
        }
    }

    #[test]
    fn test_direction_arrowhead_position() {
        let config = RenderConfig::default();

        let mut canvas = Recorder::default();
        paint_direction(&mut canvas, Direction::Clockwise, &config);
        assert_eq!(canvas.ops[0], Op::Arc(FIELD_CENTER, 180.0, -90.0));
        assert_eq!(canvas.ops[1], Op::Line(Point::new(1160, 1510), Point::new(1130, 1590)));

        let mut canvas = Recorder::default();
        paint_direction(&mut canvas, Direction::CounterClockwise, &config);
        assert_eq!(canvas.ops[1], Op::Line(Point::new(1510, 1160), Point::new(1590, 1130)));
    }

    #[test]
    fn test_open_layout_skips_parking_and_signs() {
        let mut scheme = obstacle_scheme();
        scheme.round = RoundKind::Open;
        scheme.obstacles.clear();
        scheme.parking_section = None;

        let mut canvas = Recorder::default();
        paint_layout(&mut canvas, &scheme, catalog(), &RenderConfig::default()).unwrap();
        // template + start zone + 4 walls + arc + 2 strokes
        assert_eq!(canvas.ops.len(), 18 + 1 + 4 + 3);
    }
}

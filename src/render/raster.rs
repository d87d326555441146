//! In-memory RGB canvas backed by the `image` crate

use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, ImageFormat, RgbImage};

use crate::core::error::Result;
use crate::geometry::{PixelRect, Point, CANVAS_SIZE};
use crate::render::colors::BLACK;
use crate::render::{Canvas, Rgb};

/// Pixel buffer the painter draws into
pub struct RasterCanvas {
    image: RgbImage,
}

impl RasterCanvas {
    pub fn new(width: u32, height: u32, background: Rgb) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, image::Rgb(background.to_array())),
        }
    }

    /// Canvas covering the whole field including the outer walls
    pub fn for_field() -> Self {
        Self::new(CANVAS_SIZE as u32, CANVAS_SIZE as u32, BLACK)
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Color at `point`, None outside the canvas
    pub fn pixel(&self, point: Point) -> Option<Rgb> {
        if point.x < 0 || point.y < 0 {
            return None;
        }
        let (x, y) = (point.x as u32, point.y as u32);
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let [r, g, b] = self.image.get_pixel(x, y).0;
        Some(Rgb::new(r, g, b))
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// PNG-encoded copy of the canvas
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        PngEncoder::new(&mut bytes).write_image(
            self.image.as_raw(),
            self.width(),
            self.height(),
            ColorType::Rgb8,
        )?;
        Ok(bytes)
    }

    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.image.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }

    /// Clip `rect` to the canvas; None if nothing is left
    fn clip(&self, rect: PixelRect) -> Option<(u32, u32, u32, u32)> {
        let left = rect.left.max(0);
        let top = rect.top.max(0);
        let right = rect.right.min(self.width() as i32);
        let bottom = rect.bottom.min(self.height() as i32);
        if left >= right || top >= bottom {
            return None;
        }
        Some((left as u32, top as u32, right as u32, bottom as u32))
    }

    /// Square brush of side `thickness` centered on `center`
    fn stamp(&mut self, center: Point, thickness: u32, color: Rgb) {
        let side = thickness.max(1) as i32;
        let top_left = center.offset(-side / 2, -side / 2);
        self.fill_rect(
            PixelRect::new(top_left.y, top_left.x, top_left.y + side, top_left.x + side),
            color,
        );
    }
}

impl Canvas for RasterCanvas {
    fn fill_rect(&mut self, rect: PixelRect, color: Rgb) {
        let Some((left, top, right, bottom)) = self.clip(rect) else {
            return;
        };
        let pixel = image::Rgb(color.to_array());
        for y in top..bottom {
            for x in left..right {
                self.image.put_pixel(x, y, pixel);
            }
        }
    }

    fn draw_arc(
        &mut self,
        center: Point,
        radii: (u32, u32),
        start_angle: f32,
        end_angle: f32,
        color: Rgb,
        thickness: u32,
    ) {
        // Reversed bounds describe the same arc
        let (start, end) = if start_angle <= end_angle {
            (start_angle, end_angle)
        } else {
            (end_angle, start_angle)
        };

        let (rx, ry) = (radii.0 as f32, radii.1 as f32);
        // About one pixel of arc length per step
        let step = (1.0 / rx.max(ry).max(1.0)).to_degrees();
        let mut angle = start;
        loop {
            let theta = angle.min(end).to_radians();
            let point = Point::new(
                center.x + (rx * theta.cos()).round() as i32,
                center.y + (ry * theta.sin()).round() as i32,
            );
            self.stamp(point, thickness, color);
            if angle >= end {
                break;
            }
            angle += step;
        }
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Rgb, thickness: u32) {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        let steps = dx.abs().max(dy.abs()).max(1);
        for i in 0..=steps {
            let x = from.x as f32 + dx as f32 * i as f32 / steps as f32;
            let y = from.y as f32 + dy as f32 * i as f32 / steps as f32;
            self.stamp(Point::new(x.round() as i32, y.round() as i32), thickness, color);
        }
    }
}

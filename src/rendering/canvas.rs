//! Minimal software rasterizer over an RGBA image.

use glam::Vec2;
use image::{Rgba, RgbaImage};

/// RGBA frame buffer with line and dot primitives
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create a canvas filled with `background`
    pub fn new(width: u32, height: u32, background: Rgba<u8>) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, background),
        }
    }

    /// Plot one pixel (ignored outside the frame)
    pub fn plot(&mut self, x: i64, y: i64, color: Rgba<u8>) {
        if x < 0 || y < 0 || x >= self.image.width() as i64 || y >= self.image.height() as i64 {
            return;
        }
        self.image.put_pixel(x as u32, y as u32, color);
    }

    /// Draw a line by stepping one pixel along the longer axis
    pub fn line(&mut self, from: Vec2, to: Vec2, color: Rgba<u8>) {
        if !from.is_finite() || !to.is_finite() {
            return;
        }

        let delta = to - from;
        let steps = delta.x.abs().max(delta.y.abs()).ceil().max(1.0);
        // Keep runaway lines (huge zoom) from stalling a frame
        let steps = steps.min(16_384.0) as usize;

        for i in 0..=steps {
            let p = from + delta * (i as f32 / steps as f32);
            self.plot(p.x.round() as i64, p.y.round() as i64, color);
        }
    }

    /// Connect consecutive points
    pub fn polyline(&mut self, points: &[Vec2], color: Rgba<u8>) {
        for pair in points.windows(2) {
            self.line(pair[0], pair[1], color);
        }
    }

    /// Filled disc of `radius` pixels
    pub fn dot(&mut self, center: Vec2, radius: f32, color: Rgba<u8>) {
        if !center.is_finite() {
            return;
        }
        let r = radius.ceil() as i64;
        let (cx, cy) = (center.x.round() as i64, center.y.round() as i64);
        for dy in -r..=r {
            for dx in -r..=r {
                if ((dx * dx + dy * dy) as f32) <= radius * radius {
                    self.plot(cx + dx, cy + dy, color);
                }
            }
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    #[test]
    fn test_horizontal_line_covers_endpoints() {
        let mut canvas = Canvas::new(10, 10, BLACK);
        canvas.line(Vec2::new(1.0, 5.0), Vec2::new(8.0, 5.0), WHITE);

        for x in 1..=8 {
            assert_eq!(*canvas.image().get_pixel(x, 5), WHITE);
        }
        assert_eq!(*canvas.image().get_pixel(0, 5), BLACK);
        assert_eq!(*canvas.image().get_pixel(9, 5), BLACK);
    }

    #[test]
    fn test_drawing_outside_is_clipped() {
        let mut canvas = Canvas::new(4, 4, BLACK);
        canvas.line(Vec2::new(-10.0, -10.0), Vec2::new(20.0, 20.0), WHITE);
        canvas.dot(Vec2::new(100.0, 100.0), 3.0, WHITE);
        canvas.line(Vec2::new(f32::NAN, 0.0), Vec2::ZERO, WHITE);

        assert_eq!(*canvas.image().get_pixel(2, 2), WHITE);
        assert_eq!(*canvas.image().get_pixel(3, 0), BLACK);
    }

    #[test]
    fn test_dot_is_round() {
        let mut canvas = Canvas::new(9, 9, BLACK);
        canvas.dot(Vec2::new(4.0, 4.0), 2.0, WHITE);

        assert_eq!(*canvas.image().get_pixel(4, 2), WHITE);
        assert_eq!(*canvas.image().get_pixel(6, 4), WHITE);
        assert_eq!(*canvas.image().get_pixel(2, 2), BLACK);
    }
}

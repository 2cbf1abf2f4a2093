//! Software frame rendering of the epicycle chain.
//!
//! Consumes the per-circle records once per frame. Owns no GPU resources;
//! frames are rasterized on the CPU and written as PNG.

mod canvas;
mod mesh;
mod trail;
mod viewport;

use glam::{DVec2, Vec2};
use image::{Rgba, RgbaImage};
use std::path::Path;

use crate::epicycle::Epicycle;
use crate::params::RenderConfig;

// Re-export public types
pub use canvas::Canvas;
pub use mesh::{arm_polyline, circle_outline, line_indices};
pub use trail::Trail;
pub use viewport::Viewport;

const BACKGROUND: Rgba<u8> = Rgba([26, 26, 26, 255]);
const CIRCLE_COLOR: Rgba<u8> = Rgba([70, 90, 120, 255]);
const ARM_COLOR: Rgba<u8> = Rgba([220, 220, 220, 255]);
const TRAIL_COLOR: Rgba<u8> = Rgba([255, 170, 40, 255]);
const TIP_COLOR: Rgba<u8> = Rgba([255, 80, 60, 255]);

/// Circles smaller than this many pixels are drawn as arms only
const MIN_OUTLINE_RADIUS_PX: f32 = 1.0;

/// Frame renderer for one output size
pub struct FrameRenderer {
    config: RenderConfig,
    viewport: Viewport,
}

impl FrameRenderer {
    /// Create renderer, validating the configuration
    pub fn new(config: RenderConfig) -> Result<Self, String> {
        config
            .validate()
            .map_err(|e| format!("Invalid render config: {}", e))?;

        let viewport = Viewport::new(&config);
        Ok(Self { config, viewport })
    }

    /// Rasterize one frame
    ///
    /// # Arguments
    /// * `epicycles` - Circles in ordinal order with current positions
    /// * `tip` - End of the arm chain
    /// * `trail` - Recent tip positions, oldest first
    pub fn render(&self, epicycles: &[Epicycle], tip: DVec2, trail: &Trail) -> RgbaImage {
        let mut canvas = Canvas::new(self.config.width, self.config.height, BACKGROUND);

        // Circle outlines (skip the ones too small to see)
        for epicycle in epicycles {
            if self.viewport.scale_length(epicycle.radius) < MIN_OUTLINE_RADIUS_PX {
                continue;
            }
            let outline = self.project(&circle_outline(
                epicycle.position,
                epicycle.radius,
                self.config.circle_segments,
            ));
            canvas.polyline(&outline, CIRCLE_COLOR);
        }

        // Traced curve
        let trail_px: Vec<Vec2> = trail.points().map(|p| self.viewport.to_pixel(p)).collect();
        canvas.polyline(&trail_px, TRAIL_COLOR);

        // Arms on top
        canvas.polyline(&self.project(&arm_polyline(epicycles, tip)), ARM_COLOR);
        canvas.dot(self.viewport.to_pixel(tip), 3.0, TIP_COLOR);

        canvas.into_image()
    }

    /// Rasterize one frame and write it as PNG
    pub fn render_to_file(
        &self,
        epicycles: &[Epicycle],
        tip: DVec2,
        trail: &Trail,
        path: &Path,
    ) -> Result<(), image::ImageError> {
        self.render(epicycles, tip, trail).save(path)
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    fn project(&self, points: &[DVec2]) -> Vec<Vec2> {
        points.iter().map(|&p| self.viewport.to_pixel(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::epicycle::EpicycleSet;
    use rustfft::num_complex::Complex;

    fn small_config() -> RenderConfig {
        RenderConfig {
            width: 160,
            height: 90,
            ..RenderConfig::default()
        }
    }

    #[test]
    fn test_render_draws_tip_and_arms() {
        let coefficients: Vec<Complex<f64>> = [4.0, 2.0, 0.0, 2.0]
            .iter()
            .map(|&v| Complex::new(v, 0.0))
            .collect();
        let mut set = EpicycleSet::new(&coefficients).unwrap();
        set.update(0.0);

        let renderer = FrameRenderer::new(small_config()).unwrap();
        let frame = renderer.render(set.epicycles(), set.tip(), &Trail::new(4));

        assert_eq!(frame.dimensions(), (160, 90));
        let tip_px = Viewport::new(renderer.config()).to_pixel(set.tip());
        assert_eq!(
            *frame.get_pixel(tip_px.x.round() as u32, tip_px.y.round() as u32),
            TIP_COLOR
        );
        assert!(frame.pixels().any(|p| *p == ARM_COLOR));
        assert!(frame.pixels().any(|p| *p == CIRCLE_COLOR));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = small_config();
        config.width = 0;
        assert!(FrameRenderer::new(config).is_err());
    }
}

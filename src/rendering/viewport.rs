//! World → pixel projection with aspect correction.

use glam::{DAffine2, DVec2, Vec2};

use crate::params::RenderConfig;

/// Maps epicycle world coordinates (y up) to image pixels (y down)
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    transform: DAffine2,
}

impl Viewport {
    /// Fit `world_extent` above and below `world_center` into the frame height
    ///
    /// Pixels are square, so the visible width follows the aspect ratio.
    pub fn new(config: &RenderConfig) -> Self {
        let pixels_per_unit = config.height as f64 / (2.0 * config.world_extent);
        let frame_center = DVec2::new(config.width as f64, config.height as f64) / 2.0;
        let world_center = DVec2::from_array(config.world_center);

        let transform = DAffine2::from_translation(frame_center)
            * DAffine2::from_scale(DVec2::new(pixels_per_unit, -pixels_per_unit))
            * DAffine2::from_translation(-world_center);

        Self { transform }
    }

    /// Pixel coordinates of a world point
    pub fn to_pixel(&self, world: DVec2) -> Vec2 {
        self.transform.transform_point2(world).as_vec2()
    }

    /// Pixel length of a world distance
    pub fn scale_length(&self, world: f64) -> f32 {
        (self.transform.matrix2.x_axis.x * world) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_maps_to_frame_center() {
        let config = RenderConfig::default();
        let viewport = Viewport::new(&config);

        let center = viewport.to_pixel(DVec2::from_array(config.world_center));
        assert_eq!(center, Vec2::new(640.0, 360.0));
    }

    #[test]
    fn test_y_axis_points_up() {
        let mut config = RenderConfig::default();
        config.world_center = [0.0, 0.0];
        config.world_extent = 1.0;
        let viewport = Viewport::new(&config);

        let top = viewport.to_pixel(DVec2::new(0.0, 1.0));
        assert_eq!(top, Vec2::new(640.0, 0.0));

        let right = viewport.to_pixel(DVec2::new(1.0, 0.0));
        assert_eq!(right, Vec2::new(1000.0, 360.0));
        assert_eq!(viewport.scale_length(0.5), 180.0);
    }
}

//! Closed 2D outlines sampled as complex signals.
//!
//! A point (x, y) becomes the complex sample x + iy, so the epicycle tip
//! redraws the outline instead of sliding along the real axis.

use glam::DVec2;
use rustfft::num_complex::Complex;
use std::f64::consts::{FRAC_PI_2, TAU};

/// Outline centroid. Must sit off the imaginary axis for the DC term to
/// normalize radii.
pub const SHAPE_CENTER: DVec2 = DVec2::new(1.0, 0.0);

/// Built-in closed outlines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Five-pointed star
    Star,

    /// Axis-aligned square
    Box,
}

impl Shape {
    /// Look up a shape by its CLI name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "star" => Some(Self::Star),
            "box" => Some(Self::Box),
            _ => None,
        }
    }

    /// Polygon corners in drawing order, centered on `SHAPE_CENTER`
    pub fn corners(&self) -> Vec<DVec2> {
        let local: Vec<DVec2> = match self {
            Shape::Star => (0..10)
                .map(|i| {
                    let radius = if i % 2 == 0 { 0.5 } else { 0.2 };
                    let angle = FRAC_PI_2 + TAU * i as f64 / 10.0;
                    DVec2::new(angle.cos(), angle.sin()) * radius
                })
                .collect(),
            Shape::Box => vec![
                DVec2::new(-0.4, -0.4),
                DVec2::new(0.4, -0.4),
                DVec2::new(0.4, 0.4),
                DVec2::new(-0.4, 0.4),
            ],
        };
        local.into_iter().map(|p| p + SHAPE_CENTER).collect()
    }

    /// `count` samples spaced evenly by arc length around the outline
    pub fn sample(&self, count: usize) -> Vec<Complex<f64>> {
        sample_closed_polygon(&self.corners(), count)
            .into_iter()
            .map(|p| Complex::new(p.x, p.y))
            .collect()
    }
}

/// Walk a closed polygon and emit `count` points at equal arc-length steps
pub fn sample_closed_polygon(corners: &[DVec2], count: usize) -> Vec<DVec2> {
    if corners.is_empty() || count == 0 {
        return Vec::new();
    }

    let edges: Vec<(DVec2, DVec2)> = corners
        .iter()
        .zip(corners.iter().cycle().skip(1))
        .map(|(&a, &b)| (a, b))
        .collect();
    let perimeter: f64 = edges.iter().map(|(a, b)| a.distance(*b)).sum();
    if perimeter == 0.0 {
        return vec![corners[0]; count];
    }

    let step = perimeter / count as f64;
    let mut samples = Vec::with_capacity(count);
    let mut edge_idx = 0;
    let mut walked = 0.0; // arc length before the current edge

    for s in 0..count {
        let target = s as f64 * step;

        // Advance to the edge containing `target`
        while edge_idx + 1 < edges.len() {
            let (a, b) = edges[edge_idx];
            let length = a.distance(b);
            if walked + length > target {
                break;
            }
            walked += length;
            edge_idx += 1;
        }

        let (a, b) = edges[edge_idx];
        let length = a.distance(b);
        let along = if length > 0.0 {
            ((target - walked) / length).clamp(0.0, 1.0)
        } else {
            0.0
        };
        samples.push(a.lerp(b, along));
    }

    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_samples_hit_corners() {
        // Perimeter 3.2, 8 samples → one every 0.4 (half an edge)
        let samples = sample_closed_polygon(&Shape::Box.corners(), 8);
        assert_eq!(samples.len(), 8);
        assert!((samples[0] - DVec2::new(0.6, -0.4)).length() < 1e-12);
        assert!((samples[2] - DVec2::new(1.4, -0.4)).length() < 1e-12);
        assert!((samples[4] - DVec2::new(1.4, 0.4)).length() < 1e-12);
    }

    #[test]
    fn test_shape_mean_is_center() {
        for shape in [Shape::Star, Shape::Box] {
            let samples = shape.sample(200);
            let mean = samples.iter().sum::<Complex<f64>>() / samples.len() as f64;
            assert!((mean.re - SHAPE_CENTER.x).abs() < 0.05, "{:?} mean {}", shape, mean);
            assert!(mean.im.abs() < 0.05);
        }
    }

    #[test]
    fn test_degenerate_polygons() {
        assert!(sample_closed_polygon(&[], 4).is_empty());
        assert_eq!(
            sample_closed_polygon(&[DVec2::ONE, DVec2::ONE], 3),
            vec![DVec2::ONE; 3]
        );
    }
}

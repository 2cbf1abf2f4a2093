//! Line geometry for circles, arms and the traced curve.

use glam::DVec2;
use std::f64::consts::TAU;

use crate::epicycle::Epicycle;

/// Closed outline of a circle (`segments + 1` points, last = first)
pub fn circle_outline(center: DVec2, radius: f64, segments: usize) -> Vec<DVec2> {
    (0..=segments)
        .map(|i| {
            let angle = TAU * (i % segments.max(1)) as f64 / segments.max(1) as f64;
            center + DVec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

/// Arm chain: every circle center in ordinal order, then the tip
pub fn arm_polyline(epicycles: &[Epicycle], tip: DVec2) -> Vec<DVec2> {
    epicycles
        .iter()
        .map(|e| e.position)
        .chain(std::iter::once(tip))
        .collect()
}

/// Index pairs joining consecutive polyline points (line-list topology)
pub fn line_indices(point_count: usize) -> Vec<u32> {
    (1..point_count as u32).flat_map(|i| [i - 1, i]).collect()
}

//! Epicycle descriptors built from DFT output and animated over time.

use glam::DVec2;
use rustfft::num_complex::Complex;
use std::f64::consts::TAU;

use super::indexer::{map_index, signed_frequency};
use crate::error::{EpicycleError, EpicycleResult, InvalidInput};

/// |real_0| at or below this cannot normalize radii
pub const DEGENERATE_DC_EPSILON: f64 = 1e-12;

/// One rotating circle in the chain
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Epicycle {
    /// DFT coefficient this circle reads
    pub bin_index: usize,

    /// Cycles per unit time (negative = clockwise)
    pub signed_frequency: i64,

    /// Normalized coefficient magnitude
    pub radius: f64,

    /// Coefficient angle in (-π, π]
    pub starting_phase: f64,

    /// Circle center at the last `update` time
    pub position: DVec2,
}

impl Epicycle {
    /// Signed frequency as a float, for renderers
    pub fn frequency(&self) -> f64 {
        self.signed_frequency as f64
    }

    /// Rotating arm of this circle at time `t`
    pub fn arm(&self, t: f64) -> DVec2 {
        let angle = self.starting_phase + self.signed_frequency as f64 * t;
        DVec2::new(angle.cos(), angle.sin()) * self.radius
    }
}

/// Ordered epicycle chain derived from one DFT output
#[derive(Debug, Clone)]
pub struct EpicycleSet {
    epicycles: Vec<Epicycle>,
    normal: f64,
    tip: DVec2,
}

impl EpicycleSet {
    /// Build the chain from bin-indexed DFT coefficients
    ///
    /// Radii are divided by twice the real part of the DC coefficient, so the
    /// chain fits a bounded region whatever the scale of the input signal.
    ///
    /// # Errors
    /// * `InvalidInput(Empty)` - no coefficients
    /// * `DegenerateNormalization` - DC real part is zero, tiny or non-finite
    pub fn new<T>(coefficients: &[Complex<T>]) -> EpicycleResult<Self>
    where
        T: Copy + Into<f64>,
    {
        let n = coefficients.len();
        if n == 0 {
            return Err(EpicycleError::InvalidInput(InvalidInput::Empty));
        }

        let dc_real: f64 = coefficients[0].re.into();
        if !dc_real.is_finite() || dc_real.abs() <= DEGENERATE_DC_EPSILON {
            return Err(EpicycleError::DegenerateNormalization { dc_real });
        }
        let normal = 2.0 * dc_real;

        let epicycles = (0..n)
            .map(|i| {
                let k = map_index(i, n);
                let re: f64 = coefficients[k].re.into();
                // +0.0 folds a -0.0 imaginary part, keeping atan2 off -π
                let im: f64 = Into::<f64>::into(coefficients[k].im) + 0.0;

                Epicycle {
                    bin_index: k,
                    signed_frequency: signed_frequency(k, n),
                    radius: re.hypot(im) / normal.abs(),
                    starting_phase: im.atan2(re),
                    position: DVec2::ZERO,
                }
            })
            .collect();

        tracing::debug!(count = n, normal, "built epicycle set");

        Ok(Self {
            epicycles,
            normal,
            tip: DVec2::ZERO,
        })
    }

    /// Build the chain, checking the slice holds exactly `n` coefficients
    pub fn with_len<T>(coefficients: &[Complex<T>], n: usize) -> EpicycleResult<Self>
    where
        T: Copy + Into<f64>,
    {
        if n == 0 {
            return Err(EpicycleError::InvalidInput(InvalidInput::Empty));
        }
        if coefficients.len() != n {
            return Err(EpicycleError::InvalidInput(InvalidInput::LengthMismatch {
                expected: n,
                actual: coefficients.len(),
            }));
        }
        Self::new(coefficients)
    }

    /// Recompute every circle center for time `t`
    ///
    /// Each position is the sum of all earlier circles' arms, never its own.
    /// Same `t` gives bit-identical output.
    pub fn update(&mut self, t: f64) -> &[Epicycle] {
        let mut cursor = DVec2::ZERO;
        for epicycle in &mut self.epicycles {
            epicycle.position = cursor;
            cursor += epicycle.arm(t);
        }
        self.tip = cursor;

        &self.epicycles
    }

    /// Point traced by the full chain at time `t` (positions untouched)
    pub fn trace_point(&self, t: f64) -> DVec2 {
        self.epicycles
            .iter()
            .fold(DVec2::ZERO, |cursor, epicycle| cursor + epicycle.arm(t))
    }

    /// Sample the traced curve over one full period `t ∈ [0, 2π)`
    pub fn trace_path(&self, steps: usize) -> Vec<DVec2> {
        (0..steps)
            .map(|s| self.trace_point(TAU * s as f64 / steps as f64))
            .collect()
    }

    /// Keep only the first `count` circles (clamped to `1..=len`)
    ///
    /// Ordinal order means this drops the highest |frequency| terms first.
    pub fn truncate(&mut self, count: usize) {
        let count = count.clamp(1, self.epicycles.len());
        self.epicycles.truncate(count);
    }

    /// Tip of the chain from the last `update`
    pub fn tip(&self) -> DVec2 {
        self.tip
    }

    /// Radius divisor (twice the DC real part)
    pub fn normal(&self) -> f64 {
        self.normal
    }

    pub fn epicycles(&self) -> &[Epicycle] {
        &self.epicycles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Epicycle> {
        self.epicycles.iter()
    }

    pub fn len(&self) -> usize {
        self.epicycles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.epicycles.is_empty()
    }
}

impl<'a> IntoIterator for &'a EpicycleSet {
    type Item = &'a Epicycle;
    type IntoIter = std::slice::Iter<'a, Epicycle>;

    fn into_iter(self) -> Self::IntoIter {
        self.epicycles.iter()
    }
}

//! Animation timing configuration.

use std::f64::consts::TAU;

/// Mapping from wall-clock seconds to epicycle time
#[derive(Debug, Clone)]
pub struct AnimationConfig {
    /// Epicycle time units per second (radians of the unit-frequency arm)
    /// Default: one full period every 8 seconds
    pub time_scale: f64,

    /// Keep only this many circles (None = all)
    pub circles: Option<usize>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            time_scale: TAU / 8.0,
            circles: None,
        }
    }
}

impl AnimationConfig {
    /// Epicycle time at `seconds` since start
    pub fn time_at(&self, seconds: f64) -> f64 {
        seconds * self.time_scale
    }

    /// Seconds needed for one full period
    pub fn period_secs(&self) -> f64 {
        TAU / self.time_scale
    }

    /// Validate configuration (finite, non-zero time scale)
    pub fn validate(&self) -> Result<(), String> {
        if !self.time_scale.is_finite() || self.time_scale == 0.0 {
            return Err(format!(
                "Time scale must be finite and non-zero, got {}",
                self.time_scale
            ));
        }
        if self.circles == Some(0) {
            return Err("Circle count must be > 0".to_string());
        }
        Ok(())
    }
}

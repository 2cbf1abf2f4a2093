//! Input signal configuration.

use crate::signal::SignalSource;

/// Signal sampling configuration
#[derive(Debug, Clone)]
pub struct SignalConfig {
    /// Samples per period = DFT size = number of epicycles
    pub sample_count: usize,

    /// Signal to sample
    pub source: SignalSource,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            sample_count: 64,
            source: SignalSource::default(),
        }
    }
}

impl SignalConfig {
    /// Validate configuration (at least one sample)
    pub fn validate(&self) -> Result<(), String> {
        if self.sample_count == 0 {
            return Err("Sample count must be > 0".to_string());
        }
        Ok(())
    }
}

//! Input signals and their forward DFT.
//!
//! Everything here only produces the coefficient array the epicycle engine
//! consumes; the engine itself never samples or transforms anything.

mod fft;
mod shape;
mod waveform;
mod wav;

use rustfft::num_complex::Complex;
use std::path::PathBuf;

use crate::error::SignalError;

// Re-export public types
pub use fft::{forward_dft, forward_dft_real};
pub use shape::{sample_closed_polygon, Shape, SHAPE_CENTER};
pub use waveform::Waveform;
pub use wav::load_wav;

/// Where the sampled signal comes from
#[derive(Debug, Clone, PartialEq)]
pub enum SignalSource {
    /// Real-valued periodic waveform
    Waveform(Waveform),

    /// Closed 2D outline (complex-valued)
    Shape(Shape),

    /// Audio file, mixed to mono
    Wav(PathBuf),
}

impl Default for SignalSource {
    fn default() -> Self {
        Self::Waveform(Waveform::default())
    }
}

impl SignalSource {
    /// Look up a built-in waveform or shape by name
    pub fn from_name(name: &str) -> Option<Self> {
        Waveform::from_name(name)
            .map(Self::Waveform)
            .or_else(|| Shape::from_name(name).map(Self::Shape))
    }

    /// Sample one period as complex values
    pub fn sample(&self, count: usize) -> Result<Vec<Complex<f64>>, SignalError> {
        if count == 0 {
            return Err(SignalError::ZeroSamples);
        }

        let samples = match self {
            SignalSource::Waveform(waveform) => to_complex(&waveform.sample(count)),
            SignalSource::Shape(shape) => shape.sample(count),
            SignalSource::Wav(path) => to_complex(&load_wav(path, count)?),
        };
        Ok(samples)
    }

    /// Sample one period and transform it
    pub fn coefficients(&self, count: usize) -> Result<Vec<Complex<f64>>, SignalError> {
        Ok(forward_dft(&self.sample(count)?))
    }
}

fn to_complex(samples: &[f64]) -> Vec<Complex<f64>> {
    samples.iter().map(|&s| Complex::new(s, 0.0)).collect()
}

//! Forward DFT producing bin-indexed coefficients.

use rustfft::{num_complex::Complex, FftPlanner};

/// Forward DFT of a complex signal (unnormalized, bin 0 = DC)
pub fn forward_dft(samples: &[Complex<f64>]) -> Vec<Complex<f64>> {
    if samples.is_empty() {
        return Vec::new();
    }

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(samples.len());
    let mut buffer = samples.to_vec();
    fft.process(&mut buffer);
    buffer
}

/// Forward DFT of a real signal
pub fn forward_dft_real(samples: &[f64]) -> Vec<Complex<f64>> {
    let complex: Vec<Complex<f64>> = samples.iter().map(|&s| Complex::new(s, 0.0)).collect();
    forward_dft(&complex)
}

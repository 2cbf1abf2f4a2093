//! Periodic test signals sampled over one period `x ∈ [0, 1)`.

/// Built-in real-valued test signals
///
/// All of them have a positive mean so the DC term can normalize radii.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Waveform {
    /// `x + x²`
    #[default]
    Quadratic,

    /// `x`
    Ramp,

    /// 1 for the first half period, 0 after
    Square,

    /// Rises 0 → 1 → 0
    Triangle,
}

impl Waveform {
    /// Look up a waveform by its CLI name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "quadratic" => Some(Self::Quadratic),
            "ramp" => Some(Self::Ramp),
            "square" => Some(Self::Square),
            "triangle" => Some(Self::Triangle),
            _ => None,
        }
    }

    /// Evaluate at phase `x` (one period is `[0, 1)`)
    pub fn value_at(&self, x: f64) -> f64 {
        match self {
            Waveform::Quadratic => x + x * x,
            Waveform::Ramp => x,
            Waveform::Square => {
                if x < 0.5 {
                    1.0
                } else {
                    0.0
                }
            }
            Waveform::Triangle => 1.0 - (2.0 * x - 1.0).abs(),
        }
    }

    /// `count` evenly spaced samples of one period
    pub fn sample(&self, count: usize) -> Vec<f64> {
        (0..count)
            .map(|i| self.value_at(i as f64 / count as f64))
            .collect()
    }
}

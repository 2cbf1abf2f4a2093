//! Error types for epicycle construction and signal loading.

/// Why a coefficient array was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    /// No coefficients at all (N = 0)
    #[error("coefficient array is empty")]
    Empty,

    /// Declared N does not match the slice length
    #[error("expected {expected} coefficients, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Epicycle engine error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EpicycleError {
    #[error("invalid input: {0}")]
    InvalidInput(InvalidInput),

    #[error("DC coefficient real part {dc_real} cannot normalize radii")]
    DegenerateNormalization { dc_real: f64 },

    #[error("ordinal {ordinal} out of range for {len} epicycles")]
    OutOfRangeOrdinal { ordinal: usize, len: usize },
}

/// Signal loading error types
#[derive(Debug, thiserror::Error)]
pub enum SignalError {
    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    #[error("WAV file contains no samples")]
    EmptyWav,

    #[error("sample count must be > 0")]
    ZeroSamples,
}

pub type EpicycleResult<T> = Result<T, EpicycleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_problem() {
        let err = EpicycleError::InvalidInput(InvalidInput::LengthMismatch {
            expected: 8,
            actual: 6,
        });
        assert_eq!(err.to_string(), "invalid input: expected 8 coefficients, got 6");

        let err = EpicycleError::OutOfRangeOrdinal { ordinal: 4, len: 4 };
        assert!(err.to_string().contains("ordinal 4"));
    }
}

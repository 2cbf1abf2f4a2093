//! WAV file input, mixed to mono and resampled to a fixed length.

use std::path::Path;

use crate::error::SignalError;

/// Load `count` samples spanning the whole file
///
/// Channels are averaged, then each value is mapped from [-1, 1] to [0, 1].
/// Audio is roughly zero-mean; the shift gives it a DC term that can
/// normalize radii.
pub fn load_wav(path: impl AsRef<Path>, count: usize) -> Result<Vec<f64>, SignalError> {
    if count == 0 {
        return Err(SignalError::ZeroSamples);
    }

    let mut reader = hound::WavReader::open(path.as_ref())?;
    let spec = reader.spec();
    let channels = spec.channels.max(1) as usize;

    let interleaved: Vec<f64> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map(f64::from))
            .collect::<Result<Vec<f64>, _>>()?,
        hound::SampleFormat::Int => {
            let full_scale = (1i64 << (spec.bits_per_sample.max(1) - 1)) as f64;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f64 / full_scale))
                .collect::<Result<Vec<f64>, _>>()?
        }
    };

    let mono: Vec<f64> = interleaved
        .chunks(channels)
        .map(|frame| frame.iter().sum::<f64>() / frame.len() as f64)
        .collect();

    if mono.is_empty() {
        return Err(SignalError::EmptyWav);
    }

    tracing::info!(
        path = %path.as_ref().display(),
        frames = mono.len(),
        sample_rate = spec.sample_rate,
        "loaded WAV signal"
    );

    Ok(resample(&mono, count)
        .into_iter()
        .map(|s| (s.clamp(-1.0, 1.0) + 1.0) / 2.0)
        .collect())
}

/// Nearest-sample pick of `count` evenly spaced values
fn resample(samples: &[f64], count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| samples[i * samples.len() / count])
        .collect()
}

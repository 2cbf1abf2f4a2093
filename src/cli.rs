//! Command-line argument parsing.

use clap::Parser;
use std::path::PathBuf;

use crate::params::{AnimationConfig, RecordingConfig, RenderConfig, SignalConfig};
use crate::signal::{SignalSource, Waveform};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "epicycles")]
#[command(about = "Fourier epicycle animator", long_about = None)]
pub struct Args {
    /// Signal: quadratic (default), ramp, square, triangle, star, box
    #[arg(long, value_name = "NAME", default_value = "quadratic")]
    pub signal: String,

    /// Load the signal from a WAV file instead (overrides --signal)
    #[arg(long, value_name = "PATH")]
    pub wav: Option<PathBuf>,

    /// Samples per period (= number of circles)
    #[arg(long, value_name = "N", default_value_t = 64)]
    pub samples: usize,

    /// Keep only the first N circles
    #[arg(long, value_name = "N")]
    pub circles: Option<usize>,

    /// Print every circle at this epicycle time and exit
    #[arg(long, value_name = "T", allow_negative_numbers = true)]
    pub time: Option<f64>,

    /// Record frames to PNG (duration in seconds)
    #[arg(long, value_name = "SECONDS")]
    pub record: Option<f32>,

    /// Seconds per full period of the animation
    #[arg(long, value_name = "SECONDS", default_value_t = 8.0)]
    pub period: f64,

    /// Recording frame rate
    #[arg(long, default_value_t = 30)]
    pub fps: u32,

    /// Recording output directory
    #[arg(long, value_name = "DIR", default_value = "recording")]
    pub output: PathBuf,

    /// Frame width (pixels)
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    /// Frame height (pixels)
    #[arg(long, default_value_t = 720)]
    pub height: u32,
}

impl Args {
    /// Parse signal source from command-line arguments
    pub fn parse_signal_source(&self) -> SignalSource {
        if let Some(path) = &self.wav {
            tracing::info!(path = %path.display(), "signal: WAV file");
            return SignalSource::Wav(path.clone());
        }

        match SignalSource::from_name(&self.signal) {
            Some(source) => {
                tracing::info!(?source, "signal: built-in");
                source
            }
            None => {
                tracing::warn!("Unknown signal '{}', using quadratic", self.signal);
                SignalSource::Waveform(Waveform::Quadratic)
            }
        }
    }

    pub fn signal_config(&self) -> SignalConfig {
        SignalConfig {
            sample_count: self.samples,
            source: self.parse_signal_source(),
        }
    }

    pub fn animation_config(&self) -> AnimationConfig {
        AnimationConfig {
            time_scale: std::f64::consts::TAU / self.period,
            circles: self.circles,
        }
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            width: self.width,
            height: self.height,
            ..RenderConfig::default()
        }
    }

    /// Create recording configuration if recording mode is enabled
    ///
    /// Validates it, then creates the frame directory.
    pub fn create_recording_config(&self) -> Result<Option<RecordingConfig>, String> {
        let Some(duration) = self.record else {
            return Ok(None);
        };

        let mut config = RecordingConfig::new(duration);
        config.output_dir = self.output.clone();
        config.fps = self.fps;

        config
            .validate()
            .map_err(|e| format!("Invalid recording config: {}", e))?;

        std::fs::create_dir_all(config.frames_dir()).map_err(|e| {
            format!(
                "Failed to create {}: {}",
                config.frames_dir().display(),
                e
            )
        })?;
        Ok(Some(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["epicycles"]);
        assert_eq!(args.samples, 64);
        assert_eq!(args.parse_signal_source(), SignalSource::default());
        assert!(args.create_recording_config().unwrap().is_none());
        assert!((args.animation_config().period_secs() - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_signal_falls_back() {
        let args = Args::parse_from(["epicycles", "--signal", "sine"]);
        assert_eq!(
            args.parse_signal_source(),
            SignalSource::Waveform(Waveform::Quadratic)
        );
    }

    #[test]
    fn test_wav_overrides_signal() {
        let args = Args::parse_from(["epicycles", "--signal", "star", "--wav", "in.wav"]);
        assert_eq!(
            args.parse_signal_source(),
            SignalSource::Wav(PathBuf::from("in.wav"))
        );
    }

    #[test]
    fn test_invalid_recording_creates_nothing() {
        let output = std::env::temp_dir().join("epicycles_test_zero_record");
        let _ = std::fs::remove_dir_all(&output);
        let output_arg = output.to_string_lossy().into_owned();

        let args = Args::parse_from(["epicycles", "--record", "0", "--output", &output_arg]);
        assert!(args.create_recording_config().is_err());
        assert!(!output.exists());

        let args = Args::parse_from(["epicycles", "--record", "0.5", "--output", &output_arg]);
        let config = args.create_recording_config().unwrap().unwrap();
        assert!(config.frames_dir().is_dir());

        let _ = std::fs::remove_dir_all(&output);
    }

    #[test]
    fn test_negative_time_parses() {
        let args = Args::parse_from(["epicycles", "--time", "-1.5", "--circles", "5"]);
        assert_eq!(args.time, Some(-1.5));
        assert_eq!(args.animation_config().circles, Some(5));
    }
}

//! Epicycles - nested rotating circles redrawing a signal
//!
//! Samples a signal, transforms it, and either prints the circle chain at one
//! instant or records an animation as PNG frames.

use clap::Parser;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use epicycles::cli::Args;
use epicycles::epicycle::EpicycleSet;
use epicycles::params::{AnimationConfig, RecordingConfig};
use epicycles::rendering::{FrameRenderer, Trail};

/// Recording state
struct App {
    epicycles: EpicycleSet,
    animation: AnimationConfig,
    renderer: FrameRenderer,
    trail: Trail,
}

impl App {
    fn new(epicycles: EpicycleSet, animation: AnimationConfig, renderer: FrameRenderer) -> Self {
        let trail = Trail::new(renderer.config().trail_length);
        Self {
            epicycles,
            animation,
            renderer,
            trail,
        }
    }

    /// Advance to `frame_num` and write it to disk
    fn render_frame(
        &mut self,
        frame_num: usize,
        recording: &RecordingConfig,
    ) -> Result<(), image::ImageError> {
        let t = self.animation.time_at(recording.frame_time(frame_num));

        self.epicycles.update(t);
        let tip = self.epicycles.tip();
        self.trail.push(tip);

        self.renderer.render_to_file(
            self.epicycles.epicycles(),
            tip,
            &self.trail,
            &recording.frame_path(frame_num),
        )
    }

    fn record(&mut self, recording: &RecordingConfig) -> Result<(), image::ImageError> {
        let total = recording.total_frames();
        let start = Instant::now();

        for frame_num in 0..total {
            self.render_frame(frame_num, recording)?;
            if frame_num % recording.fps.max(1) as usize == 0 {
                tracing::debug!(frame_num, total, "frame written");
            }
        }

        tracing::info!(
            frames = total,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "recording finished"
        );
        println!(
            "Wrote {} frames to {}",
            total,
            recording.frames_dir().display()
        );
        Ok(())
    }
}

/// Print every circle at epicycle time `t`
fn print_table(epicycles: &mut EpicycleSet, t: f64) {
    println!(
        "{:>4} {:>5} {:>5} {:>10} {:>10} {:>10} {:>10}",
        "ord", "bin", "freq", "radius", "phase", "x", "y"
    );
    for (i, e) in epicycles.update(t).iter().enumerate() {
        println!(
            "{:>4} {:>5} {:>5} {:>10.6} {:>10.6} {:>10.6} {:>10.6}",
            i, e.bin_index, e.signed_frequency, e.radius, e.starting_phase, e.position.x, e.position.y
        );
    }
    let tip = epicycles.tip();
    println!("tip at t={}: ({:.6}, {:.6})", t, tip.x, tip.y);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let signal = args.signal_config();
    signal.validate()?;
    let animation = args.animation_config();
    animation.validate()?;

    let coefficients = signal.source.coefficients(signal.sample_count)?;
    let mut epicycles = EpicycleSet::new(&coefficients)?;
    if let Some(circles) = animation.circles {
        epicycles.truncate(circles);
    }
    tracing::info!(
        circles = epicycles.len(),
        normal = epicycles.normal(),
        "epicycles ready"
    );

    match args.create_recording_config()? {
        Some(recording) => {
            let renderer = FrameRenderer::new(args.render_config())?;
            App::new(epicycles, animation, renderer).record(&recording)?;
        }
        None => print_table(&mut epicycles, args.time.unwrap_or(0.0)),
    }

    Ok(())
}

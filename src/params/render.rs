//! Rendering and recording configuration.

use std::path::PathBuf;

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Frame width (pixels)
    pub width: u32,

    /// Frame height (pixels)
    pub height: u32,

    /// Line segments per circle outline
    pub circle_segments: usize,

    /// Tip positions kept for the traced curve
    pub trail_length: usize,

    /// Half-height of the visible world region (world units)
    /// Radii are normalized so the DC circle has radius 0.5
    pub world_extent: f64,

    /// World point drawn at the frame center
    pub world_center: [f64; 2],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            circle_segments: 64,
            trail_length: 480,
            world_extent: 1.2,
            world_center: [0.5, 0.0], // Middle of a real signal's sweep
        }
    }
}

impl RenderConfig {
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Validate configuration (non-empty frame, usable outlines)
    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "Frame size must be non-zero, got {}x{}",
                self.width, self.height
            ));
        }
        if self.circle_segments < 3 {
            return Err(format!(
                "Circle outlines need at least 3 segments, got {}",
                self.circle_segments
            ));
        }
        if self.world_extent.is_nan() || self.world_extent <= 0.0 {
            return Err("World extent must be > 0".to_string());
        }
        Ok(())
    }
}

/// Recording mode configuration
#[derive(Debug, Clone)]
pub struct RecordingConfig {
    /// Duration to record (seconds)
    pub duration_secs: f32,

    /// Output directory for frames
    pub output_dir: PathBuf,

    /// Frame rate (FPS)
    pub fps: u32,
}

impl RecordingConfig {
    pub fn new(duration_secs: f32) -> Self {
        Self {
            duration_secs,
            output_dir: PathBuf::from("recording"),
            fps: 30,
        }
    }

    /// Total number of frames to capture
    pub fn total_frames(&self) -> usize {
        (self.duration_secs * self.fps as f32).ceil() as usize
    }

    /// Wall-clock time of frame `frame_num` (seconds)
    pub fn frame_time(&self, frame_num: usize) -> f64 {
        frame_num as f64 / self.fps as f64
    }

    /// Frame directory path
    pub fn frames_dir(&self) -> PathBuf {
        self.output_dir.join("frames")
    }

    /// PNG path for frame `frame_num`
    pub fn frame_path(&self, frame_num: usize) -> PathBuf {
        self.frames_dir().join(format!("frame_{:05}.png", frame_num))
    }

    /// Validate configuration (positive duration and frame rate)
    pub fn validate(&self) -> Result<(), String> {
        if self.duration_secs.is_nan() || self.duration_secs <= 0.0 {
            return Err(format!(
                "Recording duration must be > 0, got {}",
                self.duration_secs
            ));
        }
        if self.fps == 0 {
            return Err("Frame rate must be > 0".to_string());
        }
        Ok(())
    }
}

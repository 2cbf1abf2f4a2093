//! Epicycles library - Fourier epicycle decomposition and animation

pub mod cli;
pub mod epicycle;
pub mod error;
pub mod params;
pub mod rendering;
pub mod signal;

//! Modality analyzers
//!
//! This module provides the three metric producers feeding the risk
//! aggregator: simulated video and audio analysis, and the deterministic
//! health-record evaluation.

mod audio;
mod health;
mod video;

pub use audio::AudioAnalyzer;
pub use health::HealthEvaluator;
pub use video::VideoAnalyzer;

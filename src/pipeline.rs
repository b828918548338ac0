//! Pipeline orchestration
//!
//! This module provides the public API for NeoMind. It orchestrates a full
//! screening run: intake validation → modality analysis → risk aggregation →
//! recommendation generation → report encoding.

use crate::analyzers::{AudioAnalyzer, HealthEvaluator, VideoAnalyzer};
use crate::error::ScreenError;
use crate::intake::IntakeRecord;
use crate::recommend::RecommendationGenerator;
use crate::report::{ReportEncoder, ScreeningReport};
use crate::risk::{JitterSource, RandomJitter, RiskAggregator};
use crate::types::{AudioReport, HealthReport, RecommendationSet, RiskAssessment, VideoReport};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Run the two core stages on pre-built modality reports.
///
/// Pure function of its inputs plus the jitter source; suitable for callers
/// that produce their own reports or need deterministic scoring.
pub fn screen(
    video: &VideoReport,
    audio: &AudioReport,
    health: &HealthReport,
    jitter: &mut dyn JitterSource,
) -> (RiskAssessment, RecommendationSet) {
    let assessment = RiskAggregator::compute(video, audio, health, jitter);
    let recommendations = RecommendationGenerator::generate(&assessment);
    (assessment, recommendations)
}

/// Stateful engine for running complete screenings.
///
/// Owns the randomness for the simulated metric producers and the score
/// jitter. Each run allocates a fresh report; the engine keeps no per-subject
/// state, so session storage belongs to the caller.
pub struct ScreeningEngine {
    rng: StdRng,
    encoder: ReportEncoder,
}

impl Default for ScreeningEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreeningEngine {
    /// Create an engine seeded from the OS
    pub fn new() -> Self {
        ScreeningEngine {
            rng: StdRng::from_os_rng(),
            encoder: ReportEncoder::new(),
        }
    }

    /// Create a fully deterministic engine from a seed
    pub fn seeded(seed: u64) -> Self {
        ScreeningEngine {
            rng: StdRng::seed_from_u64(seed),
            encoder: ReportEncoder::new(),
        }
    }

    /// Run one complete screening from an intake record
    pub fn run(&mut self, record: &IntakeRecord) -> Result<ScreeningReport, ScreenError> {
        record.validate()?;

        let video = VideoAnalyzer::analyze(&mut self.rng);
        let audio = AudioAnalyzer::analyze(&mut self.rng);
        let health = HealthEvaluator::evaluate(&record.health);

        let mut jitter = RandomJitter::from_rng(&mut self.rng);
        let (assessment, recommendations) = screen(&video, &audio, &health, &mut jitter);

        let analysis_id = format!("NM{}", self.rng.random_range(10000..=99999));

        Ok(self.encoder.encode(
            analysis_id,
            Utc::now(),
            record.subject.clone(),
            video,
            audio,
            health,
            assessment,
            recommendations,
        ))
    }
}

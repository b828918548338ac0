//! Simulated audio metric producer
//!
//! Stands in for a vocalization-analysis pipeline. Pattern metrics and
//! spectral features are sampled from fixed sub-ranges; only the output
//! contract matters downstream. At most three indicators per report.

use crate::types::{AudioMetrics, AudioReport, SpectralFeatures};
use rand::Rng;

/// Minimum pitch variability before an indicator is emitted
const PITCH_VARIABILITY_THRESHOLD: f64 = 0.25;
/// Minimum cry rhythm consistency before an indicator is emitted
const CRY_RHYTHM_THRESHOLD: f64 = 0.3;
/// Minimum vocalization complexity before an indicator is emitted
const VOCALIZATION_COMPLEXITY_THRESHOLD: f64 = 0.35;

/// Audio metric producer
pub struct AudioAnalyzer;

impl AudioAnalyzer {
    /// Produce an audio report from an injected randomness source
    pub fn analyze<R: Rng + ?Sized>(rng: &mut R) -> AudioReport {
        let metrics = AudioMetrics {
            duration_seconds: rng.random_range(3.0..15.0),
            pitch_variability: rng.random_range(0.1..0.9),
            cry_rhythm_consistency: rng.random_range(0.3..0.95),
            vocalization_complexity: rng.random_range(0.2..0.9),
            spectral_features: SpectralFeatures {
                pitch_mean: rng.random_range(150.0..350.0),
                spectral_centroid: rng.random_range(1000.0..3000.0),
                mfcc_variance: rng.random_range(0.2..2.5),
            },
        };

        let risk_indicators = Self::risk_indicators(&metrics);
        let summary = format!(
            "Audio analysis complete: {} vocal pattern concerns",
            risk_indicators.len()
        );

        AudioReport {
            metrics,
            risk_indicators,
            summary,
        }
    }

    fn risk_indicators(metrics: &AudioMetrics) -> Vec<String> {
        let mut risks = Vec::new();

        if metrics.pitch_variability < PITCH_VARIABILITY_THRESHOLD {
            risks.push("Monotonous vocal patterns".to_string());
        }
        if metrics.cry_rhythm_consistency < CRY_RHYTHM_THRESHOLD {
            risks.push("Atypical cry rhythm".to_string());
        }
        if metrics.vocalization_complexity < VOCALIZATION_COMPLEXITY_THRESHOLD {
            risks.push("Limited vocal complexity".to_string());
        }

        risks
    }
}

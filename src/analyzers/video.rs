//! Simulated video metric producer
//!
//! Stands in for a computer-vision pipeline. Metrics are sampled from fixed
//! sub-ranges of [0, 1]; only the output contract matters downstream. Risk
//! indicators are emitted when a metric falls below its fixed threshold, so
//! at most three indicators are produced per report.

use crate::types::{VideoMetrics, VideoReport};
use rand::Rng;

/// Minimum eye contact score before an indicator is emitted
const EYE_CONTACT_THRESHOLD: f64 = 0.4;
/// Minimum motor coordination score before an indicator is emitted
const MOTOR_COORDINATION_THRESHOLD: f64 = 0.35;
/// Minimum facial expressivity score before an indicator is emitted
const FACIAL_EXPRESSIVITY_THRESHOLD: f64 = 0.45;

/// Video metric producer
pub struct VideoAnalyzer;

impl VideoAnalyzer {
    /// Produce a video report from an injected randomness source.
    ///
    /// Each metric is sampled independently from its documented sub-range.
    pub fn analyze<R: Rng + ?Sized>(rng: &mut R) -> VideoReport {
        let metrics = VideoMetrics {
            eye_contact_score: rng.random_range(0.2..0.95),
            gaze_following: rng.random_range(0.3..0.9),
            facial_expressivity: rng.random_range(0.4..0.95),
            motor_coordination: rng.random_range(0.25..0.9),
            limb_symmetry: rng.random_range(0.6..0.98),
            movement_smoothness: rng.random_range(0.5..0.95),
        };

        let risk_indicators = Self::risk_indicators(&metrics);
        let summary = format!(
            "Video analysis complete: {} potential markers found",
            risk_indicators.len()
        );

        VideoReport {
            metrics,
            risk_indicators,
            summary,
        }
    }

    /// Threshold checks on a fixed metric set
    fn risk_indicators(metrics: &VideoMetrics) -> Vec<String> {
        let mut risks = Vec::new();

        if metrics.eye_contact_score < EYE_CONTACT_THRESHOLD {
            risks.push("Reduced eye contact detected".to_string());
        }
        if metrics.motor_coordination < MOTOR_COORDINATION_THRESHOLD {
            risks.push("Motor coordination concerns".to_string());
        }
        if metrics.facial_expressivity < FACIAL_EXPRESSIVITY_THRESHOLD {
            risks.push("Limited facial expressions".to_string());
        }

        risks
    }
}

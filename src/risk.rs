//! Risk aggregation
//!
//! Combines the three modality reports into per-disorder risk scores, an
//! overall tier, and component fractions. The weighted combination is fully
//! deterministic; the only randomness is the jitter factor, injected through
//! [`JitterSource`] so tests can pin it to zero.

use crate::types::{
    AudioReport, Disorder, HealthReport, RiskAssessment, RiskComponents, RiskTier, VideoReport,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

/// Maximum indicator count the video producer is calibrated against
const VIDEO_INDICATOR_DENOMINATOR: f64 = 5.0;
/// Maximum indicator count the audio producer is calibrated against
const AUDIO_INDICATOR_DENOMINATOR: f64 = 3.0;
/// Risk-factor count at which health risk saturates
const HEALTH_FACTOR_DENOMINATOR: f64 = 5.0;

/// Overall risk is High above this score
const HIGH_TIER_THRESHOLD: f64 = 0.7;
/// Overall risk is Medium above this score
const MEDIUM_TIER_THRESHOLD: f64 = 0.4;

/// Source of the bounded multiplicative jitter applied to each weighted base.
///
/// Implementations return a factor delta in `[lo, hi]`; the aggregator
/// multiplies the base score by `1 + delta`.
pub trait JitterSource {
    fn draw(&mut self, lo: f64, hi: f64) -> f64;
}

/// Jitter source that always returns zero, for deterministic scoring
pub struct NoJitter;

impl JitterSource for NoJitter {
    fn draw(&mut self, _lo: f64, _hi: f64) -> f64 {
        0.0
    }
}

/// Jitter source backed by a seedable RNG
pub struct RandomJitter {
    rng: StdRng,
}

impl RandomJitter {
    /// Create a jitter source seeded from the OS
    pub fn new() -> Self {
        RandomJitter {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a deterministic jitter source from a seed
    pub fn seeded(seed: u64) -> Self {
        RandomJitter {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Fork a jitter source from an existing RNG
    pub fn from_rng<R: Rng>(rng: &mut R) -> Self {
        RandomJitter {
            rng: StdRng::from_rng(rng),
        }
    }
}

impl Default for RandomJitter {
    fn default() -> Self {
        Self::new()
    }
}

impl JitterSource for RandomJitter {
    fn draw(&mut self, lo: f64, hi: f64) -> f64 {
        self.rng.random_range(lo..=hi)
    }
}

/// Fixed per-disorder calibration: weight triple (summing to 1.0), score cap,
/// and jitter bounds
struct DisorderWeights {
    video: f64,
    audio: f64,
    health: f64,
    cap: f64,
    jitter_lo: f64,
    jitter_hi: f64,
}

/// Fixed calibration constants; they have no documented clinical basis.
fn weights(disorder: Disorder) -> DisorderWeights {
    match disorder {
        Disorder::Asd => DisorderWeights {
            video: 0.5,
            audio: 0.3,
            health: 0.2,
            cap: 0.95,
            jitter_lo: -0.1,
            jitter_hi: 0.1,
        },
        Disorder::Adhd => DisorderWeights {
            video: 0.3,
            audio: 0.4,
            health: 0.3,
            cap: 0.9,
            jitter_lo: -0.1,
            jitter_hi: 0.1,
        },
        Disorder::DownSyndrome => DisorderWeights {
            video: 0.2,
            audio: 0.2,
            health: 0.6,
            cap: 0.85,
            jitter_lo: -0.05,
            jitter_hi: 0.15,
        },
        Disorder::DevelopmentalDelay => DisorderWeights {
            video: 0.4,
            audio: 0.4,
            health: 0.2,
            cap: 0.92,
            jitter_lo: -0.1,
            jitter_hi: 0.1,
        },
    }
}

/// Round to 3 decimal places
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Risk aggregator combining the three modality reports
pub struct RiskAggregator;

impl RiskAggregator {
    /// Compute a risk assessment from the three modality reports.
    ///
    /// Pure function of its inputs plus the jitter source; callers guarantee
    /// the reports are well formed.
    pub fn compute(
        video: &VideoReport,
        audio: &AudioReport,
        health: &HealthReport,
        jitter: &mut dyn JitterSource,
    ) -> RiskAssessment {
        let video_risk = video.risk_indicators.len() as f64 / VIDEO_INDICATOR_DENOMINATOR;
        let audio_risk = audio.risk_indicators.len() as f64 / AUDIO_INDICATOR_DENOMINATOR;
        let health_risk =
            (health.total_risk_factors as f64 / HEALTH_FACTOR_DENOMINATOR).min(1.0);

        let mut risk_scores = BTreeMap::new();
        let mut explanations = BTreeMap::new();

        for disorder in Disorder::ALL {
            let w = weights(disorder);
            let base = video_risk * w.video + audio_risk * w.audio + health_risk * w.health;
            let jittered = base * (1.0 + jitter.draw(w.jitter_lo, w.jitter_hi));
            risk_scores.insert(disorder, round3(jittered.min(w.cap)));
            explanations.insert(disorder, Self::explanation(disorder, video));
        }

        let max_score = risk_scores.values().copied().fold(0.0_f64, f64::max);
        let overall_risk = if max_score > HIGH_TIER_THRESHOLD {
            RiskTier::High
        } else if max_score > MEDIUM_TIER_THRESHOLD {
            RiskTier::Medium
        } else {
            RiskTier::Low
        };

        RiskAssessment {
            risk_scores,
            overall_risk,
            explanations,
            components: RiskComponents {
                video_risk: round3(video_risk),
                audio_risk: round3(audio_risk),
                health_risk: round3(health_risk),
            },
        }
    }

    fn explanation(disorder: Disorder, video: &VideoReport) -> String {
        match disorder {
            Disorder::Asd => format!(
                "Based on {} behavioral markers",
                video.risk_indicators.len()
            ),
            Disorder::Adhd => "Primarily from activity and attention patterns".to_string(),
            Disorder::DownSyndrome => "Health markers and physical features analysis".to_string(),
            Disorder::DevelopmentalDelay => {
                "Overall developmental progress assessment".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AudioMetrics, SpectralFeatures, VideoMetrics};

    fn video_report(indicator_count: usize) -> VideoReport {
        VideoReport {
            metrics: VideoMetrics {
                eye_contact_score: 0.5,
                gaze_following: 0.5,
                facial_expressivity: 0.5,
                motor_coordination: 0.5,
                limb_symmetry: 0.8,
                movement_smoothness: 0.7,
            },
            risk_indicators: vec!["marker".to_string(); indicator_count],
            summary: String::new(),
        }
    }

    fn audio_report(indicator_count: usize) -> AudioReport {
        AudioReport {
            metrics: AudioMetrics {
                duration_seconds: 8.0,
                pitch_variability: 0.5,
                cry_rhythm_consistency: 0.6,
                vocalization_complexity: 0.5,
                spectral_features: SpectralFeatures {
                    pitch_mean: 220.0,
                    spectral_centroid: 1800.0,
                    mfcc_variance: 1.0,
                },
            },
            risk_indicators: vec!["concern".to_string(); indicator_count],
            summary: String::new(),
        }
    }

    fn health_report(factor_count: usize) -> HealthReport {
        HealthReport {
            risk_factors: vec!["factor".to_string(); factor_count],
            protective_factors: vec![],
            total_risk_factors: factor_count,
        }
    }

    /// Fixed jitter for exercising the multiplicative path
    struct FixedJitter(f64);

    impl JitterSource for FixedJitter {
        fn draw(&mut self, lo: f64, hi: f64) -> f64 {
            assert!(self.0 >= lo && self.0 <= hi);
            self.0
        }
    }

    #[test]
    fn test_component_fractions() {
        let assessment = RiskAggregator::compute(
            &video_report(2),
            &audio_report(1),
            &health_report(3),
            &mut NoJitter,
        );

        assert_eq!(assessment.components.video_risk, 0.4);
        assert_eq!(assessment.components.audio_risk, round3(1.0 / 3.0));
        assert_eq!(assessment.components.health_risk, 0.6);
    }

    #[test]
    fn test_health_risk_saturates_at_one() {
        let assessment = RiskAggregator::compute(
            &video_report(0),
            &audio_report(0),
            &health_report(9),
            &mut NoJitter,
        );

        assert_eq!(assessment.components.health_risk, 1.0);
    }

    #[test]
    fn test_weighted_base_with_zero_jitter() {
        // video_risk = 0.4, audio_risk = 0.0, health_risk = 0.4
        let assessment = RiskAggregator::compute(
            &video_report(2),
            &audio_report(0),
            &health_report(2),
            &mut NoJitter,
        );

        // ASD = 0.5*0.4 + 0.3*0 + 0.2*0.4 = 0.28
        assert_eq!(assessment.risk_scores[&Disorder::Asd], 0.28);
        // ADHD = 0.3*0.4 + 0.4*0 + 0.3*0.4 = 0.24
        assert_eq!(assessment.risk_scores[&Disorder::Adhd], 0.24);
        // Down = 0.2*0.4 + 0.2*0 + 0.6*0.4 = 0.32
        assert_eq!(assessment.risk_scores[&Disorder::DownSyndrome], 0.32);
        // DD = 0.4*0.4 + 0.4*0 + 0.2*0.4 = 0.24
        assert_eq!(assessment.risk_scores[&Disorder::DevelopmentalDelay], 0.24);
    }

    #[test]
    fn test_end_to_end_scenario() {
        // video_risk = 0.6 (3/5), audio_risk = 0.0, health_risk = 1.0
        let assessment = RiskAggregator::compute(
            &video_report(3),
            &audio_report(0),
            &health_report(5),
            &mut NoJitter,
        );

        // ASD = 0.5*0.6 + 0.2*1.0 = 0.50
        assert_eq!(assessment.risk_scores[&Disorder::Asd], 0.5);
        // Down = 0.2*0.6 + 0.6*1.0 = 0.72, below the 0.85 cap
        assert_eq!(assessment.risk_scores[&Disorder::DownSyndrome], 0.72);
        // max = 0.72 > 0.7
        assert_eq!(assessment.overall_risk, RiskTier::High);
    }

    #[test]
    fn test_scores_capped_per_disorder() {
        // All fractions at maximum, jitter at the top of each range
        let assessment = RiskAggregator::compute(
            &video_report(5),
            &audio_report(3),
            &health_report(5),
            &mut FixedJitter(0.1),
        );

        assert_eq!(assessment.risk_scores[&Disorder::Asd], 0.95);
        assert_eq!(assessment.risk_scores[&Disorder::Adhd], 0.9);
        assert_eq!(assessment.risk_scores[&Disorder::DevelopmentalDelay], 0.92);
        // Down Syndrome draws 0.1 from its -0.05..0.15 range and still caps
        assert_eq!(assessment.risk_scores[&Disorder::DownSyndrome], 0.85);
    }

    #[test]
    fn test_jitter_is_multiplicative() {
        let assessment = RiskAggregator::compute(
            &video_report(2),
            &audio_report(0),
            &health_report(2),
            &mut FixedJitter(0.05),
        );

        // ASD base 0.28 * 1.05 = 0.294
        assert_eq!(assessment.risk_scores[&Disorder::Asd], 0.294);
    }

    /// Jitter applied without range checks, for hitting exact tier boundaries
    struct UnboundedJitter(f64);

    impl JitterSource for UnboundedJitter {
        fn draw(&mut self, _lo: f64, _hi: f64) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_medium_tier_boundary_is_strict() {
        // video_risk = 0.8, others 0: max score is ASD = 0.5*0.8 = 0.400
        let at_boundary = RiskAggregator::compute(
            &video_report(4),
            &audio_report(0),
            &health_report(0),
            &mut NoJitter,
        );
        assert_eq!(at_boundary.risk_scores[&Disorder::Asd], 0.4);
        assert_eq!(at_boundary.overall_risk, RiskTier::Low);

        // Nudge ASD just above 0.4 -> Medium
        let above = RiskAggregator::compute(
            &video_report(4),
            &audio_report(0),
            &health_report(0),
            &mut FixedJitter(0.01),
        );
        assert_eq!(above.risk_scores[&Disorder::Asd], 0.404);
        assert_eq!(above.overall_risk, RiskTier::Medium);
    }

    #[test]
    fn test_high_tier_boundary_is_strict() {
        // health_risk = 1.0, others 0: Down base 0.6; jitter 1/6 lands the
        // rounded score exactly on 0.700
        let at_boundary = RiskAggregator::compute(
            &video_report(0),
            &audio_report(0),
            &health_report(5),
            &mut UnboundedJitter(1.0 / 6.0),
        );
        assert_eq!(at_boundary.risk_scores[&Disorder::DownSyndrome], 0.7);
        assert_eq!(at_boundary.overall_risk, RiskTier::Medium);

        // Down = 0.6 * 1.2 = 0.72 -> High
        let above = RiskAggregator::compute(
            &video_report(0),
            &audio_report(0),
            &health_report(5),
            &mut UnboundedJitter(0.2),
        );
        assert_eq!(above.risk_scores[&Disorder::DownSyndrome], 0.72);
        assert_eq!(above.overall_risk, RiskTier::High);
    }

    #[test]
    fn test_explanations() {
        let assessment = RiskAggregator::compute(
            &video_report(2),
            &audio_report(0),
            &health_report(0),
            &mut NoJitter,
        );

        assert_eq!(
            assessment.explanations[&Disorder::Asd],
            "Based on 2 behavioral markers"
        );
        assert_eq!(
            assessment.explanations[&Disorder::Adhd],
            "Primarily from activity and attention patterns"
        );
        assert_eq!(
            assessment.explanations[&Disorder::DownSyndrome],
            "Health markers and physical features analysis"
        );
        assert_eq!(
            assessment.explanations[&Disorder::DevelopmentalDelay],
            "Overall developmental progress assessment"
        );
    }

    #[test]
    fn test_random_jitter_stays_in_bounds() {
        let mut jitter = RandomJitter::seeded(21);

        for _ in 0..200 {
            let assessment = RiskAggregator::compute(
                &video_report(2),
                &audio_report(1),
                &health_report(2),
                &mut jitter,
            );

            // ASD base = 0.2 + 0.1 + 0.08 = 0.38; jittered within ±10%
            let asd = assessment.risk_scores[&Disorder::Asd];
            let base = 0.5 * 0.4 + 0.3 * (1.0 / 3.0) + 0.2 * 0.4;
            assert!(asd >= round3(base * 0.9) && asd <= round3(base * 1.1));
        }
    }

    #[test]
    fn test_seeded_jitter_is_reproducible() {
        let a = RiskAggregator::compute(
            &video_report(2),
            &audio_report(1),
            &health_report(2),
            &mut RandomJitter::seeded(77),
        );
        let b = RiskAggregator::compute(
            &video_report(2),
            &audio_report(1),
            &health_report(2),
            &mut RandomJitter::seeded(77),
        );

        assert_eq!(a.risk_scores, b.risk_scores);
    }

    #[test]
    fn test_scores_rounded_to_three_decimals() {
        let assessment = RiskAggregator::compute(
            &video_report(1),
            &audio_report(1),
            &health_report(1),
            &mut NoJitter,
        );

        for score in assessment.risk_scores.values() {
            assert_eq!(*score, round3(*score));
        }
    }
}

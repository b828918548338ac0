//! Core types for the NeoMind screening pipeline
//!
//! This module defines the data structures that flow through each stage of the
//! pipeline: modality reports, risk assessments, and recommendation sets.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Screened disorder classes. The set is fixed; there is no dynamic extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Disorder {
    #[serde(rename = "ASD")]
    Asd,
    #[serde(rename = "ADHD")]
    Adhd,
    #[serde(rename = "Down Syndrome")]
    DownSyndrome,
    #[serde(rename = "Developmental Delay")]
    DevelopmentalDelay,
}

impl Disorder {
    /// All disorders in stable assessment order.
    pub const ALL: [Disorder; 4] = [
        Disorder::Asd,
        Disorder::Adhd,
        Disorder::DownSyndrome,
        Disorder::DevelopmentalDelay,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Disorder::Asd => "ASD",
            Disorder::Adhd => "ADHD",
            Disorder::DownSyndrome => "Down Syndrome",
            Disorder::DevelopmentalDelay => "Developmental Delay",
        }
    }
}

/// Three-level overall risk classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        }
    }
}

/// Priority of a disorder-specific action plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
}

/// Behavioral metrics derived from video, each in [0, 1]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoMetrics {
    pub eye_contact_score: f64,
    pub gaze_following: f64,
    pub facial_expressivity: f64,
    pub motor_coordination: f64,
    pub limb_symmetry: f64,
    pub movement_smoothness: f64,
}

/// Report produced by the video metric producer. Immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoReport {
    pub metrics: VideoMetrics,
    /// Human-readable markers, emitted when a metric falls below its threshold
    pub risk_indicators: Vec<String>,
    pub summary: String,
}

/// Spectral features extracted from the audio sample
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpectralFeatures {
    /// Mean fundamental frequency (Hz)
    pub pitch_mean: f64,
    /// Mean spectral centroid (Hz)
    pub spectral_centroid: f64,
    /// Variance of the MFCC means
    pub mfcc_variance: f64,
}

/// Vocalization metrics derived from audio
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioMetrics {
    pub duration_seconds: f64,
    pub pitch_variability: f64,
    pub cry_rhythm_consistency: f64,
    pub vocalization_complexity: f64,
    pub spectral_features: SpectralFeatures,
}

/// Report produced by the audio metric producer. Immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioReport {
    pub metrics: AudioMetrics,
    pub risk_indicators: Vec<String>,
    pub summary: String,
}

/// Result of the health-record evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub risk_factors: Vec<String>,
    pub protective_factors: Vec<String>,
    /// Always equals `risk_factors.len()`
    pub total_risk_factors: usize,
}

/// Per-modality risk fractions, each rounded to 3 decimals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskComponents {
    pub video_risk: f64,
    pub audio_risk: f64,
    pub health_risk: f64,
}

/// Complete risk assessment derived from the three modality reports.
///
/// Recomputed afresh per analysis run and never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Per-disorder risk score, capped and rounded to 3 decimals.
    /// A `BTreeMap` keyed by `Disorder` preserves the fixed assessment order.
    pub risk_scores: BTreeMap<Disorder, f64>,
    pub overall_risk: RiskTier,
    pub explanations: BTreeMap<Disorder, String>,
    pub components: RiskComponents,
}

/// Prioritized action plan for one disorder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisorderPlan {
    pub disorder: Disorder,
    pub priority: Priority,
    pub actions: Vec<String>,
}

/// Recommendations derived from a risk assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub disorder_specific: Vec<DisorderPlan>,
    pub general: Vec<String>,
    pub follow_up_timeline: String,
}

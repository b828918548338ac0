//! Report encoding
//!
//! Encodes one screening run into a versioned `neomind.report.v1` payload and
//! renders the plain-text summary handed to caregivers. The JSON payload is
//! the external contract consumed by any presentation layer.

use crate::error::ScreenError;
use crate::intake::SubjectInfo;
use crate::types::{
    AudioReport, HealthReport, RecommendationSet, RiskAssessment, VideoReport,
};
use crate::{ENGINE_VERSION, PRODUCER_NAME};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Current report schema version
pub const REPORT_VERSION: &str = "neomind.report.v1";

/// Producer metadata embedded in every report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Producer {
    pub name: String,
    pub version: String,
    pub instance_id: String,
}

/// Complete screening report payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningReport {
    pub report_version: String,
    pub producer: Producer,
    /// Analysis identifier ("NM" followed by five digits)
    pub analysis_id: String,
    pub analyzed_at_utc: String,
    pub subject: SubjectInfo,
    pub video: VideoReport,
    pub audio: AudioReport,
    pub health: HealthReport,
    pub assessment: RiskAssessment,
    pub recommendations: RecommendationSet,
}

/// Report encoder producing versioned payloads
pub struct ReportEncoder {
    instance_id: String,
}

impl Default for ReportEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportEncoder {
    /// Create a new encoder with a unique instance ID
    pub fn new() -> Self {
        ReportEncoder {
            instance_id: Uuid::new_v4().to_string(),
        }
    }

    /// Create an encoder with a specific instance ID
    pub fn with_instance_id(instance_id: String) -> Self {
        ReportEncoder { instance_id }
    }

    /// Assemble a screening report from one run's outputs
    #[allow(clippy::too_many_arguments)]
    pub fn encode(
        &self,
        analysis_id: String,
        analyzed_at: DateTime<Utc>,
        subject: SubjectInfo,
        video: VideoReport,
        audio: AudioReport,
        health: HealthReport,
        assessment: RiskAssessment,
        recommendations: RecommendationSet,
    ) -> ScreeningReport {
        ScreeningReport {
            report_version: REPORT_VERSION.to_string(),
            producer: Producer {
                name: PRODUCER_NAME.to_string(),
                version: ENGINE_VERSION.to_string(),
                instance_id: self.instance_id.clone(),
            },
            analysis_id,
            analyzed_at_utc: analyzed_at.to_rfc3339(),
            subject,
            video,
            audio,
            health,
            assessment,
            recommendations,
        }
    }

    /// Encode to a pretty-printed JSON string
    pub fn encode_to_json(&self, report: &ScreeningReport) -> Result<String, ScreenError> {
        serde_json::to_string_pretty(report).map_err(ScreenError::JsonError)
    }
}

/// Render the plain-text caregiver report
pub fn render_text(report: &ScreeningReport) -> String {
    let mut out = String::new();

    out.push_str("NEOMIND - DEVELOPMENTAL RISK ASSESSMENT REPORT\n");
    out.push_str("================================================\n\n");

    out.push_str("Subject Information:\n");
    out.push_str(&format!("- Name: {}\n", report.subject.name));
    out.push_str(&format!("- Birth Date: {}\n", report.subject.birth_date));
    out.push('\n');

    out.push_str("Risk Assessment Summary:\n");
    out.push_str(&format!(
        "- Overall Risk Level: {}\n\n",
        report.assessment.overall_risk.as_str()
    ));

    out.push_str("Disorder-Specific Risk Scores:\n");
    for (disorder, score) in &report.assessment.risk_scores {
        out.push_str(&format!(
            "- {}: {:.1}% risk\n",
            disorder.as_str(),
            score * 100.0
        ));
    }
    out.push('\n');

    out.push_str("Key Findings:\n");
    out.push_str(&format!(
        "- Video Analysis: {} behavioral markers\n",
        report.video.risk_indicators.len()
    ));
    out.push_str(&format!(
        "- Audio Analysis: {} vocal pattern concerns\n",
        report.audio.risk_indicators.len()
    ));
    out.push_str(&format!(
        "- Health Factors: {} risk factors identified\n\n",
        report.health.total_risk_factors
    ));

    out.push_str("Recommendations:\n");
    for rec in &report.recommendations.general {
        out.push_str(&format!("- {}\n", rec));
    }
    out.push('\n');

    out.push_str(&format!("Report Generated: {}\n", report.analyzed_at_utc));
    out.push_str(&format!("Analysis ID: {}\n\n", report.analysis_id));

    out.push_str("*** This is a screening tool, not a diagnostic device ***\n");
    out.push_str("*** Always consult with healthcare professionals ***\n");

    out
}

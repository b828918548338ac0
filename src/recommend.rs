//! Recommendation generation
//!
//! Maps per-disorder risk scores to prioritized action plans plus a general
//! advice list. Fully deterministic; generating twice from the same
//! assessment yields identical output.

use crate::types::{Disorder, DisorderPlan, Priority, RecommendationSet, RiskAssessment, RiskTier};

/// Scores above this get a high-priority plan
const HIGH_PRIORITY_THRESHOLD: f64 = 0.6;
/// Scores above this (and below high) get a medium-priority plan
const MEDIUM_PRIORITY_THRESHOLD: f64 = 0.3;

/// Fixed follow-up guidance; not computed from the assessment
const FOLLOW_UP_TIMELINE: &str = "2-4 weeks for high risk, 3-6 months for medium risk";

/// Recommendation generator
pub struct RecommendationGenerator;

impl RecommendationGenerator {
    /// Generate a recommendation set from a risk assessment
    pub fn generate(assessment: &RiskAssessment) -> RecommendationSet {
        let mut disorder_specific = Vec::new();

        for disorder in Disorder::ALL {
            let Some(&score) = assessment.risk_scores.get(&disorder) else {
                continue;
            };

            if score > HIGH_PRIORITY_THRESHOLD {
                disorder_specific.push(DisorderPlan {
                    disorder,
                    priority: Priority::High,
                    actions: high_priority_actions(),
                });
            } else if score > MEDIUM_PRIORITY_THRESHOLD {
                disorder_specific.push(DisorderPlan {
                    disorder,
                    priority: Priority::Medium,
                    actions: medium_priority_actions(),
                });
            }
        }

        let mut general = vec![
            "Maintain regular well-baby checkups".to_string(),
            "Document developmental milestones".to_string(),
            "Engage in face-to-face interaction daily".to_string(),
            "Monitor response to name and social smiling".to_string(),
        ];

        if assessment.overall_risk == RiskTier::High {
            general.extend([
                "Consider early intervention program referral".to_string(),
                "Explore speech and occupational therapy options".to_string(),
                "Join parent support groups".to_string(),
            ]);
        }

        RecommendationSet {
            disorder_specific,
            general,
            follow_up_timeline: FOLLOW_UP_TIMELINE.to_string(),
        }
    }
}

fn high_priority_actions() -> Vec<String> {
    vec![
        "Schedule consultation with pediatric neurologist".to_string(),
        "Begin early intervention assessment".to_string(),
        "Monitor specific developmental milestones weekly".to_string(),
        // Static advice text; the threshold mention is not a conditional item
        "Consider genetic counseling if score > 0.75".to_string(),
    ]
}

fn medium_priority_actions() -> Vec<String> {
    vec![
        "Discuss findings with pediatrician".to_string(),
        "Track development with milestone checklist".to_string(),
        "Consider developmental screening at next visit".to_string(),
        "Engage in targeted play activities".to_string(),
    ]
}

//! Health-record evaluation
//!
//! Deterministic threshold logic on birth metrics, Apgar scores, and family
//! history. No randomness; the same intake always yields the same report.

use crate::intake::HealthIntake;
use crate::types::HealthReport;

/// Birth weight below this is a risk factor (kg)
const LOW_BIRTH_WEIGHT_KG: f64 = 2.5;
/// Birth weight above this is a risk factor (kg)
const HIGH_BIRTH_WEIGHT_KG: f64 = 4.0;
/// Apgar readings below this are risk factors
const LOW_APGAR: u8 = 7;
/// Apgar improvement of at least this much is a protective factor
const APGAR_IMPROVEMENT: i16 = 2;

/// Family-history keywords matched case-insensitively as substrings
const FAMILY_HISTORY_KEYWORDS: [&str; 4] = ["autism", "adhd", "down", "developmental"];

/// Health-record evaluator
pub struct HealthEvaluator;

impl HealthEvaluator {
    /// Evaluate structured birth/health facts into risk and protective factors
    pub fn evaluate(intake: &HealthIntake) -> HealthReport {
        let mut risk_factors = Vec::new();
        let mut protective_factors = Vec::new();

        if let Some(weight) = intake.birth_weight {
            if weight < LOW_BIRTH_WEIGHT_KG {
                risk_factors.push(format!("Low birth weight: {} kg", weight));
            } else if weight > HIGH_BIRTH_WEIGHT_KG {
                risk_factors.push(format!("High birth weight: {} kg", weight));
            } else {
                protective_factors.push("Normal birth weight".to_string());
            }
        }

        // Apgar checks require both readings; a lone reading is not evaluated
        if let (Some(apgar1), Some(apgar5)) = (intake.apgar_1min, intake.apgar_5min) {
            if apgar1 < LOW_APGAR {
                risk_factors.push(format!("Low 1-min Apgar: {}", apgar1));
            }
            if apgar5 < LOW_APGAR {
                risk_factors.push(format!("Low 5-min Apgar: {}", apgar5));
            }
            if i16::from(apgar5) - i16::from(apgar1) >= APGAR_IMPROVEMENT {
                protective_factors.push("Good Apgar score improvement".to_string());
            }
        }

        if let Some(history) = &intake.family_history {
            let lowered = history.to_lowercase();
            for keyword in FAMILY_HISTORY_KEYWORDS {
                if lowered.contains(keyword) {
                    risk_factors.push(format!("Family history of {}", keyword));
                }
            }
        }

        let total_risk_factors = risk_factors.len();

        HealthReport {
            risk_factors,
            protective_factors,
            total_risk_factors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn intake(
        birth_weight: Option<f64>,
        apgar_1min: Option<u8>,
        apgar_5min: Option<u8>,
        family_history: Option<&str>,
    ) -> HealthIntake {
        HealthIntake {
            birth_weight,
            apgar_1min,
            apgar_5min,
            family_history: family_history.map(str::to_string),
        }
    }

    #[test]
    fn test_birth_weight_thresholds() {
        let low = HealthEvaluator::evaluate(&intake(Some(2.1), None, None, None));
        assert_eq!(low.risk_factors, vec!["Low birth weight: 2.1 kg"]);

        let high = HealthEvaluator::evaluate(&intake(Some(4.3), None, None, None));
        assert_eq!(high.risk_factors, vec!["High birth weight: 4.3 kg"]);

        let normal = HealthEvaluator::evaluate(&intake(Some(3.2), None, None, None));
        assert!(normal.risk_factors.is_empty());
        assert_eq!(normal.protective_factors, vec!["Normal birth weight"]);
    }

    #[test]
    fn test_birth_weight_boundaries_are_inclusive_normal() {
        // Exactly 2.5 and 4.0 kg count as normal
        let at_low = HealthEvaluator::evaluate(&intake(Some(2.5), None, None, None));
        assert!(at_low.risk_factors.is_empty());

        let at_high = HealthEvaluator::evaluate(&intake(Some(4.0), None, None, None));
        assert!(at_high.risk_factors.is_empty());
    }

    #[test]
    fn test_apgar_scores() {
        let report = HealthEvaluator::evaluate(&intake(None, Some(5), Some(6), None));
        assert_eq!(
            report.risk_factors,
            vec!["Low 1-min Apgar: 5", "Low 5-min Apgar: 6"]
        );
        assert!(report.protective_factors.is_empty());

        let improved = HealthEvaluator::evaluate(&intake(None, Some(6), Some(9), None));
        assert_eq!(improved.risk_factors, vec!["Low 1-min Apgar: 6"]);
        assert_eq!(
            improved.protective_factors,
            vec!["Good Apgar score improvement"]
        );
    }

    #[test]
    fn test_apgar_requires_both_readings() {
        let report = HealthEvaluator::evaluate(&intake(None, Some(4), None, None));
        assert!(report.risk_factors.is_empty());
    }

    #[test]
    fn test_family_history_keywords() {
        let report = HealthEvaluator::evaluate(&intake(
            None,
            None,
            None,
            Some("Uncle diagnosed with ADHD; cousin with Down syndrome"),
        ));

        assert_eq!(
            report.risk_factors,
            vec!["Family history of adhd", "Family history of down"]
        );
        assert_eq!(report.total_risk_factors, 2);
    }

    #[test]
    fn test_family_history_substring_match() {
        // "developmental" matches inside longer phrases
        let report = HealthEvaluator::evaluate(&intake(
            None,
            None,
            None,
            Some("history of developmental delays on maternal side"),
        ));
        assert_eq!(report.risk_factors, vec!["Family history of developmental"]);
    }

    #[test]
    fn test_total_matches_risk_factor_count() {
        let report = HealthEvaluator::evaluate(&intake(
            Some(2.0),
            Some(5),
            Some(6),
            Some("autism and adhd in family"),
        ));
        assert_eq!(report.total_risk_factors, report.risk_factors.len());
        assert_eq!(report.total_risk_factors, 5);
    }

    #[test]
    fn test_empty_intake_yields_empty_report() {
        let report = HealthEvaluator::evaluate(&HealthIntake::default());
        assert!(report.risk_factors.is_empty());
        assert!(report.protective_factors.is_empty());
        assert_eq!(report.total_risk_factors, 0);
    }
}

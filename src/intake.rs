//! neomind.intake.v1 schema definition
//!
//! Typed intake record for a screening run: subject identity plus the
//! structured birth/health facts consumed by the health evaluator. Unknown
//! fields are rejected at the serde boundary rather than silently dropped,
//! and out-of-range values fail validation before any analysis runs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Current intake schema version
pub const INTAKE_SCHEMA_VERSION: &str = "neomind.intake.v1";

/// Subject identity for report provenance
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubjectInfo {
    pub name: String,
    pub birth_date: NaiveDate,
}

/// Structured birth/health facts. All fields are optional; absent fields
/// simply contribute no risk or protective factors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HealthIntake {
    /// Birth weight in kilograms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_weight: Option<f64>,
    /// 1-minute Apgar score (0-10)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apgar_1min: Option<u8>,
    /// 5-minute Apgar score (0-10)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apgar_5min: Option<u8>,
    /// Free-text family medical history
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_history: Option<String>,
}

/// One complete intake record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IntakeRecord {
    pub schema_version: String,
    pub subject: SubjectInfo,
    pub health: HealthIntake,
}

impl IntakeRecord {
    /// Create a record for the given subject and health facts
    pub fn new(subject: SubjectInfo, health: HealthIntake) -> Self {
        IntakeRecord {
            schema_version: INTAKE_SCHEMA_VERSION.to_string(),
            subject,
            health,
        }
    }

    /// Built-in demo subject used by the `demo` command and examples
    pub fn demo() -> Self {
        IntakeRecord::new(
            SubjectInfo {
                name: "Alex Johnson".to_string(),
                birth_date: NaiveDate::from_ymd_opt(2024, 1, 15)
                    .unwrap_or(NaiveDate::MIN),
            },
            HealthIntake {
                birth_weight: Some(3.1),
                apgar_1min: Some(7),
                apgar_5min: Some(8),
                family_history: Some("Maternal cousin with autism".to_string()),
            },
        )
    }

    /// Parse an intake record from JSON and validate it.
    ///
    /// Malformed or unknown-shape input fails with a labeled error instead of
    /// proceeding with defaults.
    pub fn from_json(json: &str) -> Result<Self, crate::error::ScreenError> {
        let record: IntakeRecord = serde_json::from_str(json)
            .map_err(|e| crate::error::ScreenError::InvalidInput(e.to_string()))?;
        record.validate()?;
        Ok(record)
    }

    /// Validate the record against the intake schema
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.schema_version != INTAKE_SCHEMA_VERSION {
            return Err(ValidationError::InvalidSchemaVersion {
                expected: INTAKE_SCHEMA_VERSION.to_string(),
                actual: self.schema_version.clone(),
            });
        }

        if let Some(weight) = self.health.birth_weight {
            if !weight.is_finite() || weight <= 0.0 {
                return Err(ValidationError::InvalidBirthWeight { value: weight });
            }
        }

        if let Some(score) = self.health.apgar_1min {
            if score > 10 {
                return Err(ValidationError::InvalidApgarScore {
                    reading: "1-minute",
                    value: score,
                });
            }
        }

        if let Some(score) = self.health.apgar_5min {
            if score > 10 {
                return Err(ValidationError::InvalidApgarScore {
                    reading: "5-minute",
                    value: score,
                });
            }
        }

        Ok(())
    }
}

/// Validation errors for intake records
#[derive(Debug, Clone, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid schema version: expected {expected}, got {actual}")]
    InvalidSchemaVersion { expected: String, actual: String },

    #[error("Invalid birth weight: {value} kg (must be finite and positive)")]
    InvalidBirthWeight { value: f64 },

    #[error("Invalid {reading} Apgar score: {value} (must be 0-10)")]
    InvalidApgarScore { reading: &'static str, value: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_record_validates() {
        let record = IntakeRecord::demo();
        assert!(record.validate().is_ok());
        assert_eq!(record.schema_version, INTAKE_SCHEMA_VERSION);
    }

    #[test]
    fn test_rejects_wrong_schema_version() {
        let mut record = IntakeRecord::demo();
        record.schema_version = "neomind.intake.v0".to_string();

        let err = record.validate().unwrap_err();
        assert!(matches!(err, ValidationError::InvalidSchemaVersion { .. }));
    }

    #[test]
    fn test_rejects_out_of_range_apgar() {
        let mut record = IntakeRecord::demo();
        record.health.apgar_5min = Some(11);

        let err = record.validate().unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidApgarScore {
                reading: "5-minute",
                value: 11
            }
        ));
    }

    #[test]
    fn test_rejects_non_positive_birth_weight() {
        let mut record = IntakeRecord::demo();
        record.health.birth_weight = Some(0.0);
        assert!(record.validate().is_err());

        record.health.birth_weight = Some(f64::NAN);
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_empty_health_intake_is_valid() {
        let record = IntakeRecord::new(
            SubjectInfo {
                name: "Baby Demo".to_string(),
                birth_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            },
            HealthIntake::default(),
        );
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_deserialize_intake_json() {
        let json = r#"{
            "schema_version": "neomind.intake.v1",
            "subject": { "name": "Alex Johnson", "birth_date": "2024-01-15" },
            "health": {
                "birth_weight": 3.1,
                "apgar_1min": 7,
                "apgar_5min": 8,
                "family_history": "Maternal cousin with autism"
            }
        }"#;

        let record: IntakeRecord = serde_json::from_str(json).unwrap();
        assert!(record.validate().is_ok());
        assert_eq!(record.health.birth_weight, Some(3.1));
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let json = r#"{
            "schema_version": "neomind.intake.v1",
            "subject": { "name": "Alex", "birth_date": "2024-01-15" },
            "health": { "birth_weigth": 3.1 }
        }"#;

        // Misspelled field must fail parsing instead of silently defaulting
        assert!(serde_json::from_str::<IntakeRecord>(json).is_err());
    }

    #[test]
    fn test_from_json_labels_parse_failures() {
        let err = IntakeRecord::from_json("{ not json }").unwrap_err();
        assert!(matches!(err, crate::error::ScreenError::InvalidInput(_)));

        let valid = serde_json::to_string(&IntakeRecord::demo()).unwrap();
        assert!(IntakeRecord::from_json(&valid).is_ok());
    }
}

//! NeoMind - On-device screening engine for early neurodevelopmental risk markers
//!
//! NeoMind turns baby video, audio, and health-record inputs into a
//! developmental-risk report through a deterministic pipeline: modality
//! analysis → risk aggregation → recommendation generation → report encoding.
//!
//! The simulated video/audio producers are stand-ins for real extraction
//! pipelines; only their output contracts matter. The aggregation and
//! recommendation stages are pure and fully testable with an injected jitter
//! source.

pub mod analyzers;
pub mod error;
pub mod intake;
pub mod pipeline;
pub mod recommend;
pub mod report;
pub mod risk;
pub mod types;

pub use error::ScreenError;
pub use pipeline::{screen, ScreeningEngine};

// Schema exports
pub use intake::{IntakeRecord, ValidationError, INTAKE_SCHEMA_VERSION};
pub use report::{ScreeningReport, REPORT_VERSION};

// Core stage exports
pub use recommend::RecommendationGenerator;
pub use risk::{JitterSource, NoJitter, RandomJitter, RiskAggregator};

/// Engine version embedded in all report payloads
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for report payloads
pub const PRODUCER_NAME: &str = "neomind";

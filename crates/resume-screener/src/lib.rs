//! Resume screening pipeline: field extraction, match features, weighted scoring and
//! recruiter-facing explanations.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;

use serde::Serialize;

use super::domain::{Decision, ScreeningId, ScreeningRecord};

/// Append-only screening history so the service can be exercised in isolation.
pub trait ScreeningRepository: Send + Sync {
    fn insert(&self, record: ScreeningRecord) -> Result<ScreeningRecord, RepositoryError>;
    fn fetch(&self, id: &ScreeningId) -> Result<Option<ScreeningRecord>, RepositoryError>;
    /// Most recent records first.
    fn recent(&self, limit: usize) -> Result<Vec<ScreeningRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Compact listing row for screening history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreeningSummary {
    pub screening_id: ScreeningId,
    pub candidate: String,
    pub jobs_considered: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_decision: Option<Decision>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_score: Option<f64>,
}

impl From<&ScreeningRecord> for ScreeningSummary {
    fn from(record: &ScreeningRecord) -> Self {
        let top = record.matches.first();
        Self {
            screening_id: record.screening_id.clone(),
            candidate: record.profile.name.clone(),
            jobs_considered: record.jobs_considered,
            top_job_id: top.map(|result| result.job_id.clone()),
            top_decision: record.top_decision(),
            top_score: top.map(|result| result.score),
        }
    }
}

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::domain::{JobPosting, JobRecord, Profile, ScreeningId, ScreeningRecord};
use super::extraction::FieldExtractor;
use super::features::{FeatureGenerator, FeatureSet, FEATURE_NAMES};
use super::matching::{MatchScorer, ScoringConfig, ScoringConfigError};
use super::ontology::SkillOntology;
use super::repository::{RepositoryError, ScreeningRepository, ScreeningSummary};

/// Extractor, feature generator and scorer sharing one ontology.
#[derive(Clone)]
pub struct ScreeningPipeline {
    extractor: FieldExtractor,
    features: Arc<FeatureGenerator>,
    scorer: MatchScorer,
}

impl ScreeningPipeline {
    pub fn new(
        ontology: Arc<SkillOntology>,
        config: ScoringConfig,
        reference_year: i32,
    ) -> Result<Self, ScoringConfigError> {
        let scorer = MatchScorer::new(Arc::clone(&ontology), config)?;
        let features = Arc::new(FeatureGenerator::with_tfidf(Arc::clone(&ontology)));
        let extractor = FieldExtractor::new(ontology, reference_year);
        Ok(Self {
            extractor,
            features,
            scorer,
        })
    }

    pub fn extractor(&self) -> &FieldExtractor {
        &self.extractor
    }

    pub fn scorer(&self) -> &MatchScorer {
        &self.scorer
    }

    pub fn feature_generator(&self) -> &FeatureGenerator {
        &self.features
    }
}

/// Request payload for a screening run. Omitted or empty `jobs` fall back to the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScreeningRequest {
    pub resume_text: String,
    #[serde(default)]
    pub jobs: Option<Vec<JobRecord>>,
}

/// Request payload for inspecting the feature vector of one pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureRequest {
    pub resume_text: String,
    pub job: JobRecord,
}

/// Feature vector for one pair together with the inputs it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureReport {
    pub profile: Profile,
    pub job: JobPosting,
    pub features: FeatureSet,
    pub feature_names: [&'static str; 12],
    pub vector: [f64; 12],
}

/// Service composing the pipeline, the job catalog and screening history.
pub struct ScreeningService<R> {
    pipeline: Arc<ScreeningPipeline>,
    repository: Arc<R>,
    catalog: Arc<Vec<JobPosting>>,
}

static SCREENING_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_screening_id() -> ScreeningId {
    let id = SCREENING_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ScreeningId(format!("scr-{id:06}"))
}

impl<R> ScreeningService<R>
where
    R: ScreeningRepository + 'static,
{
    pub fn new(pipeline: ScreeningPipeline, repository: Arc<R>, catalog: Vec<JobPosting>) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            repository,
            catalog: Arc::new(catalog),
        }
    }

    pub fn pipeline(&self) -> &ScreeningPipeline {
        &self.pipeline
    }

    pub fn catalog(&self) -> &[JobPosting] {
        &self.catalog
    }

    /// Extract, score and persist one resume against the supplied jobs or the catalog.
    pub fn screen(
        &self,
        request: ScreeningRequest,
    ) -> Result<ScreeningRecord, ScreeningServiceError> {
        let supplied: Vec<JobPosting> = request
            .jobs
            .unwrap_or_default()
            .iter()
            .map(|record| self.pipeline.extractor.extract_job(record))
            .collect();
        let jobs: &[JobPosting] = if supplied.is_empty() {
            &self.catalog
        } else {
            &supplied
        };
        if jobs.is_empty() {
            return Err(ScreeningServiceError::NoJobPostings);
        }

        let profile = self.extract(&request.resume_text);
        let matches = self.pipeline.scorer.score(&profile, jobs);
        for result in &matches {
            debug!(
                job_id = %result.job_id,
                rank = result.rank,
                score = result.score,
                decision = result.decision.label(),
                "job scored"
            );
        }

        let record = ScreeningRecord {
            screening_id: next_screening_id(),
            screened_at: Utc::now(),
            profile,
            jobs_considered: jobs.len(),
            matches,
        };
        let stored = self.repository.insert(record)?;

        info!(
            screening_id = %stored.screening_id,
            jobs = stored.jobs_considered,
            top_decision = stored.top_decision().map(|decision| decision.label()),
            "screening persisted"
        );
        Ok(stored)
    }

    pub fn extract(&self, resume_text: &str) -> Profile {
        let profile = self.pipeline.extractor.extract(resume_text);
        debug!(
            skills = profile.skills.len(),
            experience_years = profile.experience_years,
            confidence = profile.confidence,
            "profile extracted"
        );
        profile
    }

    pub fn features(&self, request: &FeatureRequest) -> FeatureReport {
        let profile = self.extract(&request.resume_text);
        let job = self.pipeline.extractor.extract_job(&request.job);
        let features = self.pipeline.features.generate(&profile, &job);
        let vector = features.to_vector();
        FeatureReport {
            profile,
            job,
            features,
            feature_names: FEATURE_NAMES,
            vector,
        }
    }

    pub fn get(&self, screening_id: &ScreeningId) -> Result<ScreeningRecord, ScreeningServiceError> {
        let record = self
            .repository
            .fetch(screening_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn recent(&self, limit: usize) -> Result<Vec<ScreeningSummary>, ScreeningServiceError> {
        let records = self.repository.recent(limit)?;
        Ok(records.iter().map(ScreeningSummary::from).collect())
    }
}

/// Error raised by the screening service.
#[derive(Debug, thiserror::Error)]
pub enum ScreeningServiceError {
    #[error("no job postings supplied and the job catalog is empty")]
    NoJobPostings,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

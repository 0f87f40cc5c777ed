//! Resume screening: extraction, match features, scoring, and explained decisions.
//!
//! The four core components are stateless and share one [`SkillOntology`]. Build them once
//! at startup (see [`ScreeningPipeline`]) and share them across requests.

pub mod domain;
pub mod explanation;
pub mod extraction;
pub mod features;
pub mod matching;
pub mod ontology;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Decision, DegreeTier, JobPosting, JobRecord, MatchResult, Profile, ScoreBreakdown,
    ScreeningId, ScreeningRecord, Seniority, UNKNOWN_CANDIDATE,
};
pub use explanation::{ExplanationGenerator, ExplanationInput};
pub use extraction::{parse_experience_range, ExtractionInput, FieldExtractor};
pub use features::{FeatureGenerator, FeatureSet, TextSimilarity, TfIdfSimilarity, FEATURE_NAMES};
pub use matching::{
    ComponentScores, JobEvaluation, MatchScorer, ScoringConfig, ScoringConfigError,
    ScoringWeights,
};
pub use ontology::{translate_job_title, OntologyError, SkillOntology};
pub use repository::{RepositoryError, ScreeningRepository, ScreeningSummary};
pub use router::screening_router;
pub use service::{
    FeatureReport, FeatureRequest, ScreeningPipeline, ScreeningRequest, ScreeningService,
    ScreeningServiceError,
};

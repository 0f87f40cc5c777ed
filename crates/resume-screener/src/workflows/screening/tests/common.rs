use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::screening::domain::{
    DegreeTier, JobPosting, JobRecord, Profile, ScreeningId, ScreeningRecord, Seniority,
};
use crate::workflows::screening::extraction::FieldExtractor;
use crate::workflows::screening::features::FeatureGenerator;
use crate::workflows::screening::matching::{MatchScorer, ScoringConfig};
use crate::workflows::screening::ontology::SkillOntology;
use crate::workflows::screening::repository::{RepositoryError, ScreeningRepository};
use crate::workflows::screening::service::{ScreeningPipeline, ScreeningService};

pub(super) const REFERENCE_YEAR: i32 = 2025;

pub(super) fn ontology() -> Arc<SkillOntology> {
    Arc::new(SkillOntology::builtin().expect("built-in ontology is valid"))
}

pub(super) fn extractor() -> FieldExtractor {
    FieldExtractor::new(ontology(), REFERENCE_YEAR)
}

pub(super) fn feature_generator() -> FeatureGenerator {
    FeatureGenerator::with_tfidf(ontology())
}

pub(super) fn scorer() -> MatchScorer {
    MatchScorer::new(ontology(), ScoringConfig::default()).expect("default rubric is valid")
}

pub(super) fn skill_set(skills: &[&str]) -> BTreeSet<String> {
    skills.iter().map(|skill| skill.to_string()).collect()
}

pub(super) fn profile(skills: &[&str], years: u32, education: &[DegreeTier]) -> Profile {
    Profile {
        name: "Jane Doe".to_string(),
        skills: skill_set(skills),
        experience_years: years,
        education: education.iter().copied().collect(),
        seniority: Seniority::from_experience(years),
        ..Profile::default()
    }
}

pub(super) fn posting(
    job_id: &str,
    title: &str,
    skills: &[&str],
    min_years: u32,
    max_years: u32,
    description: &str,
) -> JobPosting {
    JobPosting {
        job_id: job_id.to_string(),
        title: title.to_string(),
        role_category: String::new(),
        required_skills: skill_set(skills),
        min_experience_years: min_years,
        max_experience_years: max_years,
        description: description.to_string(),
        location: String::new(),
    }
}

pub(super) fn sample_resume() -> &'static str {
    "Jane Doe\n\
     Senior Backend Engineer\n\
     Email: jane.doe@example.com\n\
     Phone: +1 555 123 4567\n\
     Skills: Python, SQL, Docker, PostgreSQL, AWS\n\
     8 years of experience building data platforms.\n\
     Education: Bachelor's degree in Computer Science\n"
}

pub(super) fn backend_record() -> JobRecord {
    JobRecord {
        job_id: "J-100".to_string(),
        job_title: "Backend Engineer".to_string(),
        role_category: "Engineering".to_string(),
        skills: "Python | SQL | Docker".to_string(),
        experience_range_text: "5 - 10 years".to_string(),
        qualifications_text: "Bachelor's degree in Computer Science".to_string(),
        location: "Remote".to_string(),
    }
}

pub(super) fn frontend_record() -> JobRecord {
    JobRecord {
        job_id: "J-200".to_string(),
        job_title: "Frontend Developer".to_string(),
        role_category: "Engineering".to_string(),
        skills: "React | TypeScript".to_string(),
        experience_range_text: "2 - 4 years".to_string(),
        qualifications_text: String::new(),
        location: "Cairo".to_string(),
    }
}

pub(super) fn pipeline() -> ScreeningPipeline {
    ScreeningPipeline::new(ontology(), ScoringConfig::default(), REFERENCE_YEAR)
        .expect("default rubric is valid")
}

pub(super) fn build_service(
    catalog: Vec<JobPosting>,
) -> (ScreeningService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = ScreeningService::new(pipeline(), repository.clone(), catalog);
    (service, repository)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<Vec<ScreeningRecord>>>,
}

impl ScreeningRepository for MemoryRepository {
    fn insert(&self, record: ScreeningRecord) -> Result<ScreeningRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard
            .iter()
            .any(|existing| existing.screening_id == record.screening_id)
        {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ScreeningId) -> Result<Option<ScreeningRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .find(|record| &record.screening_id == id)
            .cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<ScreeningRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().rev().take(limit).cloned().collect())
    }
}

pub(super) struct ConflictRepository;

impl ScreeningRepository for ConflictRepository {
    fn insert(&self, _record: ScreeningRecord) -> Result<ScreeningRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &ScreeningId) -> Result<Option<ScreeningRecord>, RepositoryError> {
        Ok(None)
    }

    fn recent(&self, _limit: usize) -> Result<Vec<ScreeningRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl ScreeningRepository for UnavailableRepository {
    fn insert(&self, _record: ScreeningRecord) -> Result<ScreeningRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ScreeningId) -> Result<Option<ScreeningRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<ScreeningRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn approx(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-9
}

use metrics_exporter_prometheus::PrometheusHandle;
use resume_screener::config::ScreeningSettings;
use resume_screener::error::AppError;
use resume_screener::workflows::catalog::JobCatalogImporter;
use resume_screener::workflows::screening::{
    JobPosting, RepositoryError, ScreeningId, ScreeningPipeline, ScreeningRecord,
    ScreeningRepository, ScreeningService, SkillOntology,
};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Insertion-ordered screening history kept for the lifetime of the process.
#[derive(Default, Clone)]
pub(crate) struct InMemoryScreeningRepository {
    records: Arc<Mutex<Vec<ScreeningRecord>>>,
}

impl ScreeningRepository for InMemoryScreeningRepository {
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
        Ok(guard.iter().find(|record| &record.screening_id == id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<ScreeningRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().rev().take(limit).cloned().collect())
    }
}

pub(crate) fn load_ontology(settings: &ScreeningSettings) -> Result<Arc<SkillOntology>, AppError> {
    let ontology = match &settings.skill_ontology {
        Some(path) => {
            let ontology = SkillOntology::from_path(path)?;
            info!(path = %path.display(), skills = ontology.len(), "skill ontology loaded");
            ontology
        }
        None => SkillOntology::builtin()?,
    };
    Ok(Arc::new(ontology))
}

pub(crate) fn build_pipeline(settings: &ScreeningSettings) -> Result<ScreeningPipeline, AppError> {
    let ontology = load_ontology(settings)?;
    let pipeline =
        ScreeningPipeline::new(ontology, settings.scoring.clone(), settings.reference_year)?;
    Ok(pipeline)
}

pub(crate) fn load_catalog(
    settings: &ScreeningSettings,
    pipeline: &ScreeningPipeline,
) -> Result<Vec<JobPosting>, AppError> {
    match &settings.job_catalog {
        Some(path) => Ok(JobCatalogImporter::from_path(path, pipeline.extractor())?),
        None => Ok(Vec::new()),
    }
}

pub(crate) fn build_service(
    settings: &ScreeningSettings,
) -> Result<ScreeningService<InMemoryScreeningRepository>, AppError> {
    let pipeline = build_pipeline(settings)?;
    let catalog = load_catalog(settings, &pipeline)?;
    let repository = Arc::new(InMemoryScreeningRepository::default());
    Ok(ScreeningService::new(pipeline, repository, catalog))
}

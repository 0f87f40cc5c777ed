use std::sync::Arc;

use super::common::*;

use crate::workflows::screening::domain::{Decision, ScreeningId};
use crate::workflows::screening::repository::RepositoryError;
use crate::workflows::screening::service::{
    FeatureRequest, ScreeningRequest, ScreeningService, ScreeningServiceError,
};

#[test]
fn screen_scores_supplied_jobs_and_persists_the_record() {
    let (service, repository) = build_service(Vec::new());

    let record = service
        .screen(ScreeningRequest {
            resume_text: sample_resume().to_string(),
            jobs: Some(vec![frontend_record(), backend_record()]),
        })
        .expect("screening succeeds");

    assert!(record.screening_id.0.starts_with("scr-"));
    assert_eq!(record.jobs_considered, 2);
    assert_eq!(record.profile.name, "Jane Doe");
    assert_eq!(record.matches[0].job_id, "J-100");
    assert_eq!(record.matches[0].rank, 1);
    assert_eq!(record.top_decision(), Some(Decision::Shortlist));
    assert_eq!(record.matches[1].job_id, "J-200");
    assert_eq!(record.matches[1].decision, Decision::Reject);

    let stored = repository.records.lock().expect("repository mutex poisoned");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].screening_id, record.screening_id);
}

#[test]
fn screen_falls_back_to_the_catalog() {
    let catalog = vec![extractor().extract_job(&backend_record())];
    let (service, _) = build_service(catalog);

    let record = service
        .screen(ScreeningRequest {
            resume_text: sample_resume().to_string(),
            jobs: Some(Vec::new()),
        })
        .expect("catalog is used");

    assert_eq!(record.jobs_considered, 1);
    assert_eq!(record.matches[0].job_id, "J-100");
}

#[test]
fn screen_without_any_jobs_is_rejected() {
    let (service, repository) = build_service(Vec::new());

    let result = service.screen(ScreeningRequest {
        resume_text: sample_resume().to_string(),
        jobs: None,
    });

    match result {
        Err(ScreeningServiceError::NoJobPostings) => {}
        other => panic!("expected missing jobs error, got {other:?}"),
    }
    assert!(repository
        .records
        .lock()
        .expect("repository mutex poisoned")
        .is_empty());
}

#[test]
fn screening_ids_are_unique() {
    let (service, _) = build_service(vec![extractor().extract_job(&backend_record())]);
    let request = ScreeningRequest {
        resume_text: sample_resume().to_string(),
        jobs: None,
    };

    let first = service.screen(request.clone()).expect("first");
    let second = service.screen(request).expect("second");

    assert_ne!(first.screening_id, second.screening_id);
}

#[test]
fn get_returns_stored_record_or_not_found() {
    let (service, _) = build_service(vec![extractor().extract_job(&backend_record())]);
    let record = service
        .screen(ScreeningRequest {
            resume_text: sample_resume().to_string(),
            jobs: None,
        })
        .expect("screening succeeds");

    let fetched = service.get(&record.screening_id).expect("record exists");
    assert_eq!(fetched, record);

    match service.get(&ScreeningId("scr-missing".to_string())) {
        Err(ScreeningServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn recent_lists_newest_first() {
    let (service, _) = build_service(vec![extractor().extract_job(&backend_record())]);
    let older = service
        .screen(ScreeningRequest {
            resume_text: "Candidate: Omar Khaled\nSkills: Java, Spring".to_string(),
            jobs: None,
        })
        .expect("older");
    let newer = service
        .screen(ScreeningRequest {
            resume_text: sample_resume().to_string(),
            jobs: None,
        })
        .expect("newer");

    let summaries = service.recent(10).expect("history");

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].screening_id, newer.screening_id);
    assert_eq!(summaries[0].candidate, "Jane Doe");
    assert_eq!(summaries[0].top_job_id.as_deref(), Some("J-100"));
    assert_eq!(summaries[1].screening_id, older.screening_id);
    assert_eq!(service.recent(1).expect("history").len(), 1);
}

#[test]
fn repository_failures_surface_as_service_errors() {
    let service = ScreeningService::new(
        pipeline(),
        Arc::new(UnavailableRepository),
        vec![extractor().extract_job(&backend_record())],
    );

    let result = service.screen(ScreeningRequest {
        resume_text: sample_resume().to_string(),
        jobs: None,
    });

    match result {
        Err(ScreeningServiceError::Repository(RepositoryError::Unavailable(reason))) => {
            assert_eq!(reason, "database offline");
        }
        other => panic!("expected unavailable repository, got {other:?}"),
    }
}

#[test]
fn features_report_includes_the_named_vector() {
    let (service, _) = build_service(Vec::new());

    let report = service.features(&FeatureRequest {
        resume_text: sample_resume().to_string(),
        job: backend_record(),
    });

    assert_eq!(report.job.job_id, "J-100");
    assert_eq!(report.vector, report.features.to_vector());
    assert_eq!(report.feature_names[0], "skill_overlap_count");
    assert_eq!(report.features.skill_overlap_count, 3.0);
    assert_eq!(report.features.experience_match, 1.0);
    assert_eq!(report.features.seniority_match, 1.0);
}

use super::common::*;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::body::Body;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::workflows::screening::router::screen_handler;
use crate::workflows::screening::service::{ScreeningRequest, ScreeningService};
use crate::workflows::screening::screening_router;

fn json_request(uri: &str, payload: serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

#[tokio::test]
async fn screen_route_creates_a_screening() {
    let (service, _) = build_service(Vec::new());
    let router = screening_router(Arc::new(service));

    let response = router
        .oneshot(json_request(
            "/api/v1/screenings",
            json!({
                "resume_text": sample_resume(),
                "jobs": [backend_record()],
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json_body(response).await;
    assert_eq!(body["profile"]["name"], "Jane Doe");
    assert_eq!(body["matches"][0]["job_id"], "J-100");
    assert_eq!(body["matches"][0]["decision"], "SHORTLIST");
    assert_eq!(body["matches"][0]["rank"], 1);
    assert!(body["profile"].get("source_text").is_none());
}

#[tokio::test]
async fn screen_route_accepts_dataset_style_job_headers() {
    let (service, _) = build_service(Vec::new());
    let router = screening_router(Arc::new(service));

    let response = router
        .oneshot(json_request(
            "/api/v1/screenings",
            json!({
                "resume_text": sample_resume(),
                "jobs": [{
                    "Job Id": "DS-7",
                    "Job Title": "Data Analyst",
                    "skills": "SQL | Excel",
                    "Experience": "1 to 3 years",
                }],
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json_body(response).await;
    assert_eq!(body["matches"][0]["job_id"], "DS-7");
    assert_eq!(body["matches"][0]["experience_years_required"], 1);
}

#[tokio::test]
async fn screen_route_without_jobs_is_unprocessable() {
    let (service, _) = build_service(Vec::new());
    let router = screening_router(Arc::new(service));

    let response = router
        .oneshot(json_request(
            "/api/v1/screenings",
            json!({ "resume_text": sample_resume() }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert!(body["error"]
        .as_str()
        .is_some_and(|message| message.contains("no job postings")));
}

#[tokio::test]
async fn screen_handler_returns_conflict_on_duplicate() {
    let service = Arc::new(ScreeningService::new(
        pipeline(),
        Arc::new(ConflictRepository),
        vec![extractor().extract_job(&backend_record())],
    ));

    let response = screen_handler::<ConflictRepository>(
        State(service),
        axum::Json(ScreeningRequest {
            resume_text: sample_resume().to_string(),
            jobs: None,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn screen_handler_returns_internal_error_on_repository_failure() {
    let service = Arc::new(ScreeningService::new(
        pipeline(),
        Arc::new(UnavailableRepository),
        vec![extractor().extract_job(&backend_record())],
    ));

    let response = screen_handler::<UnavailableRepository>(
        State(service),
        axum::Json(ScreeningRequest {
            resume_text: sample_resume().to_string(),
            jobs: None,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn get_route_returns_stored_screening_or_not_found() {
    let (service, _) = build_service(vec![extractor().extract_job(&backend_record())]);
    let record = service
        .screen(ScreeningRequest {
            resume_text: sample_resume().to_string(),
            jobs: None,
        })
        .expect("screening succeeds");
    let router = screening_router(Arc::new(service));

    let found = router
        .clone()
        .oneshot(
            Request::get(format!("/api/v1/screenings/{}", record.screening_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(found.status(), StatusCode::OK);
    let body = read_json_body(found).await;
    assert_eq!(body["screening_id"], record.screening_id.0);

    let missing = router
        .oneshot(
            Request::get("/api/v1/screenings/scr-999999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn history_route_lists_recent_screenings() {
    let (service, _) = build_service(vec![extractor().extract_job(&backend_record())]);
    for _ in 0..3 {
        service
            .screen(ScreeningRequest {
                resume_text: sample_resume().to_string(),
                jobs: None,
            })
            .expect("screening succeeds");
    }
    let router = screening_router(Arc::new(service));

    let response = router
        .oneshot(
            Request::get("/api/v1/screenings?limit=2")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let rows = body.as_array().expect("array body");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["top_decision"], "SHORTLIST");
}

#[tokio::test]
async fn extract_route_returns_profile() {
    let (service, _) = build_service(Vec::new());
    let router = screening_router(Arc::new(service));

    let response = router
        .oneshot(json_request(
            "/api/v1/profiles/extract",
            json!({
                "resume_text": "Candidate: Jane Doe\nEmail: jane@x.com\nSkills: Python, SQL\n5 years experience",
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["name"], "Jane Doe");
    assert_eq!(body["skills"], json!(["python", "sql"]));
    assert_eq!(body["experience_years"], 5);
    assert_eq!(body["seniority"], "mid-level");
}

#[tokio::test]
async fn features_route_returns_twelve_values() {
    let (service, _) = build_service(Vec::new());
    let router = screening_router(Arc::new(service));

    let response = router
        .oneshot(json_request(
            "/api/v1/features",
            json!({
                "resume_text": sample_resume(),
                "job": backend_record(),
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["vector"].as_array().map(Vec::len), Some(12));
    assert_eq!(body["feature_names"][9], "experience_ratio");
}

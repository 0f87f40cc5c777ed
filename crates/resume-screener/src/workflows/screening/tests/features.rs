use std::sync::Arc;

use super::common::*;

use crate::workflows::screening::domain::{DegreeTier, Seniority};
use crate::workflows::screening::features::{FeatureGenerator, TextSimilarity, FEATURE_NAMES};

#[test]
fn skill_overlap_counts_against_job_requirements() {
    let profile = profile(&["python"], 3, &[]);
    let job = posting("J-1", "Engineer", &["python", "java", "docker"], 0, 0, "");

    let features = feature_generator().generate(&profile, &job);

    assert_eq!(features.skill_overlap_count, 1.0);
    assert!(approx(features.skill_overlap_ratio, 1.0 / 3.0));
    assert!(approx(features.jaccard_similarity, 1.0 / 3.0));
    assert_eq!(features.profile_skill_count, 1.0);
    assert_eq!(features.job_skill_count, 3.0);
    assert_eq!(features.matched_skills, vec!["python".to_string()]);
    assert_eq!(
        features.missing_skills,
        vec!["docker".to_string(), "java".to_string()]
    );
}

#[test]
fn variants_are_compared_through_the_ontology() {
    let profile = profile(&["go", "kubernetes"], 3, &[]);
    let job = posting("J-1", "Engineer", &["golang", "k8s"], 0, 0, "");

    let features = feature_generator().generate(&profile, &job);

    assert_eq!(features.skill_overlap_count, 2.0);
    assert!(approx(features.jaccard_similarity, 1.0));
}

#[test]
fn underqualified_candidate_is_flagged_against_range_midpoint() {
    let profile = profile(&[], 1, &[]);
    let job = posting("J-1", "Engineer", &["python"], 5, 10, "");

    let features = feature_generator().generate(&profile, &job);

    assert_eq!(features.experience_match, 0.0);
    assert_eq!(features.underqualified, 1.0);
    assert_eq!(features.overqualified, 0.0);
    assert!(approx(features.experience_ratio, 1.0 / 7.5));
    assert!(approx(features.experience_delta, -6.5));
}

#[test]
fn experience_ratio_handles_zero_requirement_and_cap() {
    let job = posting("J-1", "Engineer", &[], 0, 0, "");
    let generator = feature_generator();

    let fresh = generator.generate(&profile(&[], 0, &[]), &job);
    assert_eq!(fresh.experience_ratio, 1.0);

    let seasoned = generator.generate(&profile(&[], 4, &[]), &job);
    assert_eq!(seasoned.experience_ratio, 2.0);

    let capped = generator.generate(
        &profile(&[], 30, &[]),
        &posting("J-2", "Engineer", &[], 5, 5, ""),
    );
    assert_eq!(capped.experience_ratio, 2.0);
    assert_eq!(capped.overqualified, 1.0);
}

#[test]
fn missing_job_skills_degrade_overlap_features_to_zero() {
    let profile = profile(&["python", "sql"], 3, &[]);
    let job = posting("J-1", "Engineer", &[], 0, 0, "");

    let features = feature_generator().generate(&profile, &job);

    assert_eq!(features.skill_overlap_count, 0.0);
    assert_eq!(features.skill_overlap_ratio, 0.0);
    assert_eq!(features.jaccard_similarity, 0.0);
    assert_eq!(features.profile_skill_count, 2.0);
}

#[test]
fn seniority_match_uses_canonical_ranges() {
    let job = posting("J-1", "Engineer", &[], 5, 10, "");
    let generator = feature_generator();

    let mut junior = profile(&[], 3, &[]);
    junior.seniority = Seniority::Junior;
    assert_eq!(generator.generate(&junior, &job).seniority_match, 1.0);

    let mut entry = profile(&[], 1, &[]);
    entry.seniority = Seniority::EntryLevel;
    assert_eq!(generator.generate(&entry, &job).seniority_match, 0.0);

    let mut unknown = profile(&[], 7, &[]);
    unknown.seniority = Seniority::Unknown;
    assert_eq!(generator.generate(&unknown, &job).seniority_match, 0.0);
}

#[test]
fn text_similarity_is_zero_without_job_text() {
    let profile = extractor().extract(sample_resume());
    let generator = feature_generator();

    let without_text = generator.generate(&profile, &posting("J-1", "Engineer", &[], 0, 0, ""));
    assert_eq!(without_text.tfidf_similarity, 0.0);

    let with_text = generator.generate(
        &profile,
        &posting(
            "J-2",
            "Engineer",
            &[],
            0,
            0,
            "Backend engineer with Python, Docker and PostgreSQL experience",
        ),
    );
    assert!(with_text.tfidf_similarity > 0.0 && with_text.tfidf_similarity <= 1.0);
}

struct FixedSimilarity(f64);

impl TextSimilarity for FixedSimilarity {
    fn similarity(&self, _text_a: &str, _text_b: &str) -> f64 {
        self.0
    }
}

#[test]
fn similarity_provider_is_pluggable_and_clamped() {
    let profile = extractor().extract(sample_resume());
    let job = posting("J-1", "Engineer", &[], 0, 0, "Python role");

    let generator = FeatureGenerator::new(ontology(), Arc::new(FixedSimilarity(0.42)));
    assert_eq!(generator.generate(&profile, &job).tfidf_similarity, 0.42);

    let generator = FeatureGenerator::new(ontology(), Arc::new(FixedSimilarity(3.0)));
    assert_eq!(generator.generate(&profile, &job).tfidf_similarity, 1.0);
}

#[test]
fn vector_follows_feature_name_order() {
    let profile = profile(&["python"], 1, &[]);
    let job = posting("J-1", "Engineer", &["python", "java", "docker"], 5, 10, "");

    let features = feature_generator().generate(&profile, &job);
    let vector = features.to_vector();

    assert_eq!(vector.len(), FEATURE_NAMES.len());
    assert_eq!((FEATURE_NAMES[0], vector[0]), ("skill_overlap_count", 1.0));
    assert_eq!((FEATURE_NAMES[8], vector[8]), ("underqualified", 1.0));
    assert_eq!(FEATURE_NAMES[11], "seniority_match");
    assert_eq!(vector[11], features.seniority_match);
}

#[test]
fn deserialized_profile_uses_extracted_fields_for_similarity() {
    let mut candidate = profile(&["python", "sql"], 4, &[DegreeTier::Bachelor]);
    candidate.job_titles = vec!["Data Engineer".to_string()];
    assert!(candidate.source_text.is_empty());

    assert_eq!(candidate.similarity_text(), "Data Engineer python sql Bachelor's");

    let job = posting("J-1", "Engineer", &[], 0, 0, "Python and SQL data pipelines");
    let features = feature_generator().generate(&candidate, &job);
    assert!(features.tfidf_similarity > 0.0, "got {}", features.tfidf_similarity);
}

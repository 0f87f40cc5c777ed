//! Fixed-order numeric match features for a (profile, job) pair.

mod similarity;

pub use similarity::{TextSimilarity, TfIdfSimilarity};

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::domain::{JobPosting, Profile};
use super::ontology::SkillOntology;

const MAX_EXPERIENCE_RATIO: f64 = 2.0;

/// Feature names in vector order. Downstream consumers index by position.
pub const FEATURE_NAMES: [&str; 12] = [
    "skill_overlap_count",
    "skill_overlap_ratio",
    "jaccard_similarity",
    "profile_skill_count",
    "job_skill_count",
    "experience_delta",
    "experience_match",
    "overqualified",
    "underqualified",
    "experience_ratio",
    "tfidf_similarity",
    "seniority_match",
];

/// The twelve match features plus the skill sets behind the overlap counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSet {
    pub skill_overlap_count: f64,
    pub skill_overlap_ratio: f64,
    pub jaccard_similarity: f64,
    pub profile_skill_count: f64,
    pub job_skill_count: f64,
    pub experience_delta: f64,
    pub experience_match: f64,
    pub overqualified: f64,
    pub underqualified: f64,
    pub experience_ratio: f64,
    pub tfidf_similarity: f64,
    pub seniority_match: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

impl FeatureSet {
    pub fn to_vector(&self) -> [f64; 12] {
        [
            self.skill_overlap_count,
            self.skill_overlap_ratio,
            self.jaccard_similarity,
            self.profile_skill_count,
            self.job_skill_count,
            self.experience_delta,
            self.experience_match,
            self.overqualified,
            self.underqualified,
            self.experience_ratio,
            self.tfidf_similarity,
            self.seniority_match,
        ]
    }
}

pub struct FeatureGenerator {
    ontology: Arc<SkillOntology>,
    similarity: Arc<dyn TextSimilarity>,
}

impl FeatureGenerator {
    pub fn new(ontology: Arc<SkillOntology>, similarity: Arc<dyn TextSimilarity>) -> Self {
        Self {
            ontology,
            similarity,
        }
    }

    /// Generator backed by [`TfIdfSimilarity`].
    pub fn with_tfidf(ontology: Arc<SkillOntology>) -> Self {
        Self::new(ontology, Arc::new(TfIdfSimilarity))
    }

    pub fn generate(&self, profile: &Profile, job: &JobPosting) -> FeatureSet {
        let profile_skills = self.canonical_set(&profile.skills);
        let job_skills = self.canonical_set(&job.required_skills);

        let matched: BTreeSet<&String> = profile_skills.intersection(&job_skills).collect();
        let union_len = profile_skills.union(&job_skills).count();
        let overlap = matched.len() as f64;

        let skill_overlap_ratio = if job_skills.is_empty() {
            0.0
        } else {
            overlap / job_skills.len() as f64
        };
        let jaccard_similarity = if union_len == 0 {
            0.0
        } else {
            overlap / union_len as f64
        };

        let years = f64::from(profile.experience_years);
        let min_years = f64::from(job.min_experience_years);
        let max_years = f64::from(job.max_experience_years);
        let required = job.required_years();

        let experience_ratio = if required == 0.0 {
            if years == 0.0 {
                1.0
            } else {
                MAX_EXPERIENCE_RATIO
            }
        } else {
            (years / required).min(MAX_EXPERIENCE_RATIO)
        };

        let job_text = job.description.trim();
        let profile_text = profile.similarity_text();
        let tfidf_similarity = if job_text.is_empty() || profile_text.trim().is_empty() {
            0.0
        } else {
            self.similarity
                .similarity(&profile_text, job_text)
                .clamp(0.0, 1.0)
        };

        let seniority_match = match profile.seniority.experience_range() {
            Some((low, high)) => {
                let overlaps =
                    job.max_experience_years >= low && job.min_experience_years <= high;
                flag(overlaps)
            }
            None => 0.0,
        };

        FeatureSet {
            skill_overlap_count: overlap,
            skill_overlap_ratio,
            jaccard_similarity,
            profile_skill_count: profile_skills.len() as f64,
            job_skill_count: job_skills.len() as f64,
            experience_delta: years - required,
            experience_match: flag(years >= min_years),
            overqualified: flag(max_years > 0.0 && years > 2.0 * max_years),
            underqualified: flag(years < min_years),
            experience_ratio,
            tfidf_similarity,
            seniority_match,
            matched_skills: matched.into_iter().cloned().collect(),
            missing_skills: job_skills.difference(&profile_skills).cloned().collect(),
        }
    }

    fn canonical_set(&self, skills: &BTreeSet<String>) -> BTreeSet<String> {
        skills
            .iter()
            .map(|skill| self.ontology.normalize(skill))
            .filter(|skill| !skill.is_empty())
            .collect()
    }
}

fn flag(condition: bool) -> f64 {
    if condition {
        1.0
    } else {
        0.0
    }
}

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::super::domain::{DegreeTier, JobPosting, Profile};
use super::super::extraction::degree_tiers;
use super::super::ontology::SkillOntology;
use super::config::ScoringWeights;

const TITLE_STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "for", "to", "in", "of", "with", "at", "by", "from",
];
const NEUTRAL: f64 = 0.5;

/// Raw component scores, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub keywords: f64,
}

impl ComponentScores {
    pub fn composite(&self, weights: &ScoringWeights) -> f64 {
        self.skills * weights.skills
            + self.experience * weights.experience
            + self.education * weights.education
            + self.keywords * weights.keywords
    }
}

/// Required skills split by whether the candidate covers them through any alias.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct SkillCoverage {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

impl SkillCoverage {
    pub fn score(&self) -> f64 {
        let total = self.matched.len() + self.missing.len();
        if total == 0 {
            0.0
        } else {
            self.matched.len() as f64 / total as f64
        }
    }
}

pub(crate) fn skill_coverage(
    ontology: &SkillOntology,
    profile: &Profile,
    job: &JobPosting,
) -> SkillCoverage {
    let candidate: BTreeSet<String> = profile
        .skills
        .iter()
        .flat_map(|skill| ontology.expand(skill))
        .collect();

    let mut coverage = SkillCoverage::default();
    let required: BTreeSet<String> = job
        .required_skills
        .iter()
        .map(|skill| skill.trim().to_lowercase())
        .filter(|skill| !skill.is_empty())
        .collect();

    for skill in required {
        let covered = ontology
            .expand(&skill)
            .iter()
            .any(|alias| candidate.contains(alias));
        if covered {
            coverage.matched.push(skill);
        } else {
            coverage.missing.push(skill);
        }
    }
    coverage
}

/// `1.0` when the requirement is met, otherwise a step function of the ratio.
pub(crate) fn experience_score(candidate_years: u32, required_years: u32) -> f64 {
    if required_years == 0 || candidate_years >= required_years {
        return 1.0;
    }

    let ratio = f64::from(candidate_years) / f64::from(required_years);
    if ratio >= 0.8 {
        0.7
    } else if ratio >= 0.5 {
        0.5
    } else if ratio > 0.0 {
        0.3
    } else {
        0.2
    }
}

/// Highest degree tier the posting asks for, if any.
pub(crate) fn required_degree(job: &JobPosting) -> Option<DegreeTier> {
    degree_tiers(&job.description).into_iter().next_back()
}

pub(crate) fn education_score(profile: &Profile, job: &JobPosting) -> f64 {
    let Some(required) = required_degree(job) else {
        return NEUTRAL;
    };

    match profile.highest_degree() {
        Some(held) if held >= required => 1.0,
        Some(held) if required.below() == Some(held) => 0.6,
        _ if required <= DegreeTier::Bachelor => 0.4,
        _ => 0.3,
    }
}

/// Share of meaningful job-title words found in the candidate's name, skills and degrees.
pub(crate) fn keyword_score(profile: &Profile, job: &JobPosting) -> f64 {
    let title = job.title.to_lowercase();
    let keywords: Vec<&str> = title
        .split(|c: char| !c.is_alphanumeric() && c != '+' && c != '#' && c != '.')
        .map(|word| word.trim_matches('.'))
        .filter(|word| word.chars().count() > 2 && !TITLE_STOP_WORDS.contains(word))
        .collect();
    if keywords.is_empty() {
        return NEUTRAL;
    }

    let mut haystack = profile.name.to_lowercase();
    for skill in &profile.skills {
        haystack.push(' ');
        haystack.push_str(&skill.to_lowercase());
    }
    for degree in &profile.education {
        haystack.push(' ');
        haystack.push_str(&degree.label().to_lowercase());
    }

    let found = keywords
        .iter()
        .filter(|keyword| haystack.contains(*keyword))
        .count();
    found as f64 / keywords.len() as f64
}

pub(crate) fn score_components(
    ontology: &SkillOntology,
    profile: &Profile,
    job: &JobPosting,
) -> (ComponentScores, SkillCoverage) {
    let coverage = skill_coverage(ontology, profile, job);
    let scores = ComponentScores {
        skills: coverage.score(),
        experience: experience_score(profile.experience_years, job.min_experience_years),
        education: education_score(profile, job),
        keywords: keyword_score(profile, job),
    };
    (scores, coverage)
}

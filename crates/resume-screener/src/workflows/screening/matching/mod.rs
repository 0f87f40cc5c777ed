mod config;
mod policy;
mod rules;

pub use config::{ScoringConfig, ScoringConfigError, ScoringWeights};
pub use rules::ComponentScores;

use std::sync::Arc;

use rayon::prelude::*;

use super::domain::{as_percent, Decision, JobPosting, MatchResult, Profile, ScoreBreakdown};
use super::explanation::{ExplanationGenerator, ExplanationInput};
use super::ontology::SkillOntology;
use policy::decide;

const MEETS_EXPERIENCE_SCORE: f64 = 0.8;

/// Stateless scorer that applies the rubric to one profile against many postings.
#[derive(Debug, Clone)]
pub struct MatchScorer {
    ontology: Arc<SkillOntology>,
    config: ScoringConfig,
    explainer: ExplanationGenerator,
}

impl MatchScorer {
    pub fn new(
        ontology: Arc<SkillOntology>,
        config: ScoringConfig,
    ) -> Result<Self, ScoringConfigError> {
        config.validate()?;
        Ok(Self {
            ontology,
            config,
            explainer: ExplanationGenerator,
        })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Top-N results sorted by composite score, ties kept in input order.
    pub fn score(&self, profile: &Profile, jobs: &[JobPosting]) -> Vec<MatchResult> {
        let mut evaluations: Vec<JobEvaluation> = jobs
            .par_iter()
            .map(|job| self.evaluate(profile, job))
            .collect();

        evaluations.sort_by(|left, right| right.composite.total_cmp(&left.composite));
        evaluations.truncate(self.config.top_n);

        evaluations
            .into_iter()
            .enumerate()
            .map(|(index, evaluation)| {
                let mut result = evaluation.result;
                result.rank = index + 1;
                result
            })
            .collect()
    }

    /// Unranked evaluation of a single posting.
    pub fn evaluate(&self, profile: &Profile, job: &JobPosting) -> JobEvaluation {
        let (components, coverage) = rules::score_components(&self.ontology, profile, job);
        let composite = components.composite(&self.config.weights);
        let decision = decide(composite, &self.config);

        let breakdown = ScoreBreakdown {
            skills: as_percent(components.skills),
            experience: as_percent(components.experience),
            education: as_percent(components.education),
            keywords: as_percent(components.keywords),
        };

        let rationale = self.explainer.explain(&ExplanationInput {
            decision,
            score: as_percent(composite),
            components,
            matched: &coverage.matched,
            missing: &coverage.missing,
            candidate_years: profile.experience_years,
            required_years: job.min_experience_years,
            job_title: &job.title,
        });

        let result = MatchResult {
            job_id: job.job_id.clone(),
            job_title: job.title.clone(),
            score: as_percent(composite),
            decision,
            rank: 0,
            breakdown,
            skill_match_percentage: breakdown.skills,
            matched_skills: coverage.matched,
            missing_skills: coverage.missing,
            experience_years_candidate: profile.experience_years,
            experience_years_required: job.min_experience_years,
            meets_experience: components.experience >= MEETS_EXPERIENCE_SCORE,
            rationale,
        };

        JobEvaluation {
            components,
            composite,
            result,
        }
    }

    /// Decision for a raw composite in `[0, 1]` under this scorer's thresholds.
    pub fn decide(&self, composite: f64) -> Decision {
        decide(composite, &self.config)
    }
}

/// Raw scoring output for one posting, before ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct JobEvaluation {
    pub components: ComponentScores,
    pub composite: f64,
    pub result: MatchResult,
}

//! Rule-cascade extraction of candidate profiles and job postings.
//!
//! Every field is resolved by an ordered list of named rules; the first rule that matches
//! wins and a field nobody matches keeps its zero value. Extraction never fails.

mod history;
mod job;
mod patterns;
mod rules;
mod skills;

pub use job::parse_experience_range;
pub use rules::{run_cascade, FieldRule, RuleOutcome, ADDRESS_RULES, NAME_RULES, PHONE_RULES};

pub(crate) use history::degree_tiers;

use std::collections::BTreeSet;
use std::sync::Arc;

use super::domain::{JobPosting, JobRecord, Profile, UNKNOWN_CANDIDATE};
use super::ontology::SkillOntology;
use patterns::EMAIL;

const MIN_VISIBLE_CHARS: usize = 10;
const SKILLS_FOR_FULL_CONFIDENCE: f64 = 5.0;

/// Pre-split view of the raw text shared by every rule.
#[derive(Debug)]
pub struct ExtractionInput<'a> {
    pub text: &'a str,
    /// Trimmed, non-empty lines in document order.
    pub lines: Vec<&'a str>,
}

impl<'a> ExtractionInput<'a> {
    pub fn new(text: &'a str) -> Self {
        let lines = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        Self { text, lines }
    }
}

/// Stateless extractor; one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct FieldExtractor {
    ontology: Arc<SkillOntology>,
    reference_year: i32,
    name_rules: &'static [FieldRule],
    phone_rules: &'static [FieldRule],
    address_rules: &'static [FieldRule],
}

impl FieldExtractor {
    /// `reference_year` stands in for "present" in open-ended date ranges.
    pub fn new(ontology: Arc<SkillOntology>, reference_year: i32) -> Self {
        Self {
            ontology,
            reference_year,
            name_rules: NAME_RULES,
            phone_rules: PHONE_RULES,
            address_rules: ADDRESS_RULES,
        }
    }

    /// Replace the name cascade, e.g. to run with header detection only.
    pub fn with_name_rules(mut self, rules: &'static [FieldRule]) -> Self {
        self.name_rules = rules;
        self
    }

    pub fn ontology(&self) -> &Arc<SkillOntology> {
        &self.ontology
    }

    pub fn extract(&self, raw_text: &str) -> Profile {
        let visible = raw_text
            .chars()
            .filter(|c| !c.is_whitespace() && !c.is_control())
            .count();
        if visible < MIN_VISIBLE_CHARS {
            return Profile::default();
        }

        let input = ExtractionInput::new(raw_text);

        let name = run_cascade(self.name_rules, &input)
            .map(|(_, value)| value)
            .unwrap_or_else(|| UNKNOWN_CANDIDATE.to_string());
        let email = EMAIL
            .as_ref()
            .and_then(|re| re.find(raw_text))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        let phone = run_cascade(self.phone_rules, &input)
            .map(|(_, value)| value)
            .unwrap_or_default();
        let address = run_cascade(self.address_rules, &input)
            .map(|(_, value)| value)
            .unwrap_or_default();

        let skills = self.extract_skills(raw_text);
        let experience_years = history::experience_years(raw_text, self.reference_year);
        let education = history::degree_tiers(raw_text);
        let job_titles = history::job_titles(&input.lines);
        let seniority = history::derive_seniority(&job_titles, experience_years);

        let mut profile = Profile {
            name,
            email,
            phone,
            address,
            skills,
            experience_years,
            education,
            seniority,
            confidence: 0.0,
            job_titles,
            source_text: raw_text.split_whitespace().collect::<Vec<_>>().join(" "),
        };
        profile.confidence = confidence(&profile);
        profile
    }

    /// Canonical skills mentioned anywhere in `text`.
    pub fn extract_skills(&self, text: &str) -> BTreeSet<String> {
        skills::extract_skills(&self.ontology, text)
    }

    pub fn extract_job(&self, record: &JobRecord) -> JobPosting {
        job::posting_from_record(&self.ontology, record)
    }
}

/// Weighted completeness: name 0.3, email 0.3, skills up to 0.4.
fn confidence(profile: &Profile) -> f64 {
    let mut score = 0.0;
    if profile.has_name() {
        score += 0.3;
    }
    if !profile.email.is_empty() {
        score += 0.3;
    }
    score += 0.4 * (profile.skills.len() as f64 / SKILLS_FOR_FULL_CONFIDENCE).min(1.0);
    (score * 100.0).round() / 100.0
}

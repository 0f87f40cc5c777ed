use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const UNKNOWN_CANDIDATE: &str = "Unknown Candidate";

/// Identifier wrapper for persisted screening runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScreeningId(pub String);

impl fmt::Display for ScreeningId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonical degree tiers, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DegreeTier {
    #[serde(rename = "Associate's")]
    Associate,
    #[serde(rename = "Bachelor's")]
    Bachelor,
    #[serde(rename = "Master's")]
    Master,
    #[serde(rename = "PhD")]
    Doctorate,
}

impl DegreeTier {
    pub fn label(&self) -> &'static str {
        match self {
            DegreeTier::Associate => "Associate's",
            DegreeTier::Bachelor => "Bachelor's",
            DegreeTier::Master => "Master's",
            DegreeTier::Doctorate => "PhD",
        }
    }

    /// Tier immediately below this one, if any.
    pub fn below(&self) -> Option<DegreeTier> {
        match self {
            DegreeTier::Associate => None,
            DegreeTier::Bachelor => Some(DegreeTier::Associate),
            DegreeTier::Master => Some(DegreeTier::Bachelor),
            DegreeTier::Doctorate => Some(DegreeTier::Master),
        }
    }
}

/// Seniority tier derived from job titles or experience thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Seniority {
    EntryLevel,
    Junior,
    MidLevel,
    Senior,
    Executive,
    #[default]
    Unknown,
}

impl Seniority {
    pub fn label(&self) -> &'static str {
        match self {
            Seniority::EntryLevel => "entry-level",
            Seniority::Junior => "junior",
            Seniority::MidLevel => "mid-level",
            Seniority::Senior => "senior",
            Seniority::Executive => "executive",
            Seniority::Unknown => "unknown",
        }
    }

    /// Canonical experience-year range associated with the tier.
    pub fn experience_range(&self) -> Option<(u32, u32)> {
        match self {
            Seniority::EntryLevel => Some((0, 2)),
            Seniority::Junior => Some((2, 5)),
            Seniority::MidLevel => Some((5, 10)),
            Seniority::Senior => Some((10, 20)),
            Seniority::Executive => Some((15, 50)),
            Seniority::Unknown => None,
        }
    }

    pub fn from_experience(years: u32) -> Self {
        match years {
            10.. => Seniority::Senior,
            5..=9 => Seniority::MidLevel,
            2..=4 => Seniority::Junior,
            _ => Seniority::EntryLevel,
        }
    }
}

/// Structured candidate facts extracted from one resume text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub skills: BTreeSet<String>,
    pub experience_years: u32,
    pub education: BTreeSet<DegreeTier>,
    pub seniority: Seniority,
    pub confidence: f64,
    #[serde(default)]
    pub job_titles: Vec<String>,
    /// Whitespace-normalized input, kept for text similarity only.
    #[serde(default, skip_serializing)]
    pub source_text: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: UNKNOWN_CANDIDATE.to_string(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            skills: BTreeSet::new(),
            experience_years: 0,
            education: BTreeSet::new(),
            seniority: Seniority::Unknown,
            confidence: 0.0,
            job_titles: Vec::new(),
            source_text: String::new(),
        }
    }
}

impl Profile {
    pub fn has_name(&self) -> bool {
        !self.name.is_empty() && self.name != UNKNOWN_CANDIDATE
    }

    pub fn highest_degree(&self) -> Option<DegreeTier> {
        self.education.iter().next_back().copied()
    }

    /// Text used for similarity scoring; falls back to the extracted fields when the
    /// source text was not carried along (e.g. a deserialized profile).
    pub fn similarity_text(&self) -> String {
        if !self.source_text.trim().is_empty() {
            return self.source_text.clone();
        }

        let mut parts: Vec<&str> = self.job_titles.iter().map(String::as_str).collect();
        parts.extend(self.skills.iter().map(String::as_str));
        parts.extend(self.education.iter().map(|tier| tier.label()));
        parts.join(" ")
    }
}

/// Raw job record as it arrives from a catalog export or an API payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(default, alias = "Job Id", alias = "Job ID")]
    pub job_id: String,
    #[serde(default, alias = "Job Title")]
    pub job_title: String,
    #[serde(default, alias = "Role Category")]
    pub role_category: String,
    /// Pipe-delimited skill list.
    #[serde(default, alias = "Skills")]
    pub skills: String,
    #[serde(default, alias = "Experience")]
    pub experience_range_text: String,
    #[serde(default, alias = "Qualifications")]
    pub qualifications_text: String,
    #[serde(default, alias = "Location")]
    pub location: String,
}

/// Normalized job posting reused across candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub job_id: String,
    pub title: String,
    #[serde(default)]
    pub role_category: String,
    #[serde(default)]
    pub required_skills: BTreeSet<String>,
    #[serde(default)]
    pub min_experience_years: u32,
    #[serde(default)]
    pub max_experience_years: u32,
    #[serde(default, alias = "qualifications")]
    pub description: String,
    #[serde(default)]
    pub location: String,
}

impl JobPosting {
    /// Midpoint of the experience range, or the minimum when the range is degenerate.
    pub fn required_years(&self) -> f64 {
        if self.max_experience_years > self.min_experience_years {
            f64::from(self.min_experience_years + self.max_experience_years) / 2.0
        } else {
            f64::from(self.min_experience_years)
        }
    }
}

/// Terminal classification for a candidate/job pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    Shortlist,
    Review,
    Reject,
}

impl Decision {
    pub fn label(&self) -> &'static str {
        match self {
            Decision::Shortlist => "SHORTLIST",
            Decision::Review => "REVIEW",
            Decision::Reject => "REJECT",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Decision::Shortlist => "advance to interview",
            Decision::Review => "needs recruiter review",
            Decision::Reject => "not a fit for this posting",
        }
    }
}

/// Per-component sub-scores reported in percent with one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub keywords: f64,
}

/// Ranked, explained outcome for one job posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub job_id: String,
    pub job_title: String,
    pub score: f64,
    pub decision: Decision,
    pub rank: usize,
    pub breakdown: ScoreBreakdown,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub skill_match_percentage: f64,
    pub experience_years_candidate: u32,
    pub experience_years_required: u32,
    pub meets_experience: bool,
    pub rationale: String,
}

/// Persisted output of one screening run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningRecord {
    pub screening_id: ScreeningId,
    pub screened_at: DateTime<Utc>,
    pub profile: Profile,
    pub jobs_considered: usize,
    pub matches: Vec<MatchResult>,
}

impl ScreeningRecord {
    pub fn top_decision(&self) -> Option<Decision> {
        self.matches.first().map(|result| result.decision)
    }
}

/// Percent with one decimal, e.g. `0.6666 -> 66.7`.
pub(crate) fn as_percent(value: f64) -> f64 {
    (value * 1000.0).round() / 10.0
}

use std::collections::BTreeSet;

use super::patterns::{EXPERIENCE_RANGE, FIRST_NUMBER};
use super::skills::extract_skills;
use crate::workflows::screening::domain::{JobPosting, JobRecord};
use crate::workflows::screening::ontology::SkillOntology;

pub(crate) fn posting_from_record(ontology: &SkillOntology, record: &JobRecord) -> JobPosting {
    let mut required_skills: BTreeSet<String> = record
        .skills
        .split('|')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(|skill| ontology.normalize(skill))
        .collect();

    if required_skills.is_empty() {
        required_skills = extract_skills(ontology, &record.qualifications_text);
    }

    let (min_experience_years, max_experience_years) =
        parse_experience_range(&record.experience_range_text);

    JobPosting {
        job_id: record.job_id.trim().to_string(),
        title: record.job_title.trim().to_string(),
        role_category: record.role_category.trim().to_string(),
        required_skills,
        min_experience_years,
        max_experience_years,
        description: record.qualifications_text.trim().to_string(),
        location: record.location.trim().to_string(),
    }
}

/// `"5 - 10 yrs"` -> `(5, 10)`, `"3 years"` -> `(3, 3)`, anything else -> `(0, 0)`.
pub fn parse_experience_range(text: &str) -> (u32, u32) {
    if let Some(captures) = EXPERIENCE_RANGE.as_ref().and_then(|re| re.captures(text)) {
        let low = captures.get(1).and_then(|m| m.as_str().parse::<u32>().ok());
        let high = captures.get(2).and_then(|m| m.as_str().parse::<u32>().ok());
        if let (Some(low), Some(high)) = (low, high) {
            return (low.min(high), low.max(high));
        }
    }

    FIRST_NUMBER
        .as_ref()
        .and_then(|re| re.captures(text))
        .and_then(|captures| captures.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .map(|years| (years, years))
        .unwrap_or((0, 0))
}

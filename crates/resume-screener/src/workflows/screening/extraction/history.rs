use regex::Regex;
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::sync::LazyLock;

use super::patterns::{
    is_match, DEGREE_ASSOCIATE, DEGREE_BACHELOR, DEGREE_DOCTORATE, DEGREE_MASTER,
    EXPERIENCE_HEADER, MS_NOT_A_DEGREE, TOTAL_YEARS, YEARS_IN_FIELD, YEARS_OF_EXPERIENCE,
    YEAR_RANGE,
};
use crate::workflows::screening::domain::{DegreeTier, Seniority};
use crate::workflows::screening::ontology::translate_job_title;

pub(crate) const MAX_EXPERIENCE_YEARS: u32 = 50;
const TITLE_SCAN_LINES: usize = 30;
const MAX_TITLE_WORDS: usize = 10;
const MAX_TITLES: usize = 5;

const TITLE_KEYWORDS: &[&str] = &[
    "engineer", "developer", "programmer", "manager", "analyst", "scientist", "architect",
    "consultant", "specialist", "lead", "senior", "junior", "principal", "director", "head",
    "vp", "designer", "administrator", "coordinator", "associate", "executive", "intern",
    "officer",
];

const TITLE_HEADERS: &[&str] = &[
    "title",
    "position",
    "role",
    "current role",
    "designation",
    "job title",
];

/// Seniority keyword groups, checked in this order within each title.
const SENIORITY_KEYWORDS: &[(Seniority, &[&str])] = &[
    (Seniority::Senior, &["senior", "sr", "lead", "principal"]),
    (Seniority::Junior, &["junior", "jr", "associate"]),
    (Seniority::Executive, &["director", "vp", "head", "chief"]),
];

/// Years of experience: explicit statements first, then summed year ranges.
pub(crate) fn experience_years(text: &str, reference_year: i32) -> u32 {
    let explicit: [&LazyLock<Option<Regex>>; 4] = [
        &YEARS_OF_EXPERIENCE,
        &EXPERIENCE_HEADER,
        &YEARS_IN_FIELD,
        &TOTAL_YEARS,
    ];

    for pattern in explicit {
        let Some(re) = pattern.as_ref() else {
            continue;
        };
        let stated = re
            .captures_iter(text)
            .filter_map(|captures| captures.get(1))
            .filter_map(|m| m.as_str().parse::<u32>().ok())
            .find(|years| (1..=MAX_EXPERIENCE_YEARS).contains(years));
        if let Some(years) = stated {
            return years;
        }
    }

    summed_year_ranges(text, reference_year)
}

fn summed_year_ranges(text: &str, reference_year: i32) -> u32 {
    let Some(re) = YEAR_RANGE.as_ref() else {
        return 0;
    };

    let total: i64 = re
        .captures_iter(text)
        .filter_map(|captures| {
            let start = captures.get(1)?.as_str().parse::<i64>().ok()?;
            let end_raw = captures.get(2)?.as_str();
            let end = match end_raw.to_ascii_lowercase().as_str() {
                "present" | "current" | "now" => i64::from(reference_year),
                other => other.parse::<i64>().ok()?,
            };
            Some((end - start).max(0))
        })
        .sum();

    total.clamp(0, i64::from(MAX_EXPERIENCE_YEARS)) as u32
}

/// Degree tiers mentioned anywhere in the text.
pub(crate) fn degree_tiers(text: &str) -> BTreeSet<DegreeTier> {
    let tiers: [(&LazyLock<Option<Regex>>, DegreeTier); 4] = [
        (&DEGREE_DOCTORATE, DegreeTier::Doctorate),
        (&DEGREE_MASTER, DegreeTier::Master),
        (&DEGREE_BACHELOR, DegreeTier::Bachelor),
        (&DEGREE_ASSOCIATE, DegreeTier::Associate),
    ];

    // bare "MS" counts, but not inside "MS Office" or "Ms. Jane"
    let without_ms_noise = match MS_NOT_A_DEGREE.as_ref() {
        Some(re) => re.replace_all(text, " "),
        None => Cow::Borrowed(text),
    };

    tiers
        .into_iter()
        .filter(|(pattern, tier)| match tier {
            DegreeTier::Master => is_match(pattern, &without_ms_noise),
            _ => is_match(pattern, text),
        })
        .map(|(_, tier)| tier)
        .collect()
}

/// Title-like phrases in document order, Arabic titles translated to English.
pub(crate) fn job_titles(lines: &[&str]) -> Vec<String> {
    let mut titles: Vec<String> = Vec::new();

    for line in lines.iter().take(TITLE_SCAN_LINES) {
        let candidate = match title_candidate(line) {
            Some(candidate) => candidate,
            None => continue,
        };
        if !titles.contains(&candidate) {
            titles.push(candidate);
        }
        if titles.len() == MAX_TITLES {
            break;
        }
    }

    titles
}

fn title_candidate(line: &str) -> Option<String> {
    if let Some(english) = translate_job_title(line) {
        return Some(english.to_string());
    }
    if line.contains('@') {
        return None;
    }

    let phrase = match line.split_once(':') {
        Some((header, rest)) => {
            let header = header.trim().to_lowercase();
            if !TITLE_HEADERS.contains(&header.as_str()) {
                return None;
            }
            rest.trim()
        }
        None => line.trim(),
    };

    let words = lowercase_words(phrase);
    if words.is_empty() || words.len() > MAX_TITLE_WORDS {
        return None;
    }
    if !words.iter().any(|word| TITLE_KEYWORDS.contains(&word.as_str())) {
        return None;
    }
    // "Associate's degree", "Master of Science" and friends are not titles
    if !degree_tiers(phrase).is_empty() {
        return None;
    }

    Some(phrase.to_string())
}

/// Keyword scan over titles, falling back to experience thresholds.
pub(crate) fn derive_seniority(titles: &[String], experience_years: u32) -> Seniority {
    seniority_from_titles(titles).unwrap_or_else(|| Seniority::from_experience(experience_years))
}

pub(crate) fn seniority_from_titles(titles: &[String]) -> Option<Seniority> {
    titles.iter().find_map(|title| {
        let words = lowercase_words(title);
        SENIORITY_KEYWORDS
            .iter()
            .find(|(_, keywords)| words.iter().any(|word| keywords.contains(&word.as_str())))
            .map(|(seniority, _)| *seniority)
    })
}

fn lowercase_words(phrase: &str) -> Vec<String> {
    phrase
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_statements_follow_priority_order() {
        assert_eq!(experience_years("Over 7+ years of experience in QA", 2025), 7);
        assert_eq!(experience_years("Experience: 4 yrs", 2025), 4);
        assert_eq!(experience_years("3 years in fintech", 2025), 3);
        assert_eq!(experience_years("Total - 12 years", 2025), 12);
        // the first pattern wins even when a later one appears earlier in the text
        assert_eq!(
            experience_years("2 years in retail. 9 years of experience overall", 2025),
            9
        );
    }

    #[test]
    fn implausible_statements_fall_through_to_ranges() {
        assert_eq!(
            experience_years("120 years of experience\nAcme 2019 - 2022", 2025),
            3
        );
    }

    #[test]
    fn year_ranges_sum_and_respect_reference_year() {
        let text = "Acme 2015-2018\nGlobex 2018 to present";
        assert_eq!(experience_years(text, 2024), 9);
        assert_eq!(experience_years(text, 2020), 5);
    }

    #[test]
    fn year_ranges_cap_at_fifty() {
        assert_eq!(experience_years("1950 - 2020", 2025), MAX_EXPERIENCE_YEARS);
        assert_eq!(experience_years("no dates here", 2025), 0);
    }

    #[test]
    fn degree_detection_covers_every_tier() {
        let tiers = degree_tiers("Ph.D. in Physics; M.Sc. Computing; B.Tech; Associate's degree");
        assert_eq!(
            tiers.into_iter().collect::<Vec<_>>(),
            vec![
                DegreeTier::Associate,
                DegreeTier::Bachelor,
                DegreeTier::Master,
                DegreeTier::Doctorate
            ]
        );
        assert!(degree_tiers("Certified Scrum Master").is_empty());
        assert_eq!(
            degree_tiers("MBA, 2019").into_iter().collect::<Vec<_>>(),
            vec![DegreeTier::Master]
        );
    }

    #[test]
    fn bare_ms_is_a_master_degree_but_products_are_not() {
        for text in [
            "MS Computer Science, Cairo University, 2019",
            "MS, Computer Science",
            "M.S. in Statistics",
        ] {
            assert_eq!(
                degree_tiers(text).into_iter().collect::<Vec<_>>(),
                vec![DegreeTier::Master],
                "{text}"
            );
        }
        assert!(degree_tiers("Proficient in MS Office and MS Excel").is_empty());
        assert!(degree_tiers("Ms. Sara Ali\nAccountant").is_empty());
        assert!(degree_tiers("Reports built in MS SQL Server").is_empty());
        assert_eq!(
            degree_tiers("MS Office expert with an MS in Finance")
                .into_iter()
                .collect::<Vec<_>>(),
            vec![DegreeTier::Master]
        );
    }

    #[test]
    fn titles_skip_degrees_and_contact_lines() {
        let lines = [
            "Jane Doe",
            "jane.lead@example.com",
            "Senior Backend Engineer",
            "Associate's Degree in Networking",
            "Title: Data Analyst",
            "Summary: analyst with a passion for data",
            "مهندس برمجيات",
        ];
        assert_eq!(
            job_titles(&lines),
            vec![
                "Senior Backend Engineer".to_string(),
                "Data Analyst".to_string(),
                "Software Engineer".to_string(),
            ]
        );
    }

    #[test]
    fn seniority_prefers_title_keywords() {
        let titles = vec!["Lead Developer".to_string()];
        assert_eq!(derive_seniority(&titles, 1), Seniority::Senior);

        let titles = vec!["Head of Data".to_string()];
        assert_eq!(derive_seniority(&titles, 3), Seniority::Executive);

        assert_eq!(derive_seniority(&[], 12), Seniority::Senior);
        assert_eq!(derive_seniority(&[], 6), Seniority::MidLevel);
        assert_eq!(derive_seniority(&[], 2), Seniority::Junior);
        assert_eq!(derive_seniority(&[], 0), Seniority::EntryLevel);
    }
}

use regex::Regex;
use std::sync::LazyLock;

use super::patterns::{
    ADDRESS_HEADER, NAME_HEADER, PHONE_INTERNATIONAL, PHONE_LOCAL, PHONE_MOBILE_LOCAL,
    PHONE_PARENTHESIZED, PHONE_US, RESUME_OF_HEADER,
};
use super::ExtractionInput;

const NAME_SCAN_LINES: usize = 20;
const ADDRESS_SCAN_LINES: usize = 25;

const ADDRESS_TOKENS: &[&str] = &[
    "street", "st", "road", "rd", "avenue", "ave", "boulevard", "blvd", "lane", "city", "town",
    "district", "governorate", "province", "postal", "zip", "apartment", "apt", "building",
    "floor", "block", "suite", "sheikh", "zayed", "cairo", "giza", "alex", "alexandria", "maadi",
    "nasr", "new", "downtown", "heliopolis", "mohandessin", "dokki", "zamalek",
];

const NAME_BLOCKLIST: &[&str] = &[
    "curriculum", "vitae", "resume", "cv", "profile", "contact", "information", "details",
    "personal", "data", "document", "summary", "objective", "experience", "education", "skills",
    "references",
];

const ROLE_KEYWORDS: &[&str] = &[
    "engineer", "developer", "manager", "director", "analyst", "scientist", "architect",
    "consultant", "specialist", "designer", "administrator", "coordinator", "intern", "officer",
];

/// Result of a single extraction rule.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleOutcome {
    pub value: String,
    pub matched: bool,
}

impl RuleOutcome {
    pub fn hit(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            matched: true,
        }
    }

    pub fn miss() -> Self {
        Self::default()
    }

    fn from_option(value: Option<String>) -> Self {
        value.map(Self::hit).unwrap_or_default()
    }
}

/// Named extraction rule; cascades stop at the first rule that matches.
#[derive(Clone, Copy)]
pub struct FieldRule {
    pub name: &'static str,
    pub apply: fn(&ExtractionInput<'_>) -> RuleOutcome,
}

impl std::fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldRule").field("name", &self.name).finish()
    }
}

pub const NAME_RULES: &[FieldRule] = &[
    FieldRule {
        name: "name_header",
        apply: name_from_header,
    },
    FieldRule {
        name: "leading_line",
        apply: name_from_leading_lines,
    },
];

pub const PHONE_RULES: &[FieldRule] = &[
    FieldRule {
        name: "international",
        apply: phone_international,
    },
    FieldRule {
        name: "mobile_local",
        apply: phone_mobile_local,
    },
    FieldRule {
        name: "us",
        apply: phone_us,
    },
    FieldRule {
        name: "local",
        apply: phone_local,
    },
    FieldRule {
        name: "parenthesized",
        apply: phone_parenthesized,
    },
];

pub const ADDRESS_RULES: &[FieldRule] = &[
    FieldRule {
        name: "address_header",
        apply: address_from_header,
    },
    FieldRule {
        name: "token_density",
        apply: address_from_token_density,
    },
];

/// Walk the cascade, returning the first matching rule's name and value.
pub fn run_cascade(
    rules: &[FieldRule],
    input: &ExtractionInput<'_>,
) -> Option<(&'static str, String)> {
    rules.iter().find_map(|rule| {
        let outcome = (rule.apply)(input);
        outcome.matched.then(|| (rule.name, outcome.value))
    })
}

fn first_match(pattern: &LazyLock<Option<Regex>>, text: &str) -> RuleOutcome {
    let Some(re) = pattern.as_ref() else {
        return RuleOutcome::miss();
    };
    RuleOutcome::from_option(re.find(text).map(|m| m.as_str().trim().to_string()))
}

fn phone_international(input: &ExtractionInput<'_>) -> RuleOutcome {
    first_match(&PHONE_INTERNATIONAL, input.text)
}

fn phone_mobile_local(input: &ExtractionInput<'_>) -> RuleOutcome {
    first_match(&PHONE_MOBILE_LOCAL, input.text)
}

fn phone_us(input: &ExtractionInput<'_>) -> RuleOutcome {
    first_match(&PHONE_US, input.text)
}

fn phone_local(input: &ExtractionInput<'_>) -> RuleOutcome {
    first_match(&PHONE_LOCAL, input.text)
}

fn phone_parenthesized(input: &ExtractionInput<'_>) -> RuleOutcome {
    first_match(&PHONE_PARENTHESIZED, input.text)
}

/// Header lines only count near the top, same window as the leading-line rule.
fn name_from_header(input: &ExtractionInput<'_>) -> RuleOutcome {
    let head = &input.lines[..input.lines.len().min(NAME_SCAN_LINES)];
    let candidates = [&NAME_HEADER, &RESUME_OF_HEADER]
        .into_iter()
        .filter_map(|pattern| pattern.as_ref())
        .flat_map(move |re| head.iter().filter_map(move |line| re.captures(line)))
        .filter_map(|captures| captures.get(1))
        .map(|m| clean_name(m.as_str()));

    for candidate in candidates {
        if is_valid_name(&candidate) {
            return RuleOutcome::hit(candidate);
        }
    }
    RuleOutcome::miss()
}

fn name_from_leading_lines(input: &ExtractionInput<'_>) -> RuleOutcome {
    RuleOutcome::from_option(
        input
            .lines
            .iter()
            .take(NAME_SCAN_LINES)
            .map(|line| clean_name(line))
            .find(|line| is_valid_name(line) && address_token_hits(line) == 0),
    )
}

fn address_from_header(input: &ExtractionInput<'_>) -> RuleOutcome {
    let Some(re) = ADDRESS_HEADER.as_ref() else {
        return RuleOutcome::miss();
    };
    let Some(captures) = re.captures(input.text) else {
        return RuleOutcome::miss();
    };

    let remainder = captures.get(1).map(|m| m.as_str().trim()).unwrap_or("");
    if !remainder.is_empty() {
        return RuleOutcome::hit(remainder);
    }

    // Header on its own line: take the next non-empty line.
    let header_end = captures.get(0).map(|m| m.end()).unwrap_or(input.text.len());
    RuleOutcome::from_option(
        input.text[header_end..]
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(str::to_string),
    )
}

fn address_from_token_density(input: &ExtractionInput<'_>) -> RuleOutcome {
    RuleOutcome::from_option(
        input
            .lines
            .iter()
            .take(ADDRESS_SCAN_LINES)
            .find(|line| {
                line.split_whitespace().count() >= 2
                    && !line.contains('@')
                    && address_token_hits(line) >= 2
            })
            .map(|line| line.to_string()),
    )
}

fn clean_name(raw: &str) -> String {
    raw.trim()
        .trim_matches(|c: char| matches!(c, '|' | ',' | ';' | '-' | '*' | '•'))
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn words_lower(line: &str) -> impl Iterator<Item = String> + '_ {
    line.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
}

fn address_token_hits(line: &str) -> usize {
    words_lower(line)
        .filter(|word| ADDRESS_TOKENS.contains(&word.as_str()))
        .count()
}

/// Shape checks a candidate name must pass regardless of which rule produced it.
pub(crate) fn is_valid_name(candidate: &str) -> bool {
    let tokens: Vec<&str> = candidate.split_whitespace().collect();
    if !(2..=6).contains(&tokens.len()) {
        return false;
    }
    if candidate
        .chars()
        .any(|c| c.is_ascii_digit() || c == '@' || c == ':')
    {
        return false;
    }

    let total = candidate.chars().count();
    let alphabetic = candidate
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace())
        .count();
    if (alphabetic as f64) / (total as f64) < 0.75 {
        return false;
    }

    let blocked = words_lower(candidate).any(|word| {
        NAME_BLOCKLIST.contains(&word.as_str()) || ROLE_KEYWORDS.contains(&word.as_str())
    });
    if blocked {
        return false;
    }

    tokens
        .iter()
        .any(|token| token.chars().next().is_some_and(char::is_uppercase))
}

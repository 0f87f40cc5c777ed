use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

use super::patterns::{
    is_match, COMPOUND_CPP, COMPOUND_CSHARP, COMPOUND_DOTNET, COMPOUND_NODE, SKILL_TOKEN,
};
use crate::workflows::screening::ontology::{is_multi_word, SkillOntology};

/// Canonical skills mentioned in `text`, sorted and de-duplicated.
pub(crate) fn extract_skills(ontology: &SkillOntology, text: &str) -> BTreeSet<String> {
    let lower = text.to_lowercase();
    let mut found = BTreeSet::new();

    if let Some(re) = SKILL_TOKEN.as_ref() {
        for token in re.find_iter(&lower).map(|m| clean_token(m.as_str())) {
            if token.is_empty() {
                continue;
            }
            if let Some(canonical) = ontology.canonicalize(token) {
                found.insert(canonical.to_string());
                continue;
            }
            // "python/django" style pairs
            if token.contains('/') {
                for part in token.split('/').map(clean_token) {
                    if let Some(canonical) = ontology.canonicalize(part) {
                        found.insert(canonical.to_string());
                    }
                }
            }
        }
    }

    for (variant, canonical) in ontology.terms() {
        if is_multi_word(variant) && contains_phrase(&lower, variant) {
            found.insert(canonical.to_string());
        }
    }

    // symbol-bearing skills that tokenization tends to mangle
    let compounds: [(&LazyLock<Option<Regex>>, &str); 4] = [
        (&COMPOUND_CPP, "c++"),
        (&COMPOUND_CSHARP, "c#"),
        (&COMPOUND_NODE, "node.js"),
        (&COMPOUND_DOTNET, ".net"),
    ];
    for (pattern, variant) in compounds {
        if !is_match(pattern, &lower) {
            continue;
        }
        if let Some(canonical) = ontology.canonicalize(variant) {
            found.insert(canonical.to_string());
        }
    }

    found
}

fn clean_token(token: &str) -> &str {
    token
        .trim_start_matches(['-', '/'])
        .trim_end_matches(['.', '-', '/'])
}

/// Substring match that refuses to start or end inside a word.
pub(crate) fn contains_phrase(haystack: &str, phrase: &str) -> bool {
    haystack.match_indices(phrase).any(|(start, matched)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + matched.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

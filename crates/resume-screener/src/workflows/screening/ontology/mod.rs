//! Canonical skill vocabulary shared by extraction, feature generation and scoring.
//!
//! The ontology is a value, not a global: callers build it once (from the built-in table or a
//! JSON document) and hand an `Arc` to each component that needs it.

mod table;
mod titles;

pub use titles::translate_job_title;

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::io::Read;
use std::path::Path;

/// Bidirectional canonical skill <-> variant lookup.
#[derive(Debug, Clone)]
pub struct SkillOntology {
    entries: BTreeMap<String, BTreeSet<String>>,
    index: HashMap<String, String>,
}

impl SkillOntology {
    /// Ontology backed by the built-in bilingual table.
    pub fn builtin() -> Result<Self, OntologyError> {
        Self::from_entries(
            table::BUILTIN_SKILLS
                .iter()
                .map(|(canonical, variants)| (*canonical, variants.to_vec())),
        )
    }

    /// Build from `(canonical, variants)` pairs. Every variant must resolve to exactly one
    /// canonical skill.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, OntologyError>
    where
        I: IntoIterator<Item = (S, Vec<S>)>,
        S: AsRef<str>,
    {
        let mut table: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        let mut index: HashMap<String, String> = HashMap::new();
        let mut pending = Vec::new();

        for (canonical, variants) in entries {
            let canonical = normalize_term(canonical.as_ref());
            if canonical.is_empty() {
                return Err(OntologyError::BlankCanonical);
            }
            claim(&mut index, &canonical, &canonical)?;
            table.entry(canonical.clone()).or_default().insert(canonical.clone());
            pending.push((canonical, variants));
        }

        if table.is_empty() {
            return Err(OntologyError::Empty);
        }

        for (canonical, variants) in pending {
            for variant in variants {
                let variant = normalize_term(variant.as_ref());
                if variant.is_empty() {
                    continue;
                }
                claim(&mut index, &variant, &canonical)?;
                if let Some(set) = table.get_mut(&canonical) {
                    set.insert(variant);
                }
            }
        }

        Ok(Self {
            entries: table,
            index,
        })
    }

    /// Load a `{"canonical": ["variant", ...]}` JSON document.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, OntologyError> {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_reader(reader)?;
        Self::from_entries(raw)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, OntologyError> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Canonical name for a known term or variant.
    pub fn canonicalize(&self, term: &str) -> Option<&str> {
        self.index.get(&normalize_term(term)).map(String::as_str)
    }

    /// Canonical name when known, otherwise the cleaned lowercase term.
    pub fn normalize(&self, term: &str) -> String {
        let cleaned = normalize_term(term);
        match self.index.get(&cleaned) {
            Some(canonical) => canonical.clone(),
            None => cleaned,
        }
    }

    /// The term itself plus its canonical name and every registered variant.
    pub fn expand(&self, term: &str) -> BTreeSet<String> {
        let cleaned = normalize_term(term);
        let mut expanded = BTreeSet::new();
        if let Some(variants) = self
            .index
            .get(&cleaned)
            .and_then(|canonical| self.entries.get(canonical))
        {
            expanded.extend(variants.iter().cloned());
        }
        if !cleaned.is_empty() {
            expanded.insert(cleaned);
        }
        expanded
    }

    /// Every `(variant, canonical)` pair, canonical names included.
    pub fn terms(&self) -> impl Iterator<Item = (&str, &str)> {
        self.index
            .iter()
            .map(|(variant, canonical)| (variant.as_str(), canonical.as_str()))
    }
}

/// Variants that can only be found by substring search (spaces or slashes).
pub fn is_multi_word(term: &str) -> bool {
    term.contains(' ') || term.contains('/')
}

pub(crate) fn normalize_term(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}', '\u{200f}', '\u{200e}'], "");
    cleaned
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn claim(
    index: &mut HashMap<String, String>,
    variant: &str,
    canonical: &str,
) -> Result<(), OntologyError> {
    match index.get(variant) {
        Some(existing) if existing != canonical => Err(OntologyError::ConflictingVariant {
            variant: variant.to_string(),
            first: existing.clone(),
            second: canonical.to_string(),
        }),
        Some(_) => Ok(()),
        None => {
            index.insert(variant.to_string(), canonical.to_string());
            Ok(())
        }
    }
}

/// Malformed ontology data. Always fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum OntologyError {
    #[error("skill ontology contains no entries")]
    Empty,
    #[error("skill ontology contains a blank canonical name")]
    BlankCanonical,
    #[error("variant '{variant}' maps to both '{first}' and '{second}'")]
    ConflictingVariant {
        variant: String,
        first: String,
        second: String,
    },
    #[error("failed to read skill ontology: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid skill ontology JSON: {0}")]
    Json(#[from] serde_json::Error),
}

use super::normalizer::{normalize_cell, normalize_skill_list};
use crate::workflows::screening::JobRecord;
use serde::{Deserialize, Deserializer};
use std::io::Read;

/// Parse catalog rows into job records. Rows without an id get a positional `row-N` id.
pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<JobRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let mut records = Vec::new();

    for (index, record) in csv_reader.deserialize::<CatalogRow>().enumerate() {
        let row = record?;
        if row.is_blank() {
            continue;
        }
        records.push(row.into_record(index + 1));
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(
        alias = "Job Id",
        alias = "Job ID",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    job_id: Option<String>,
    #[serde(
        alias = "Job Title",
        alias = "title",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    job_title: Option<String>,
    #[serde(alias = "Role Category", default, deserialize_with = "empty_string_as_none")]
    role_category: Option<String>,
    #[serde(alias = "Skills", default, deserialize_with = "empty_string_as_none")]
    skills: Option<String>,
    #[serde(
        alias = "Experience",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    experience_range_text: Option<String>,
    #[serde(
        alias = "Qualifications",
        alias = "Job Description",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    qualifications_text: Option<String>,
    #[serde(alias = "Location", default, deserialize_with = "empty_string_as_none")]
    location: Option<String>,
}

impl CatalogRow {
    fn is_blank(&self) -> bool {
        self.job_id.is_none()
            && self.job_title.is_none()
            && self.skills.is_none()
            && self.qualifications_text.is_none()
    }

    fn into_record(self, row_number: usize) -> JobRecord {
        let cell = |value: Option<String>| value.as_deref().map(normalize_cell).unwrap_or_default();

        let job_id = match self.job_id.as_deref().map(normalize_cell) {
            Some(id) if !id.is_empty() => id,
            _ => format!("row-{row_number}"),
        };

        JobRecord {
            job_id,
            job_title: cell(self.job_title),
            role_category: cell(self.role_category),
            skills: self
                .skills
                .as_deref()
                .map(normalize_skill_list)
                .unwrap_or_default(),
            experience_range_text: cell(self.experience_range_text),
            qualifications_text: cell(self.qualifications_text),
            location: cell(self.location),
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

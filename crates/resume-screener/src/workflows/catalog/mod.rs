//! CSV job catalog import.
//!
//! Accepts both the snake_case job record columns and the dataset export headers
//! (`Job Id`, `Job Title`, `Experience`, ...). Duplicate job ids keep the first row.

mod normalizer;
mod parser;

use crate::workflows::screening::{FieldExtractor, JobPosting};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug)]
pub enum JobCatalogImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for JobCatalogImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobCatalogImportError::Io(err) => write!(f, "failed to read job catalog: {}", err),
            JobCatalogImportError::Csv(err) => write!(f, "invalid job catalog CSV data: {}", err),
        }
    }
}

impl std::error::Error for JobCatalogImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            JobCatalogImportError::Io(err) => Some(err),
            JobCatalogImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for JobCatalogImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for JobCatalogImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct JobCatalogImporter;

impl JobCatalogImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        extractor: &FieldExtractor,
    ) -> Result<Vec<JobPosting>, JobCatalogImportError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let postings = Self::from_reader(file, extractor)?;
        info!(path = %path.display(), jobs = postings.len(), "job catalog loaded");
        Ok(postings)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        extractor: &FieldExtractor,
    ) -> Result<Vec<JobPosting>, JobCatalogImportError> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut postings = Vec::new();

        for record in parser::parse_records(reader)? {
            if !seen.insert(record.job_id.clone()) {
                debug!(job_id = %record.job_id, "duplicate catalog row skipped");
                continue;
            }
            postings.push(extractor.extract_job(&record));
        }

        Ok(postings)
    }
}

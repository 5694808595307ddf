use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{ExportSummary, JobLevel, JobPosting, JobSource, Outcome, SkipReason};

pub const SKILL_DELIMITER: &str = ", ";

/// Flat CSV shape of a posting; columns follow `JobPosting` field order.
#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    title: String,
    company: String,
    location: String,
    skills: String,
    url: String,
    date: String,
    level: JobLevel,
    source: JobSource,
}

impl From<&JobPosting> for CsvRow {
    fn from(posting: &JobPosting) -> Self {
        Self {
            title: posting.title.clone(),
            company: posting.company.clone(),
            location: posting.location.clone(),
            skills: posting.skills.join(SKILL_DELIMITER),
            url: posting.url.clone(),
            date: posting.date.clone(),
            level: posting.level,
            source: posting.source,
        }
    }
}

impl From<CsvRow> for JobPosting {
    fn from(row: CsvRow) -> Self {
        let skills = if row.skills.is_empty() {
            Vec::new()
        } else {
            row.skills.split(SKILL_DELIMITER).map(str::to_string).collect()
        };

        Self {
            title: row.title,
            company: row.company,
            location: row.location,
            skills,
            url: row.url,
            date: row.date,
            level: row.level,
            source: row.source,
        }
    }
}

/// Writes every posting to `path`, replacing any existing file. Nothing is
/// written for an empty collection.
pub fn export_csv(postings: &[JobPosting], path: impl AsRef<Path>) -> Result<Outcome<ExportSummary>> {
    if postings.is_empty() {
        return Ok(Outcome::Skipped(SkipReason::NoPostings));
    }

    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)?;
    for posting in postings {
        writer.serialize(CsvRow::from(posting))?;
    }
    writer.flush()?;

    tracing::info!("Saved {} jobs to {}", postings.len(), path.display());
    Ok(Outcome::Completed(ExportSummary {
        path: path.to_path_buf(),
        rows: postings.len(),
    }))
}

/// Loads postings back from a file written by [`export_csv`].
pub fn read_csv(path: impl AsRef<Path>) -> Result<Vec<JobPosting>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut postings = Vec::new();
    for row in reader.deserialize::<CsvRow>() {
        postings.push(row?.into());
    }
    Ok(postings)
}

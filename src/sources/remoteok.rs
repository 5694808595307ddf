use async_trait::async_trait;
use serde_json::Value;

use crate::analysis::classifier::EntryLevelClassifier;
use crate::error::{Error, Result};
use crate::models::{JobPosting, JobSource};
use crate::sources::client::JobBoardClient;
use crate::sources::fields::{self, Record};
use crate::sources::provider::JobBoard;

/// RemoteOK public API. The payload is an array whose first element is a
/// legal notice rather than a job.
pub struct RemoteOkBoard {
    client: JobBoardClient,
    url: String,
    limit: usize,
    prioritize_entry_level: bool,
}

impl RemoteOkBoard {
    pub fn new(
        client: JobBoardClient,
        url: impl Into<String>,
        limit: usize,
        prioritize_entry_level: bool,
    ) -> Self {
        Self {
            client,
            url: url.into(),
            limit,
            prioritize_entry_level,
        }
    }
}

#[async_trait]
impl JobBoard for RemoteOkBoard {
    async fn fetch_postings(&self) -> Result<Vec<JobPosting>> {
        let payload = self.client.get_json(&self.url, &[]).await?;
        normalize(&payload, self.limit, self.prioritize_entry_level)
    }

    fn source(&self) -> JobSource {
        JobSource::RemoteOk
    }

    fn name(&self) -> &str {
        "RemoteOK"
    }
}

/// Turns a raw RemoteOK payload into at most `limit` postings.
///
/// With `prioritize_entry_level`, entry-level records are moved ahead of the
/// rest before truncation, so the limit decides which records are parsed at
/// all. Relative order inside each group is preserved.
pub fn normalize(payload: &Value, limit: usize, prioritize_entry_level: bool) -> Result<Vec<JobPosting>> {
    let items = payload.as_array().ok_or_else(|| {
        Error::UnexpectedPayload(format!(
            "RemoteOK returned {}, expected an array",
            fields::kind(payload)
        ))
    })?;

    let jobs = items.get(1..).unwrap_or_default();
    let classifier = EntryLevelClassifier::remoteok();

    let selected: Vec<&Value> = if prioritize_entry_level {
        let (entry, other): (Vec<&Value>, Vec<&Value>) =
            jobs.iter().partition(|job| classifier.is_entry_level(&raw_position(job)));
        tracing::info!("Found {} entry-level/intern positions", entry.len());
        entry.into_iter().chain(other).take(limit).collect()
    } else {
        jobs.iter().take(limit).collect()
    };

    let mut postings = Vec::with_capacity(selected.len());
    for job in selected {
        match fields::as_record(job).map(|record| parse_record(record, &classifier)) {
            Ok(Some(posting)) => postings.push(posting),
            Ok(None) => tracing::debug!("Dropping RemoteOK record without a title"),
            Err(e) => tracing::debug!("Skipping RemoteOK record: {}", e),
        }
    }

    Ok(postings)
}

fn raw_position(job: &Value) -> String {
    job.get("position")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn parse_record(record: &Record, classifier: &EntryLevelClassifier) -> Option<JobPosting> {
    let title = fields::title(record, "position")?;
    let location = fields::text_or(record, "location", "Remote");

    Some(JobPosting {
        level: classifier.classify(&title),
        title,
        company: fields::text_or(record, "company", "N/A"),
        location,
        skills: fields::tags(record.get("tags")),
        url: fields::text_or(record, "url", ""),
        date: fields::text_or(record, "date", ""),
        source: JobSource::RemoteOk,
    })
}

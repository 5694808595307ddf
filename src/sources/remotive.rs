use async_trait::async_trait;
use serde_json::Value;

use crate::analysis::classifier::EntryLevelClassifier;
use crate::error::{Error, Result};
use crate::models::{JobPosting, JobSource};
use crate::sources::client::JobBoardClient;
use crate::sources::fields::{self, Record};
use crate::sources::provider::JobBoard;
use crate::taxonomy::SkillExtractor;

/// Remotive remote-jobs API, filtered to one category.
pub struct RemotiveBoard {
    client: JobBoardClient,
    url: String,
    category: String,
    limit: usize,
    extractor: SkillExtractor,
}

impl RemotiveBoard {
    pub fn new(
        client: JobBoardClient,
        url: impl Into<String>,
        category: impl Into<String>,
        limit: usize,
    ) -> Self {
        Self {
            client,
            url: url.into(),
            category: category.into(),
            limit,
            extractor: SkillExtractor::new(),
        }
    }
}

#[async_trait]
impl JobBoard for RemotiveBoard {
    async fn fetch_postings(&self) -> Result<Vec<JobPosting>> {
        let payload = self
            .client
            .get_json(&self.url, &[("category", self.category.as_str())])
            .await?;
        normalize(&payload, self.limit, &self.extractor)
    }

    fn source(&self) -> JobSource {
        JobSource::Remotive
    }

    fn name(&self) -> &str {
        "Remotive"
    }
}

/// Maps the first `limit` entries of the payload's `jobs` array. Skills come
/// from scanning each description.
pub fn normalize(payload: &Value, limit: usize, extractor: &SkillExtractor) -> Result<Vec<JobPosting>> {
    let body = payload.as_object().ok_or_else(|| {
        Error::UnexpectedPayload(format!(
            "Remotive returned {}, expected an object",
            fields::kind(payload)
        ))
    })?;

    let jobs = match body.get("jobs") {
        Some(Value::Array(jobs)) => jobs.as_slice(),
        Some(other) => {
            return Err(Error::UnexpectedPayload(format!(
                "Remotive `jobs` is {}, expected an array",
                fields::kind(other)
            )))
        }
        None => &[],
    };

    let classifier = EntryLevelClassifier::remotive();
    let mut postings = Vec::new();
    for job in jobs.iter().take(limit) {
        match fields::as_record(job).map(|record| parse_record(record, &classifier, extractor)) {
            Ok(Some(posting)) => postings.push(posting),
            Ok(None) => tracing::debug!("Dropping Remotive record without a title"),
            Err(e) => tracing::debug!("Skipping Remotive record: {}", e),
        }
    }

    Ok(postings)
}

fn parse_record(
    record: &Record,
    classifier: &EntryLevelClassifier,
    extractor: &SkillExtractor,
) -> Option<JobPosting> {
    let title = fields::title(record, "title")?;
    let description = fields::text_or(record, "description", "");

    Some(JobPosting {
        level: classifier.classify(&title),
        title,
        company: fields::text_or(record, "company_name", "N/A"),
        location: "Remote".to_string(),
        skills: extractor.extract(&description),
        url: fields::text_or(record, "url", ""),
        date: fields::text_or(record, "publication_date", ""),
        source: JobSource::Remotive,
    })
}

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{JobPosting, JobSource};

/// A job listing provider that yields normalized postings.
#[async_trait]
pub trait JobBoard: Send + Sync {
    async fn fetch_postings(&self) -> Result<Vec<JobPosting>>;
    fn source(&self) -> JobSource;
    fn name(&self) -> &str;
}

use std::path::PathBuf;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::analysis::aggregator::{
    market_summary, skill_frequency, title_keyword_frequency, SKILL_REPORT_SIZE,
};
use crate::config::{Config, PipelineConfig};
use crate::error::Result;
use crate::export::{export_csv, SkillChart};
use crate::models::{
    ExportSummary, FrequencyEntry, JobPosting, MarketSummary, Outcome, SkipReason,
};
use crate::sources::{sample_postings, JobBoard, JobBoardClient, RemoteOkBoard, RemotiveBoard};

/// Everything one run produced.
#[derive(Debug)]
pub struct PipelineRun {
    pub postings: Vec<JobPosting>,
    pub used_sample_data: bool,
    pub export: Outcome<ExportSummary>,
    pub summary: Outcome<MarketSummary>,
    pub titles: Outcome<Vec<FrequencyEntry>>,
    pub skills: Outcome<Vec<FrequencyEntry>>,
    pub chart: Outcome<PathBuf>,
}

pub struct JobPipeline {
    boards: Vec<Box<dyn JobBoard>>,
    config: PipelineConfig,
    politeness_delay: Duration,
    csv_path: PathBuf,
    chart_path: PathBuf,
}

impl JobPipeline {
    pub fn new(
        config: PipelineConfig,
        politeness_delay: Duration,
        csv_path: impl Into<PathBuf>,
        chart_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            boards: Vec::new(),
            config,
            politeness_delay,
            csv_path: csv_path.into(),
            chart_path: chart_path.into(),
        }
    }

    /// RemoteOK followed by Remotive, sharing one HTTP client.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = JobBoardClient::new(config.request_timeout)?;
        let pipeline_config = PipelineConfig::from(config);

        let remoteok = RemoteOkBoard::new(
            client.clone(),
            &config.remoteok_url,
            pipeline_config.remoteok_limit,
            pipeline_config.prioritize_entry_level,
        );
        let remotive = RemotiveBoard::new(
            client,
            &config.remotive_url,
            &config.remotive_category,
            pipeline_config.remotive_limit,
        );

        Ok(Self::new(
            pipeline_config,
            config.politeness_delay,
            &config.csv_path,
            &config.chart_path,
        )
        .with_board(remoteok)
        .with_board(remotive))
    }

    pub fn with_board(mut self, board: impl JobBoard + 'static) -> Self {
        self.boards.push(Box::new(board));
        self
    }

    pub async fn run(&self) -> PipelineRun {
        let (postings, used_sample_data) = self.collect_postings().await;

        let export = match export_csv(&postings, &self.csv_path) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!("Failed to export {}: {}", self.csv_path.display(), e);
                Outcome::Skipped(SkipReason::OutputFailed)
            }
        };

        let summary = market_summary(&postings);
        let titles = title_keyword_frequency(&postings);
        let skills = skill_frequency(&postings, SKILL_REPORT_SIZE);
        let chart = self.visualize(&postings);

        PipelineRun {
            postings,
            used_sample_data,
            export,
            summary,
            titles,
            skills,
            chart,
        }
    }

    /// Fetches every board in order, then falls back to the bundled sample
    /// set when fewer than `fallback_threshold` postings came back.
    pub async fn collect_postings(&self) -> (Vec<JobPosting>, bool) {
        let mut stages: Vec<Vec<JobPosting>> = Vec::with_capacity(self.boards.len());

        for (i, board) in self.boards.iter().enumerate() {
            if i > 0 && !self.politeness_delay.is_zero() {
                tokio::time::sleep(self.politeness_delay).await;
            }
            stages.push(self.fetch_board(board.as_ref()).await);
        }

        let postings: Vec<JobPosting> = stages.into_iter().flatten().collect();

        if postings.len() < self.config.fallback_threshold {
            tracing::warn!(
                "Only {} postings fetched (threshold {}), using sample data for demonstration",
                postings.len(),
                self.config.fallback_threshold
            );
            let samples = sample_postings();
            tracing::info!("Added {} sample jobs", samples.len());
            return (samples, true);
        }

        (postings, false)
    }

    async fn fetch_board(&self, board: &dyn JobBoard) -> Vec<JobPosting> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(format!("Scraping {}...", board.name()));
        spinner.enable_steady_tick(Duration::from_millis(120));

        let result = board.fetch_postings().await;
        spinner.finish_and_clear();

        match result {
            Ok(postings) => {
                tracing::info!("Scraped {} jobs from {}", postings.len(), board.name());
                if postings.iter().any(|p| p.source != board.source()) {
                    tracing::warn!("{} returned postings tagged with another source", board.name());
                }
                postings
            }
            Err(e) if e.is_transport() => {
                tracing::warn!("Could not reach {}: {}", board.name(), e);
                Vec::new()
            }
            Err(e) => {
                tracing::warn!("Error scraping {}: {}", board.name(), e);
                Vec::new()
            }
        }
    }

    fn visualize(&self, postings: &[JobPosting]) -> Outcome<PathBuf> {
        let entries = match skill_frequency(postings, self.config.top_skills_n) {
            Outcome::Completed(entries) => entries,
            Outcome::Skipped(reason) => return Outcome::Skipped(reason),
        };

        match SkillChart::new(self.config.top_skills_n).render(&entries, &self.chart_path) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!("Failed to render {}: {}", self.chart_path.display(), e);
                Outcome::Skipped(SkipReason::OutputFailed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::{JobLevel, JobSource};
    use async_trait::async_trait;

    struct StubBoard {
        source: JobSource,
        postings: Option<Vec<JobPosting>>,
    }

    #[async_trait]
    impl JobBoard for StubBoard {
        async fn fetch_postings(&self) -> Result<Vec<JobPosting>> {
            self.postings.clone().ok_or_else(|| Error::Http {
                status: 503,
                url: "http://stub.invalid".to_string(),
                message: "unavailable".to_string(),
            })
        }

        fn source(&self) -> JobSource {
            self.source
        }

        fn name(&self) -> &str {
            "stub"
        }
    }

    fn postings(source: JobSource, n: usize) -> Vec<JobPosting> {
        (0..n)
            .map(|i| JobPosting {
                title: format!("Backend Engineer {}", i),
                company: format!("Company {}", i % 3),
                location: "Remote".to_string(),
                skills: Vec::new(),
                url: String::new(),
                date: String::new(),
                level: JobLevel::Other,
                source,
            })
            .collect()
    }

    fn pipeline(dir: &tempfile::TempDir, config: PipelineConfig) -> JobPipeline {
        JobPipeline::new(
            config,
            Duration::ZERO,
            dir.path().join("jobs.csv"),
            dir.path().join("skills.png"),
        )
    }

    #[tokio::test]
    async fn test_falls_back_to_samples_when_sources_fail() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = pipeline(&dir, PipelineConfig::default())
            .with_board(StubBoard { source: JobSource::RemoteOk, postings: None })
            .with_board(StubBoard { source: JobSource::Remotive, postings: None });

        let (collected, used_sample_data) = pipeline.collect_postings().await;
        assert!(used_sample_data);
        assert_eq!(collected, sample_postings());
        assert!(collected.iter().all(|p| p.source == JobSource::Sample));
    }

    #[tokio::test]
    async fn test_thin_results_are_replaced_by_samples() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = pipeline(&dir, PipelineConfig::default()).with_board(StubBoard {
            source: JobSource::RemoteOk,
            postings: Some(postings(JobSource::RemoteOk, 4)),
        });

        let (collected, used_sample_data) = pipeline.collect_postings().await;
        assert!(used_sample_data);
        assert_eq!(collected.len(), 10);
        assert!(collected.iter().all(|p| p.source == JobSource::Sample));
    }

    #[tokio::test]
    async fn test_stages_concatenate_in_board_order() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = pipeline(&dir, PipelineConfig::default())
            .with_board(StubBoard {
                source: JobSource::RemoteOk,
                postings: Some(postings(JobSource::RemoteOk, 8)),
            })
            .with_board(StubBoard { source: JobSource::Remotive, postings: None })
            .with_board(StubBoard {
                source: JobSource::Remotive,
                postings: Some(postings(JobSource::Remotive, 3)),
            });

        let (collected, used_sample_data) = pipeline.collect_postings().await;
        assert!(!used_sample_data);
        assert_eq!(collected.len(), 11);
        assert!(collected[..8].iter().all(|p| p.source == JobSource::RemoteOk));
        assert!(collected[8..].iter().all(|p| p.source == JobSource::Remotive));
    }

    #[tokio::test]
    async fn test_run_exports_and_skips_chart_without_skills() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = pipeline(&dir, PipelineConfig::default()).with_board(StubBoard {
            source: JobSource::RemoteOk,
            postings: Some(postings(JobSource::RemoteOk, 12)),
        });

        let run = pipeline.run().await;
        assert_eq!(run.postings.len(), 12);

        let export = run.export.completed().unwrap();
        assert_eq!(export.rows, 12);
        assert!(export.path.exists());

        let summary = run.summary.completed().unwrap();
        assert_eq!(summary.unique_companies, 3);

        let titles = run.titles.completed().unwrap();
        assert_eq!(titles[0].label, "Engineer");
        assert_eq!(titles[0].count, 12);

        assert_eq!(run.skills, Outcome::Completed(Vec::new()));
        assert_eq!(run.chart, Outcome::Skipped(SkipReason::NoSkillData));
    }

    #[tokio::test]
    async fn test_run_on_empty_collection_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let config = PipelineConfig {
            fallback_threshold: 0,
            ..PipelineConfig::default()
        };
        let pipeline = pipeline(&dir, config)
            .with_board(StubBoard { source: JobSource::RemoteOk, postings: None });

        let run = pipeline.run().await;
        assert!(run.postings.is_empty());
        assert!(!run.used_sample_data);
        assert_eq!(run.export, Outcome::Skipped(SkipReason::NoPostings));
        assert!(run.summary.is_skipped());
        assert_eq!(run.titles, Outcome::Skipped(SkipReason::NoPostings));
        assert_eq!(run.skills, Outcome::Skipped(SkipReason::NoPostings));
        assert_eq!(run.chart, Outcome::Skipped(SkipReason::NoPostings));
        assert!(!dir.path().join("jobs.csv").exists());
    }
}

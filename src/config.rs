use std::env;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::Url;

use crate::error::{Error, Result};

pub const DEFAULT_REMOTEOK_URL: &str = "https://remoteok.com/api";
pub const DEFAULT_REMOTIVE_URL: &str = "https://remotive.com/api/remote-jobs";
pub const DEFAULT_REMOTIVE_CATEGORY: &str = "software-dev";

#[derive(Debug, Clone)]
pub struct Config {
    pub remoteok_url: String,
    pub remotive_url: String,
    pub remotive_category: String,
    /// Applied to every outbound request.
    pub request_timeout: Duration,
    /// Pause between source fetches.
    pub politeness_delay: Duration,
    pub csv_path: PathBuf,
    pub chart_path: PathBuf,
    pub pipeline: PipelineConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let remoteok_url =
            env::var("REMOTEOK_URL").unwrap_or_else(|_| DEFAULT_REMOTEOK_URL.to_string());
        validate_url("REMOTEOK_URL", &remoteok_url)?;

        let remotive_url =
            env::var("REMOTIVE_URL").unwrap_or_else(|_| DEFAULT_REMOTIVE_URL.to_string());
        validate_url("REMOTIVE_URL", &remotive_url)?;

        let remotive_category = env::var("REMOTIVE_CATEGORY")
            .unwrap_or_else(|_| DEFAULT_REMOTIVE_CATEGORY.to_string());

        let request_timeout = request_timeout(parse_var("REQUEST_TIMEOUT_SECS"));
        let politeness_delay =
            Duration::from_millis(parse_var("POLITENESS_DELAY_MS").unwrap_or(2000));

        let csv_path = env::var("CSV_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("tech_jobs.csv"));
        let chart_path = env::var("CHART_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("top_skills.png"));

        let defaults = PipelineConfig::default();
        let pipeline = PipelineConfig {
            remoteok_limit: parse_var("REMOTEOK_LIMIT").unwrap_or(defaults.remoteok_limit),
            remotive_limit: parse_var("REMOTIVE_LIMIT").unwrap_or(defaults.remotive_limit),
            prioritize_entry_level: env::var("PRIORITIZE_ENTRY_LEVEL")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.prioritize_entry_level),
            fallback_threshold: parse_var("FALLBACK_THRESHOLD")
                .unwrap_or(defaults.fallback_threshold),
            top_skills_n: parse_var("TOP_SKILLS").unwrap_or(defaults.top_skills_n),
        };

        Ok(Self {
            remoteok_url,
            remotive_url,
            remotive_category,
            request_timeout,
            politeness_delay,
            csv_path,
            chart_path,
            pipeline,
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

/// A zero or missing timeout falls back to the 10 second default.
fn request_timeout(secs: Option<u64>) -> Duration {
    Duration::from_secs(secs.filter(|s| *s > 0).unwrap_or(10))
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn validate_url(name: &str, value: &str) -> Result<()> {
    Url::parse(value)
        .map(|_| ())
        .map_err(|e| Error::Config(format!("{} is not a valid URL ({}): {}", name, value, e)))
}

/// Tunables for the fetch and analysis stages.
///
/// Defaults: `remoteok_limit = 100`, `remotive_limit = 50`,
/// `prioritize_entry_level = true`, `fallback_threshold = 10`,
/// `top_skills_n = 10`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub remoteok_limit: usize,
    pub remotive_limit: usize,
    /// Move entry-level RemoteOK records ahead of the rest before truncating.
    pub prioritize_entry_level: bool,
    /// Below this many fetched postings the bundled sample set is used instead.
    pub fallback_threshold: usize,
    /// Number of skills drawn in the chart.
    pub top_skills_n: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            remoteok_limit: 100,
            remotive_limit: 50,
            prioritize_entry_level: true,
            fallback_threshold: 10,
            top_skills_n: 10,
        }
    }
}

impl From<&Config> for PipelineConfig {
    fn from(config: &Config) -> Self {
        config.pipeline.clone()
    }
}

use std::path::PathBuf;

use chrono::{DateTime, Utc};

/// Result of a stage that may have nothing to work on.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Completed(T),
    Skipped(SkipReason),
}

impl<T> Outcome<T> {
    pub fn completed(self) -> Option<T> {
        match self {
            Outcome::Completed(value) => Some(value),
            Outcome::Skipped(_) => None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Outcome::Skipped(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoPostings,
    NoSkillData,
    /// The output file could not be written; details are logged.
    OutputFailed,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::NoPostings => write!(f, "no postings to analyze"),
            SkipReason::NoSkillData => write!(f, "no skill data to visualize"),
            SkipReason::OutputFailed => write!(f, "output could not be written"),
        }
    }
}

/// A counted label with its share of all postings.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyEntry {
    pub label: String,
    pub count: usize,
    pub percentage: f64,
}

impl FrequencyEntry {
    pub fn new(label: impl Into<String>, count: usize, total: usize) -> Self {
        Self {
            label: label.into(),
            count,
            percentage: percentage(count, total),
        }
    }
}

pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}

#[derive(Debug, Clone)]
pub struct MarketSummary {
    pub total_postings: usize,
    pub unique_companies: usize,
    pub remote: FrequencyEntry,
    pub entry_level: FrequencyEntry,
    pub top_companies: Vec<FrequencyEntry>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub rows: usize,
}

use serde::{Deserialize, Serialize};

/// One normalized job record. `title` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub location: String,
    pub skills: Vec<String>,
    pub url: String,
    pub date: String,
    pub level: JobLevel,
    pub source: JobSource,
}

impl JobPosting {
    pub fn is_entry_level(&self) -> bool {
        self.level == JobLevel::EntryLevel
    }

    pub fn is_remote(&self) -> bool {
        self.location.to_lowercase().contains("remote")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobLevel {
    #[serde(rename = "Entry-Level")]
    EntryLevel,
    Other,
}

impl std::fmt::Display for JobLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobLevel::EntryLevel => write!(f, "Entry-Level"),
            JobLevel::Other => write!(f, "Other"),
        }
    }
}

/// Provenance of a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobSource {
    #[serde(rename = "RemoteOK")]
    RemoteOk,
    Remotive,
    Sample,
}

impl std::fmt::Display for JobSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobSource::RemoteOk => write!(f, "RemoteOK"),
            JobSource::Remotive => write!(f, "Remotive"),
            JobSource::Sample => write!(f, "Sample"),
        }
    }
}

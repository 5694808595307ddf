use crate::models::JobLevel;
use crate::taxonomy::keywords::{ENTRY_LEVEL_KEYWORDS, REMOTIVE_ENTRY_LEVEL_KEYWORDS};

/// Keyword heuristic that tags internship and junior titles.
#[derive(Debug, Clone, Copy)]
pub struct EntryLevelClassifier {
    keywords: &'static [&'static str],
}

impl EntryLevelClassifier {
    pub fn new(keywords: &'static [&'static str]) -> Self {
        Self { keywords }
    }

    pub fn remoteok() -> Self {
        Self::new(ENTRY_LEVEL_KEYWORDS)
    }

    pub fn remotive() -> Self {
        Self::new(REMOTIVE_ENTRY_LEVEL_KEYWORDS)
    }

    pub fn is_entry_level(&self, title: &str) -> bool {
        let lower = title.to_lowercase();
        self.keywords.iter().any(|keyword| lower.contains(keyword))
    }

    pub fn classify(&self, title: &str) -> JobLevel {
        if self.is_entry_level(title) {
            JobLevel::EntryLevel
        } else {
            JobLevel::Other
        }
    }
}

impl Default for EntryLevelClassifier {
    fn default() -> Self {
        Self::remoteok()
    }
}

pub fn classify(title: &str) -> JobLevel {
    EntryLevelClassifier::default().classify(title)
}

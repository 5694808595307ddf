use std::collections::HashMap;

use chrono::Utc;

use crate::models::{FrequencyEntry, JobPosting, MarketSummary, Outcome, SkipReason};
use crate::taxonomy::ROLE_KEYWORDS;

/// Number of skills shown in the console breakdown.
pub const SKILL_REPORT_SIZE: usize = 15;
const TOP_COMPANIES: usize = 5;

/// Counts strings, remembering the order in which each was first seen.
#[derive(Debug, Default)]
struct OrderedCounter {
    index: HashMap<String, usize>,
    counts: Vec<(String, usize)>,
}

impl OrderedCounter {
    fn add(&mut self, key: &str) {
        match self.index.get(key) {
            Some(&i) => self.counts[i].1 += 1,
            None => {
                self.index.insert(key.to_string(), self.counts.len());
                self.counts.push((key.to_string(), 1));
            }
        }
    }

    fn len(&self) -> usize {
        self.counts.len()
    }

    /// Count descending; equal counts keep first-seen order.
    fn most_common(mut self, n: usize) -> Vec<(String, usize)> {
        self.counts.sort_by(|a, b| b.1.cmp(&a.1));
        self.counts.truncate(n);
        self.counts
    }
}

/// The `top_n` most frequent skills across all postings.
pub fn skill_frequency(postings: &[JobPosting], top_n: usize) -> Outcome<Vec<FrequencyEntry>> {
    if postings.is_empty() {
        return Outcome::Skipped(SkipReason::NoPostings);
    }

    let mut counter = OrderedCounter::default();
    for skill in postings.iter().flat_map(|p| p.skills.iter()) {
        counter.add(skill);
    }

    let total = postings.len();
    Outcome::Completed(
        counter
            .most_common(top_n)
            .into_iter()
            .map(|(skill, count)| FrequencyEntry::new(skill, count, total))
            .collect(),
    )
}

/// How many titles mention each role keyword. Zero counts are omitted.
pub fn title_keyword_frequency(postings: &[JobPosting]) -> Outcome<Vec<FrequencyEntry>> {
    if postings.is_empty() {
        return Outcome::Skipped(SkipReason::NoPostings);
    }

    let titles: Vec<String> = postings.iter().map(|p| p.title.to_lowercase()).collect();
    let total = postings.len();

    let mut entries: Vec<FrequencyEntry> = ROLE_KEYWORDS
        .iter()
        .map(|keyword| {
            let needle = keyword.to_lowercase();
            let count = titles.iter().filter(|t| t.contains(&needle)).count();
            FrequencyEntry::new(*keyword, count, total)
        })
        .filter(|entry| entry.count > 0)
        .collect();

    entries.sort_by(|a, b| b.count.cmp(&a.count));
    Outcome::Completed(entries)
}

pub fn market_summary(postings: &[JobPosting]) -> Outcome<MarketSummary> {
    if postings.is_empty() {
        return Outcome::Skipped(SkipReason::NoPostings);
    }

    let total = postings.len();
    let mut companies = OrderedCounter::default();
    for posting in postings {
        companies.add(&posting.company);
    }

    let remote = postings.iter().filter(|p| p.is_remote()).count();
    let entry_level = postings.iter().filter(|p| p.is_entry_level()).count();

    Outcome::Completed(MarketSummary {
        total_postings: total,
        unique_companies: companies.len(),
        remote: FrequencyEntry::new("Remote", remote, total),
        entry_level: FrequencyEntry::new("Entry-Level", entry_level, total),
        top_companies: companies
            .most_common(TOP_COMPANIES)
            .into_iter()
            .map(|(company, count)| FrequencyEntry::new(company, count, total))
            .collect(),
        generated_at: Utc::now(),
    })
}

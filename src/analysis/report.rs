use crate::models::{FrequencyEntry, MarketSummary, Outcome};

const LABEL_WIDTH: usize = 25;
const RULE_WIDTH: usize = 40;

/// `label.......... count (pct%)`, labels cut to the column width.
pub fn format_row(label: &str, count: usize, percentage: f64) -> String {
    let label: String = label.chars().take(LABEL_WIDTH).collect();
    format!("{:.<25} {:>3} ({:.1}%)", label, count, percentage)
}

pub fn format_frequency_table(heading: &str, outcome: &Outcome<Vec<FrequencyEntry>>) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", heading));
    output.push_str(&"-".repeat(RULE_WIDTH));
    output.push('\n');

    match outcome {
        Outcome::Completed(entries) => {
            for entry in entries {
                output.push_str(&format_row(&entry.label, entry.count, entry.percentage));
                output.push('\n');
            }
        }
        Outcome::Skipped(reason) => {
            output.push_str(&format!("Nothing to analyze: {}\n", reason));
        }
    }

    output
}

pub fn format_summary(outcome: &Outcome<MarketSummary>) -> String {
    let summary = match outcome {
        Outcome::Completed(summary) => summary,
        Outcome::Skipped(reason) => return format!("\nNothing to summarize: {}\n", reason),
    };

    let rule = "=".repeat(50);
    let mut output = String::new();
    output.push_str(&format!("\n{}\nTECH JOB MARKET SUMMARY\n{}\n", rule, rule));
    output.push_str(&format!("Total Jobs Analyzed: {}\n", summary.total_postings));
    output.push_str(&format!("Unique Companies: {}\n", summary.unique_companies));
    output.push_str(&format!(
        "Remote Jobs: {} ({:.1}%)\n",
        summary.remote.count, summary.remote.percentage
    ));
    if summary.entry_level.count > 0 {
        output.push_str(&format!(
            "Entry-Level/Intern: {} ({:.1}%)\n",
            summary.entry_level.count, summary.entry_level.percentage
        ));
    }

    output.push_str("\nTop 5 Companies Hiring:\n");
    for company in &summary.top_companies {
        output.push_str(&format!("  {}: {} positions\n", company.label, company.count));
    }

    output.push_str(&format!(
        "\nAnalyzed on: {}\n",
        summary.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SkipReason;

    #[test]
    fn test_format_row_pads_with_dots() {
        assert_eq!(
            format_row("Python", 7, 35.0),
            format!("Python{}   7 (35.0%)", ".".repeat(19))
        );
    }

    #[test]
    fn test_format_row_truncates_long_labels() {
        let row = format_row("Extremely Long Skill Name That Overflows", 12, 40.0);
        assert_eq!(row, "Extremely Long Skill Name  12 (40.0%)");
    }

    #[test]
    fn test_table_reports_skip() {
        let table = format_frequency_table("Skills", &Outcome::Skipped(SkipReason::NoPostings));
        assert!(table.contains("Nothing to analyze: no postings to analyze"));
    }

    #[test]
    fn test_table_rows() {
        let entries = vec![FrequencyEntry::new("Engineer", 3, 4)];
        let table = format_frequency_table("Titles", &Outcome::Completed(entries));
        assert!(table.contains(&format!("Engineer{}   3 (75.0%)", ".".repeat(17))));
    }
}

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use jobscope::analysis::report::{format_frequency_table, format_summary};
use jobscope::models::Outcome;
use jobscope::{Config, JobPipeline, PipelineRun};

#[derive(Parser, Debug)]
#[command(name = "jobscope")]
#[command(version = "0.1.0")]
#[command(about = "Scrape remote tech job boards and report skill demand")]
struct Args {
    /// Maximum RemoteOK postings to keep
    #[arg(long)]
    remoteok_limit: Option<usize>,

    /// Maximum Remotive postings to keep
    #[arg(long)]
    remotive_limit: Option<usize>,

    /// Keep RemoteOK payload order instead of moving entry-level roles first
    #[arg(long)]
    no_prioritize: bool,

    /// Use bundled sample data when fewer postings than this are fetched
    #[arg(long)]
    fallback_threshold: Option<usize>,

    /// Number of skills drawn in the chart
    #[arg(long)]
    top_skills: Option<usize>,

    /// CSV output path
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Chart output path
    #[arg(long)]
    chart: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Pause between job boards in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,
}

impl Args {
    fn apply(self, config: &mut Config) {
        if let Some(limit) = self.remoteok_limit {
            config.pipeline.remoteok_limit = limit;
        }
        if let Some(limit) = self.remotive_limit {
            config.pipeline.remotive_limit = limit;
        }
        if self.no_prioritize {
            config.pipeline.prioritize_entry_level = false;
        }
        if let Some(threshold) = self.fallback_threshold {
            config.pipeline.fallback_threshold = threshold;
        }
        if let Some(top) = self.top_skills {
            config.pipeline.top_skills_n = top;
        }
        if let Some(path) = self.csv {
            config.csv_path = path;
        }
        if let Some(path) = self.chart {
            config.chart_path = path;
        }
        if let Some(secs) = self.timeout_secs {
            config.request_timeout = Duration::from_secs(secs);
        }
        if let Some(ms) = self.delay_ms {
            config.politeness_delay = Duration::from_millis(ms);
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("jobscope=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let mut config = Config::from_env()?;
    args.apply(&mut config);

    tracing::info!("Searching for internships and entry-level positions...");
    let pipeline = JobPipeline::from_config(&config)?;
    let run = pipeline.run().await;

    print!("{}", format_run(&run));
    Ok(())
}

fn format_run(run: &PipelineRun) -> String {
    let mut output = String::new();

    if run.used_sample_data {
        output.push_str("\nNote: using sample data for demonstration\n");
    }

    match &run.export {
        Outcome::Completed(export) => output.push_str(&format!(
            "Saved {} jobs to {}\n",
            export.rows,
            export.path.display()
        )),
        Outcome::Skipped(reason) => output.push_str(&format!("No jobs saved: {}\n", reason)),
    }

    output.push_str(&format_summary(&run.summary));
    output.push_str(&format_frequency_table("Job Title Analysis:", &run.titles));
    output.push_str(&format_frequency_table("Top 15 Skills in Demand:", &run.skills));

    match &run.chart {
        Outcome::Completed(path) => {
            output.push_str(&format!("\nVisualization saved as {}\n", path.display()))
        }
        Outcome::Skipped(reason) => {
            output.push_str(&format!("\nNo visualization created: {}\n", reason))
        }
    }

    let rule = "=".repeat(50);
    output.push_str(&format!("\n{}\nAnalysis complete!\n{}\n", rule, rule));
    output
}

pub mod aggregator;
pub mod classifier;
pub mod pipeline;
pub mod report;

pub use aggregator::{market_summary, skill_frequency, title_keyword_frequency};
pub use classifier::{classify, EntryLevelClassifier};
pub use pipeline::{JobPipeline, PipelineRun};

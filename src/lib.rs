pub mod config;
pub mod error;
pub mod models;
pub mod sources;
pub mod taxonomy;
pub mod analysis;
pub mod export;

pub use config::{Config, PipelineConfig};
pub use error::{Error, Result};
pub use sources::{JobBoard, JobBoardClient};
pub use analysis::{JobPipeline, PipelineRun};
pub use models::{JobLevel, JobPosting, JobSource};

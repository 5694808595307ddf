pub mod job;
pub mod report;

pub use job::*;
pub use report::*;

pub mod chart;
pub mod tabular;

pub use chart::{ChartLayout, SkillChart};
pub use tabular::{export_csv, read_csv, SKILL_DELIMITER};

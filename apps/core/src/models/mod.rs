pub mod rows;

pub use rows::{ProcessExperienceRow, SkillRow, WorkHistoryRow};

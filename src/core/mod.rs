pub mod classify;
pub mod memo;
pub mod report;
pub mod sequences;

pub use crate::domain::model::{AgeRange, Person, PersonProjection};
pub use crate::domain::ports::ReportSettings;
pub use crate::utils::error::Result;

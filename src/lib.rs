pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::toml_config::TomlConfig;
pub use crate::core::classify::{filter_adults, group_by_age_range, AgeGroups};
pub use crate::core::memo::FibonacciMemo;
pub use crate::core::report::{sample_people, Report, ReportEngine};
pub use crate::domain::model::{AgeRange, Person, PersonProjection};
pub use crate::utils::error::{Result, RosterError};

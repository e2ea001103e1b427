pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{cli::LocalStorage, preferences::TravelPreferences, RunConfig};
pub use crate::core::{
    etl::ReportEngine, filter::DealFilter, generator::MockDealSource, pipeline::DealPipeline,
};
pub use crate::domain::model::{Deal, RunOutcome};
pub use crate::utils::error::{DealError, Result};

pub mod etl;
pub mod filter;
pub mod generator;
pub mod pipeline;
pub mod report;

pub use crate::domain::model::{Deal, RunOutcome};
pub use crate::domain::ports::{
    Clock, ConfigProvider, DealSource, Pipeline, RandomSource, Storage, SystemClock,
};
pub use crate::utils::error::Result;

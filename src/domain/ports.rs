use crate::config::preferences::TravelPreferences;
use crate::domain::model::{Deal, RunOutcome};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub trait Storage: Send + Sync {
    /// Writes `data` under `path` and returns the full location written to.
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn preferences(&self) -> &TravelPreferences;
    fn output_path(&self) -> &str;
}

/// Where candidate deals come from. Only the mock generator exists today.
#[async_trait]
pub trait DealSource: Send + Sync {
    async fn search(&self, preferences: &TravelPreferences) -> Result<Vec<Deal>>;
}

/// Randomness used by the mock generator.
pub trait RandomSource: Send {
    /// Uniform integer in `low..=high`.
    fn int_in_range(&mut self, low: u32, high: u32) -> u32;

    /// Uniform index in `0..len`. `len` is never zero.
    fn choose_index(&mut self, len: usize) -> usize;
}

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Deal>>;
    async fn transform(&self, deals: Vec<Deal>) -> Result<Vec<Deal>>;
    async fn load(&self, matches: Vec<Deal>) -> Result<RunOutcome>;
}

pub mod cli;
pub mod preferences;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use preferences::TravelPreferences;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "travel-deals")]
#[command(about = "Generates a markdown report of (mock) travel deals matching your preferences")]
pub struct CliConfig {
    /// Path to the JSON travel preferences file
    #[arg(long, default_value = "data/config.json")]
    pub config: String,

    /// Directory the report is written to
    #[arg(long, default_value = "./out")]
    pub output_path: String,

    /// Seed for the mock deal generator (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("config", &self.config)?;
        validate_path("output_path", &self.output_path)
    }
}

/// Everything one run needs: loaded preferences plus where to write.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub preferences: TravelPreferences,
    pub output_path: String,
}

impl RunConfig {
    pub fn new(preferences: TravelPreferences, output_path: impl Into<String>) -> Self {
        Self {
            preferences,
            output_path: output_path.into(),
        }
    }
}

impl ConfigProvider for RunConfig {
    fn preferences(&self) -> &TravelPreferences {
        &self.preferences
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output_path", &self.output_path)?;
        self.preferences.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::DealError;

    const PREFERENCES: &str = r#"{
        "origins": ["YYZ"],
        "destinations": ["CUN"],
        "depart_date": "2025-01-10",
        "return_date": "2025-01-17",
        "party_size": 2,
        "price_cap_per_person_cad": 800,
        "min_resort_stars": 4.0
    }"#;

    #[test]
    fn test_run_config_validation() {
        let preferences = TravelPreferences::from_json_str(PREFERENCES).unwrap();
        assert!(RunConfig::new(preferences.clone(), "./out").validate().is_ok());

        let err = RunConfig::new(preferences.clone(), "").validate().unwrap_err();
        assert!(err.to_string().contains("output_path"));

        let mut edited = preferences;
        edited.party_size = 0;
        let err = RunConfig::new(edited, "./out").validate().unwrap_err();
        assert!(matches!(err, DealError::InvalidConfigValueError { .. }));
    }
}

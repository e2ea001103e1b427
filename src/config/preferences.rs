use crate::utils::error::{DealError, Result};
use crate::utils::validation::{
    validate_codes, validate_date, validate_positive_number, validate_range, Validate,
};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::path::Path;

/// Travel preferences read from the JSON config file. Immutable for a run.
///
/// Dates and numbers keep their config text so the report echoes them as written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelPreferences {
    pub origins: Vec<String>,
    pub destinations: Vec<String>,
    pub depart_date: String,
    pub return_date: String,
    pub party_size: u32,
    /// 價格上限（每人，CAD）
    #[serde(rename = "price_cap_per_person_cad", alias = "price_cap_per_person")]
    pub price_cap_per_person: Number,
    pub min_resort_stars: Number,
}

impl TravelPreferences {
    /// 從 JSON 檔案載入並驗證
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| DealError::ConfigReadError {
                path: path.display().to_string(),
                source,
            })?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let preferences: Self = serde_json::from_str(content)?;
        preferences.validate()?;
        Ok(preferences)
    }

    pub fn price_cap(&self) -> f64 {
        self.price_cap_per_person.as_f64().unwrap_or(f64::NAN)
    }

    pub fn min_stars(&self) -> f64 {
        self.min_resort_stars.as_f64().unwrap_or(f64::NAN)
    }

    /// Deals always leave from the first configured origin.
    pub fn primary_origin(&self) -> Option<&str> {
        self.origins.first().map(String::as_str)
    }
}

impl Validate for TravelPreferences {
    fn validate(&self) -> Result<()> {
        validate_codes("origins", &self.origins)?;
        validate_codes("destinations", &self.destinations)?;
        validate_positive_number("party_size", self.party_size, 1)?;
        validate_range("price_cap_per_person_cad", self.price_cap(), 0.0, f64::MAX)?;
        validate_range("min_resort_stars", self.min_stars(), 0.0, 5.0)?;

        let depart = validate_date("depart_date", &self.depart_date)?;
        let return_date = validate_date("return_date", &self.return_date)?;
        if return_date < depart {
            return Err(DealError::InvalidConfigValueError {
                field: "return_date".to_string(),
                value: self.return_date.clone(),
                reason: format!("Return date is before depart date {}", self.depart_date),
            });
        }

        Ok(())
    }
}

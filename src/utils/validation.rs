use crate::utils::error::{DealError, Result};
use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(DealError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(DealError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(DealError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DealError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Requires at least one entry and no blank entries.
pub fn validate_codes(field_name: &str, codes: &[String]) -> Result<()> {
    if codes.is_empty() {
        return Err(DealError::ConfigValidationError {
            field: field_name.to_string(),
            message: "At least one location code is required".to_string(),
        });
    }

    for (index, code) in codes.iter().enumerate() {
        validate_non_empty_string(&format!("{}[{}]", field_name, index), code)?;
    }

    Ok(())
}

/// Parses a `YYYY-MM-DD` date. The text must round-trip exactly, so "2025-1-10" is rejected.
pub fn validate_date(field_name: &str, value: &str) -> Result<NaiveDate> {
    let invalid = |reason: String| DealError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason,
    };

    let date = NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|e| invalid(format!("Expected a YYYY-MM-DD date: {}", e)))?;

    if date.format(DATE_FORMAT).to_string() != value {
        return Err(invalid("Expected a zero-padded YYYY-MM-DD date".to_string()));
    }

    Ok(date)
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // NaN 與任何值比較都為 false，需用 !(..) 才能擋下
    if !(value >= min && value <= max) {
        return Err(DealError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

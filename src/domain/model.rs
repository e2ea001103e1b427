use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One flight + resort combination for a single destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub origin: String,
    pub destination: String,
    pub depart: String,
    #[serde(rename = "return")]
    pub return_date: String,
    pub resort: String,
    pub stars: f64,
    pub per_person_price: u32,
    pub total_price: u64,
}

impl Deal {
    /// Builds a deal whose total is always `per_person_price * party_size`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        depart: impl Into<String>,
        return_date: impl Into<String>,
        resort: impl Into<String>,
        stars: f64,
        per_person_price: u32,
        party_size: u32,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            depart: depart.into(),
            return_date: return_date.into(),
            resort: resort.into(),
            stars,
            per_person_price,
            total_price: u64::from(per_person_price) * u64::from(party_size),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub matches: Vec<Deal>,
    pub output_path: String,
    pub generated_at: DateTime<Utc>,
}

impl RunOutcome {
    /// Matches are sorted by price, so the first one is the cheapest.
    pub fn cheapest(&self) -> Option<&Deal> {
        self.matches.first()
    }
}

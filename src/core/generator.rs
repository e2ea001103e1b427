use crate::config::preferences::TravelPreferences;
use crate::core::{Deal, DealSource, RandomSource};
use crate::utils::error::{DealError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

pub const MIN_DEALS_PER_DESTINATION: u32 = 1;
pub const MAX_DEALS_PER_DESTINATION: u32 = 3;
pub const MIN_PRICE_PER_PERSON: u32 = 420;
pub const MAX_PRICE_PER_PERSON: u32 = 780;
pub const RESORT_STAR_RATINGS: [f64; 3] = [4.0, 4.5, 5.0];

/// Adapts any `rand` generator to [`RandomSource`].
#[derive(Debug)]
pub struct RngSource<R: Rng + Send>(R);

impl<R: Rng + Send> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl RngSource<StdRng> {
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng + Send> RandomSource for RngSource<R> {
    fn int_in_range(&mut self, low: u32, high: u32) -> u32 {
        self.0.gen_range(low..=high)
    }

    fn choose_index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

/// Fabricates deals in place of a real search provider.
pub struct MockDealSource {
    random: Mutex<Box<dyn RandomSource>>,
}

impl MockDealSource {
    pub fn new(random: impl RandomSource + 'static) -> Self {
        Self {
            random: Mutex::new(Box::new(random)),
        }
    }

    pub fn from_entropy() -> Self {
        Self::new(RngSource::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(RngSource::seeded(seed))
    }

    pub fn generate(&self, preferences: &TravelPreferences) -> Result<Vec<Deal>> {
        let mut random = self.random.lock().map_err(|_| DealError::ProcessingError {
            message: "random source lock poisoned".to_string(),
        })?;

        let origin = preferences
            .primary_origin()
            .ok_or_else(|| DealError::MissingConfigError {
                field: "origins".to_string(),
            })?;
        let mut deals = Vec::new();

        for destination in &preferences.destinations {
            let count =
                random.int_in_range(MIN_DEALS_PER_DESTINATION, MAX_DEALS_PER_DESTINATION);
            tracing::debug!("Generating {} mock deals for {}", count, destination);

            for index in 1..=count {
                let price = random.int_in_range(MIN_PRICE_PER_PERSON, MAX_PRICE_PER_PERSON);
                let stars = RESORT_STAR_RATINGS[random.choose_index(RESORT_STAR_RATINGS.len())];

                deals.push(Deal::new(
                    origin,
                    destination.as_str(),
                    preferences.depart_date.as_str(),
                    preferences.return_date.as_str(),
                    format!("Resort {}-{}", destination, index),
                    stars,
                    price,
                    preferences.party_size,
                ));
            }
        }

        Ok(deals)
    }
}

#[async_trait::async_trait]
impl DealSource for MockDealSource {
    async fn search(&self, preferences: &TravelPreferences) -> Result<Vec<Deal>> {
        self.generate(preferences)
    }
}

use crate::config::preferences::TravelPreferences;
use crate::core::Deal;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DealFilter {
    pub price_cap_per_person: f64,
    pub min_resort_stars: f64,
}

impl DealFilter {
    pub fn from_preferences(preferences: &TravelPreferences) -> Self {
        Self {
            price_cap_per_person: preferences.price_cap(),
            min_resort_stars: preferences.min_stars(),
        }
    }

    pub fn matches(&self, deal: &Deal) -> bool {
        f64::from(deal.per_person_price) <= self.price_cap_per_person
            && deal.stars >= self.min_resort_stars
    }

    /// Keeps matching deals, cheapest first. Equal prices keep their input order.
    pub fn apply(&self, deals: Vec<Deal>) -> Vec<Deal> {
        let mut matches: Vec<Deal> = deals.into_iter().filter(|d| self.matches(d)).collect();
        // sort_by_key 是穩定排序
        matches.sort_by_key(|d| d.per_person_price);
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal(resort: &str, price: u32, stars: f64) -> Deal {
        Deal::new(
            "YYZ",
            "CUN",
            "2025-01-10",
            "2025-01-17",
            resort,
            stars,
            price,
            2,
        )
    }

    fn filter(cap: f64, stars: f64) -> DealFilter {
        DealFilter {
            price_cap_per_person: cap,
            min_resort_stars: stars,
        }
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let f = filter(600.0, 4.5);
        assert!(f.matches(&deal("a", 600, 4.5)));
        assert!(!f.matches(&deal("b", 601, 5.0)));
        assert!(!f.matches(&deal("c", 420, 4.0)));
    }

    #[test]
    fn test_apply_filters_and_sorts() {
        let deals = vec![
            deal("a", 700, 5.0),
            deal("b", 450, 4.0),
            deal("c", 790, 5.0),
            deal("d", 520, 4.5),
        ];

        let result = filter(750.0, 4.5).apply(deals);

        let resorts: Vec<&str> = result.iter().map(|d| d.resort.as_str()).collect();
        assert_eq!(resorts, vec!["d", "a"]);
    }

    #[test]
    fn test_equal_prices_keep_input_order() {
        let deals = vec![
            deal("first", 500, 5.0),
            deal("cheap", 430, 4.0),
            deal("second", 500, 4.5),
            deal("third", 500, 4.0),
        ];

        let result = filter(800.0, 4.0).apply(deals);

        let resorts: Vec<&str> = result.iter().map(|d| d.resort.as_str()).collect();
        assert_eq!(resorts, vec!["cheap", "first", "second", "third"]);
    }

    #[test]
    fn test_nothing_under_low_cap() {
        let deals = vec![deal("a", 420, 5.0), deal("b", 780, 5.0)];
        assert!(filter(1.0, 4.0).apply(deals).is_empty());
    }

    #[test]
    fn test_from_preferences() {
        let prefs = crate::core::generator::tests::preferences(&["CUN"]);
        assert_eq!(DealFilter::from_preferences(&prefs), filter(800.0, 4.0));
    }
}

use chrono::{TimeZone, Utc};
use travel_deals::core::report::render_markdown;
use travel_deals::{DealFilter, MockDealSource, TravelPreferences};

fn preferences(cap: f64, min_stars: f64, party_size: u32) -> TravelPreferences {
    TravelPreferences::from_json_str(&format!(
        r#"{{
            "origins": ["YYZ", "YOW"],
            "destinations": ["CUN", "PUJ", "MBJ", "VRA", "SJD"],
            "depart_date": "2025-02-14",
            "return_date": "2025-02-21",
            "party_size": {party_size},
            "price_cap_per_person_cad": {cap},
            "min_resort_stars": {min_stars}
        }}"#
    ))
    .unwrap()
}

#[test]
fn test_filtered_deals_are_sorted_subset_within_limits() {
    let scenarios = [(800.0, 4.0, 2), (600.0, 4.5, 3), (450.0, 5.0, 1), (1.0, 4.0, 4)];

    for (seed, (cap, min_stars, party_size)) in scenarios.into_iter().enumerate() {
        let prefs = preferences(cap, min_stars, party_size);
        let filter = DealFilter::from_preferences(&prefs);

        for run in 0..25u64 {
            let candidates = MockDealSource::seeded(seed as u64 * 100 + run)
                .generate(&prefs)
                .unwrap();
            let matches = filter.apply(candidates.clone());

            for deal in &candidates {
                let expected_total = u64::from(deal.per_person_price) * u64::from(party_size);
                assert_eq!(deal.total_price, expected_total);
            }

            for deal in &matches {
                assert!(f64::from(deal.per_person_price) <= cap);
                assert!(deal.stars >= min_stars);
                assert!(candidates.contains(deal));
            }

            let expected = candidates.iter().filter(|d| filter.matches(d)).count();
            assert_eq!(matches.len(), expected);

            assert!(matches
                .windows(2)
                .all(|pair| pair[0].per_person_price <= pair[1].per_person_price));
        }
    }
}

#[test]
fn test_rendering_same_inputs_is_byte_identical() {
    let prefs = preferences(800.0, 4.0, 2);
    let deals = DealFilter::from_preferences(&prefs)
        .apply(MockDealSource::seeded(3).generate(&prefs).unwrap());
    let generated_at = Utc.with_ymd_and_hms(2025, 2, 1, 8, 0, 0).unwrap();

    let first = render_markdown(&prefs, &deals, generated_at);
    let second = render_markdown(&prefs, &deals, generated_at);

    assert_eq!(first.as_bytes(), second.as_bytes());
}

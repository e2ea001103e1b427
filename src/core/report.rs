use crate::config::preferences::TravelPreferences;
use crate::core::{Deal, RunOutcome};
use chrono::{DateTime, Utc};

pub const REPORT_TITLE: &str = "# Travel Agent Results";
pub const NO_DEALS_NOTICE: &str = "> No deals matched your filters this run.";
pub const RESULTS_HEADING: &str = "## Matching deals (mock data)";
const TABLE_HEADER: &str = concat!(
    "| Origin | Destination | Depart | Return | Resort | Stars ",
    "| Price/Person (CAD) | Total (CAD) |"
);
const TABLE_ALIGNMENT: &str = "|---|---|---|---|---|---:|---:|---:|";

/// Generated star ratings always keep one decimal ("4.0", "4.5").
fn format_stars(stars: f64) -> String {
    if stars.fract() == 0.0 {
        format!("{:.1}", stars)
    } else {
        stars.to_string()
    }
}

pub fn format_timestamp(generated_at: DateTime<Utc>) -> String {
    generated_at.format("%Y-%m-%d %H:%M:%S %Z").to_string()
}

pub fn report_file_name(generated_at: DateTime<Utc>) -> String {
    format!(
        "travel-agent-report-{}.md",
        generated_at.format("%Y%m%d-%H%M%S")
    )
}

fn table_row(deal: &Deal) -> String {
    format!(
        "| {} | {} | {} | {} | {} | {} | {} | {} |",
        deal.origin,
        deal.destination,
        deal.depart,
        deal.return_date,
        deal.resort,
        format_stars(deal.stars),
        deal.per_person_price,
        deal.total_price
    )
}

/// Renders the markdown report. Output depends only on the arguments.
pub fn render_markdown(
    preferences: &TravelPreferences,
    deals: &[Deal],
    generated_at: DateTime<Utc>,
) -> String {
    let mut lines = vec![
        REPORT_TITLE.to_string(),
        String::new(),
        format!("**Generated:** {}", format_timestamp(generated_at)),
        String::new(),
        "**Filters:**".to_string(),
        format!("- Origin(s): {}", preferences.origins.join(", ")),
        format!("- Destinations: {}", preferences.destinations.join(", ")),
        format!(
            "- Dates: {} → {}",
            preferences.depart_date, preferences.return_date
        ),
        format!("- Party size: {}", preferences.party_size),
        format!(
            "- Max price (CAD per person): {}",
            preferences.price_cap_per_person
        ),
        format!("- Min resort stars: {}", preferences.min_resort_stars),
        String::new(),
    ];

    if deals.is_empty() {
        lines.push(NO_DEALS_NOTICE.to_string());
        return lines.join("\n");
    }

    lines.push(RESULTS_HEADING.to_string());
    lines.push(String::new());
    lines.push(TABLE_HEADER.to_string());
    lines.push(TABLE_ALIGNMENT.to_string());
    lines.extend(deals.iter().map(table_row));

    lines.join("\n")
}

/// Console lines printed after a successful run.
pub fn summary_lines(outcome: &RunOutcome) -> Vec<String> {
    let mut lines = vec![format!(
        "Found {} deals that match filters.",
        outcome.matches.len()
    )];

    if let Some(best) = outcome.cheapest() {
        lines.push(format!(
            "Cheapest mock deal: {} at ${} CAD/person ({}★ {}).",
            best.destination,
            best.per_person_price,
            format_stars(best.stars),
            best.resort
        ));
    }

    lines.push(format!("Report saved to: {}", outcome.output_path));
    lines
}

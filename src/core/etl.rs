use crate::core::{Pipeline, RunOutcome};
use crate::utils::error::Result;

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunOutcome> {
        tracing::info!("Starting deal search...");

        // Extract
        let candidates = self.pipeline.extract().await?;
        tracing::info!("Generated {} candidate deals", candidates.len());

        // Transform
        let matches = self.pipeline.transform(candidates).await?;
        tracing::info!("{} deals match filters", matches.len());

        // Load
        let outcome = self.pipeline.load(matches).await?;
        tracing::info!("Report saved to: {}", outcome.output_path);

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RunConfig;
    use crate::core::generator::tests::{preferences, ScriptedRandom};
    use crate::core::generator::MockDealSource;
    use crate::core::pipeline::tests::{FixedClock, MockStorage};
    use crate::core::pipeline::DealPipeline;
    use chrono::{TimeZone, Utc};

    #[tokio::test]
    async fn test_run_end_to_end() {
        let storage = MockStorage::new();
        let config = RunConfig::new(preferences(&["CUN"]), "memory");
        let pipeline = DealPipeline::new(storage.clone(), config)
            .with_source(MockDealSource::new(ScriptedRandom::new(&[1, 500, 1])))
            .with_clock(FixedClock(Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()));

        let outcome = ReportEngine::new(pipeline).run().await.unwrap();

        assert_eq!(outcome.matches.len(), 1);
        let best = outcome.cheapest().unwrap();
        assert_eq!(best.per_person_price, 500);
        assert_eq!(best.total_price, 1000);

        let report = storage
            .get_file("travel-agent-report-20250301-120000.md")
            .await
            .unwrap();
        let report = String::from_utf8(report).unwrap();
        assert!(report.contains(
            "| YYZ | CUN | 2025-01-10 | 2025-01-17 | Resort CUN-1 | 4.5 | 500 | 1000 |"
        ));
    }
}

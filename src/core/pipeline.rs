use crate::core::filter::DealFilter;
use crate::core::generator::MockDealSource;
use crate::core::report::{render_markdown, report_file_name};
use crate::core::{
    Clock, ConfigProvider, Deal, DealSource, Pipeline, RunOutcome, Storage, SystemClock,
};
use crate::utils::error::Result;

pub struct DealPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    source: Box<dyn DealSource>,
    clock: Box<dyn Clock>,
}

impl<S: Storage, C: ConfigProvider> DealPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            source: Box::new(MockDealSource::from_entropy()),
            clock: Box::new(SystemClock),
        }
    }

    pub fn with_source(mut self, source: impl DealSource + 'static) -> Self {
        self.source = Box::new(source);
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for DealPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Deal>> {
        let preferences = self.config.preferences();
        tracing::debug!(
            "Searching deals for destinations: {}",
            preferences.destinations.join(", ")
        );
        self.source.search(preferences).await
    }

    async fn transform(&self, deals: Vec<Deal>) -> Result<Vec<Deal>> {
        let filter = DealFilter::from_preferences(self.config.preferences());
        tracing::debug!(
            "Filtering with price cap {} and min stars {}",
            filter.price_cap_per_person,
            filter.min_resort_stars
        );
        Ok(filter.apply(deals))
    }

    async fn load(&self, matches: Vec<Deal>) -> Result<RunOutcome> {
        // 報告時間與檔名共用同一個時間點
        let generated_at = self.clock.now();
        let markdown = render_markdown(self.config.preferences(), &matches, generated_at);
        let file_name = report_file_name(generated_at);

        tracing::debug!("Writing report ({} bytes) as {}", markdown.len(), file_name);
        let output_path = self
            .storage
            .write_file(&file_name, markdown.as_bytes())
            .await?;

        Ok(RunOutcome {
            matches,
            output_path,
            generated_at,
        })
    }
}

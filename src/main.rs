use anyhow::Context;
use clap::Parser;
use std::io::Write;
use travel_deals::core::report::summary_lines;
use travel_deals::utils::{logger, validation::Validate};
use travel_deals::{
    CliConfig, DealError, DealPipeline, LocalStorage, MockDealSource, ReportEngine, RunConfig,
    TravelPreferences,
};

fn fail(e: &DealError) -> ! {
    tracing::error!(
        "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting travel-deals");
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = cli.validate() {
        fail(&e);
    }

    // 載入旅遊偏好設定
    tracing::info!("📁 Loading preferences from: {}", cli.config);
    let preferences = TravelPreferences::from_file(&cli.config).unwrap_or_else(|e| fail(&e));

    let source = match cli.seed {
        Some(seed) => {
            tracing::info!("🎲 Using seed {}", seed);
            MockDealSource::seeded(seed)
        }
        None => MockDealSource::from_entropy(),
    };

    let storage = LocalStorage::new(cli.output_path.clone());
    let config = RunConfig::new(preferences, cli.output_path.clone());
    if let Err(e) = config.validate() {
        fail(&e);
    }

    let pipeline = DealPipeline::new(storage, config).with_source(source);
    let engine = ReportEngine::new(pipeline);

    let outcome = engine.run().await.unwrap_or_else(|e| fail(&e));

    let mut stdout = std::io::stdout().lock();
    for line in summary_lines(&outcome) {
        writeln!(stdout, "{}", line).context("writing console summary")?;
    }

    Ok(())
}

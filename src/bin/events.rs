use anyhow::Context;
use std::path::Path;

use matchday_feeds::config::Config;
use matchday_feeds::logging;
use matchday_feeds::pipeline;
use matchday_feeds::services::schedule::{EventExtractor, ScheduleClient};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env();
    logging::init(config.log_format);

    if let Err(e) = run(&config).await {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(config: &Config) -> anyhow::Result<()> {
    tracing::info!("Starting matchday-events v{}", env!("CARGO_PKG_VERSION"));

    let client = ScheduleClient::from_config(config).context("Failed to set up schedule client")?;
    let extractor = EventExtractor::from_config(config);
    let output = Path::new(&config.events_output);

    let mut stdout = std::io::stdout().lock();
    pipeline::events::run(&client, &extractor, output, &mut stdout)
        .await
        .context("Event pipeline stopped")?;

    Ok(())
}

use anyhow::Context;
use std::path::Path;

use matchday_feeds::config::Config;
use matchday_feeds::logging;
use matchday_feeds::pipeline;
use matchday_feeds::services::catalog::CatalogBuilder;

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
    tracing::info!("Starting matchday-catalog v{}", env!("CARGO_PKG_VERSION"));

    let builder = CatalogBuilder::from_config(config);
    let output = Path::new(&config.catalog_output);

    let mut stdout = std::io::stdout().lock();
    pipeline::catalog::run(&builder, output, &mut stdout)
        .await
        .context("Catalog pipeline stopped")?;

    Ok(())
}

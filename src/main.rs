use anyhow::Result;
use smartmirror::{SmartMirrorConfig, web};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = SmartMirrorConfig::load()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("SmartMirror v{} starting", smartmirror::VERSION);
    web::run(config).await
}

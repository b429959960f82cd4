use anyhow::{Context, Result};
use skycast::{SkycastConfig, WeatherApiClient, telemetry, web};

#[tokio::main]
async fn main() -> Result<()> {
    let config = SkycastConfig::load().context("Failed to load configuration")?;
    telemetry::init(&config.logging)?;

    tracing::info!(
        version = skycast::VERSION,
        default_city = %config.dashboard.default_city,
        units = %config.dashboard.units,
        "Starting SkyCast"
    );

    let client = WeatherApiClient::new(&config.provider).map_err(|e| {
        tracing::error!("{}", e.user_message());
        anyhow::anyhow!(e)
    })?;

    web::run(&config, client).await?;
    Ok(())
}

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use wedding_directory::config::Settings;
use wedding_directory::web::start_server;

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::new()?;
    info!(address = %settings.bind_address(), "Starting wedding vendor directory");

    start_server(settings).await?;

    Ok(())
}

use anyhow::Result;
use nr_core::NarrationConfig;
use nr_server::{app_with_state, state::AppState};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("nr_server=info".parse()?))
        .init();

    let config_path = std::env::var_os("NARRATION_CONFIG").map(PathBuf::from);
    let config = NarrationConfig::load_or_default(config_path.as_deref())?;

    tokio::fs::create_dir_all(&config.server.output_dir).await?;
    if !config.server.template_path.exists() {
        let template = config.server.template_path.display();
        tracing::warn!(template = %template, "template not found, uploads will fail");
    }

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, app_with_state(AppState::new(config))).await?;
    Ok(())
}

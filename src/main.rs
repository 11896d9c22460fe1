use anyhow::Result;
use fitness_planner::api::{create_routes, AppState};
use fitness_planner::config::AppConfig;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    config.install_error_policy();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .init();

    let app = create_routes(AppState::default());

    let address = config.server_address();
    let listener = TcpListener::bind(&address).await?;
    info!("Fitness planner starting on http://{} ({})", address, config.environment);
    info!("Health check available at http://{}/health", address);

    axum::serve(listener, app).await?;

    Ok(())
}

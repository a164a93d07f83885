use anyhow::Result;
use axum::serve;
use goal_manager_server::backend::{create_router, initialize_backend};
use goal_manager_server::config::ServerConfig;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::load()?;

    // RUST_LOG wins over the configured level; `log` records are bridged in
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!(?config, "Starting goal manager server");

    let app_state = initialize_backend(&config)?;
    let router = create_router(app_state, &config.allowed_origin)?;

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!("🌐 Goal API listening at http://{}", addr);

    serve(listener, router).await?;
    Ok(())
}

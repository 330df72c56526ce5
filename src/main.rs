use tokio::net::TcpListener;
use tracing::info;
use yt_summary_web::{
    config::Config,
    api::routes::create_router,
    logging,
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::load()?;
    logging::init();

    let server_addr = config.server_addr;
    info!(
        upstream = %config.upstream_url,
        summarize_path = %config.summarize_path,
        static_dir = %config.static_dir.display(),
        "Starting server on {}", server_addr
    );

    let app = create_router(AppState::new(config));

    let listener = TcpListener::bind(server_addr).await?;
    info!("Server running on http://{}", server_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for ctrl-c: {}", e);
        return;
    }
    info!("Received shutdown signal");
}

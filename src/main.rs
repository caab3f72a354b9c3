use std::sync::Arc;
use std::time::Duration;

use movie_recommender_api::{
    api::{create_router, AppState},
    config::Config,
    db::DetailCache,
    models::MediaUrls,
    services::providers::{MovieProvider, TmdbProvider},
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("movie_recommender_api=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    // A malformed cache file is fatal here rather than silently discarded.
    let cache = DetailCache::load(&config.cache_file).await?;
    tracing::info!(
        path = %config.cache_file,
        entries = cache.len().await,
        "Detail cache loaded"
    );

    let provider = TmdbProvider::new(
        config.tmdb_api_key.clone(),
        config.tmdb_api_url.clone(),
        config.tmdb_timeout_secs.map(Duration::from_secs),
    )?;
    tracing::info!(provider = provider.name(), api_url = %config.tmdb_api_url, "Movie provider ready");

    let urls = MediaUrls::new(&config.tmdb_image_base_url, &config.tmdb_site_url);
    let state = AppState::new(Arc::new(provider), cache, urls);
    let app = create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

//! Ramble Back binary entrypoint wiring configuration, the profile store, REST and SSE layers.

use std::{env, net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(feature = "file-store")]
use ramble_back::dao::profile_store::file::JsonFileProfileStore;
use ramble_back::{
    config::AppConfig,
    dao::profile_store::{ProfileStore, memory::MemoryProfileStore},
    routes,
    state::{AppState, SharedState},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AppConfig::load();
    let profiles = build_profile_store(&config);
    if let Err(err) = profiles.health_check().await {
        warn!(error = %err, "profile store is not readable; sign-in will fail until it is");
    }

    let app_state = AppState::new(config, profiles);
    // Build the HTTP router once the shared state is ready.
    let app = build_router(app_state);

    let port = env::var("PORT")
        .or_else(|_| env::var("SERVER_PORT"))
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(%addr, "starting server");

    let listener = TcpListener::bind(addr).await.context("binding server")?;
    let service = app.into_make_service();
    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving axum")?;

    Ok(())
}

/// Pick the profile store named by the configuration.
fn build_profile_store(config: &AppConfig) -> Arc<dyn ProfileStore> {
    match &config.profile_store_path {
        #[cfg(feature = "file-store")]
        Some(path) => {
            info!(path = %path.display(), "keeping the profile in a JSON file");
            Arc::new(JsonFileProfileStore::new(path))
        }
        #[cfg(not(feature = "file-store"))]
        Some(path) => {
            warn!(
                path = %path.display(),
                "file-store feature disabled; keeping the profile in memory"
            );
            Arc::new(MemoryProfileStore::new())
        }
        None => {
            info!("keeping the profile in memory");
            Arc::new(MemoryProfileStore::new())
        }
    }
}

/// Build the top-level router and attach cross-cutting middleware layers.
fn build_router(state: SharedState) -> Router<()> {
    routes::router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Configure tracing subscribers so logs include spans by default.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,tower_http=debug".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Wait for Ctrl+C or SIGTERM and shut the server down gracefully.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {},
                    _ = term.recv() => {},
                }
            }
            Err(err) => {
                warn!(error = %err, "cannot listen for SIGTERM; waiting for Ctrl+C only");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }

    info!("shutdown requested");
}

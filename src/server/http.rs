//! Router assembly and the HTTP listener.

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::gamers::{self, docs};
use crate::store::{JsonFileStore, RecordStore};

use super::config::ServerConfig;
use super::ServerError;

/// Path prefix of the gamer resource.
pub const GAMERS_PATH: &str = "/gamers";

/// Build the full application router over `store`.
///
/// Mounts the gamer resource under `/gamers` and the API description under
/// `/api-docs`, with access logging and (if enabled) permissive CORS.
pub fn app<S: RecordStore + 'static>(store: Arc<S>, config: &ServerConfig) -> Router {
    let mut router = Router::new()
        .nest(GAMERS_PATH, gamers::router(store))
        .merge(docs::router(docs::openapi_document(&config.public_url())));

    router = router.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    );

    if config.cors {
        router = router.layer(CorsLayer::permissive());
    }

    router
}

/// Open the record store and serve until Ctrl+C or SIGTERM.
pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    let store = Arc::new(JsonFileStore::open(&config.db_path)?);
    let router = app(store, &config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(
        addr = %config.addr,
        db = %config.db_path.display(),
        "The server is running on port {}",
        config.addr.port()
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}

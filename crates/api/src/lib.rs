//! Minimal HTTP service returning a static JSON greeting.
//!
//! Exposes a single `GET /` route, with structured logging (tracing)
//! for every request.

pub mod config;
pub mod error;
pub mod routes;
pub mod telemetry;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

use config::Config;
use error::ServerError;

/// Creates the Axum application router.
///
/// Unmatched paths and methods fall through to axum's default
/// `404 Not Found` and `405 Method Not Allowed` responses.
pub fn create_app() -> Router {
    Router::new()
        .route("/", get(routes::root::get))
        .layer(TraceLayer::new_for_http())
}

/// Binds the configured address and serves the application until a
/// shutdown signal arrives.
pub async fn serve(config: &Config) -> Result<(), ServerError> {
    let addr = config.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;
    tracing::info!(%addr, "starting API server");

    axum::serve(listener, create_app())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("server shut down gracefully");
    Ok(())
}

/// Waits for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received SIGINT, starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("received SIGTERM, starting graceful shutdown");
        }
    }
}

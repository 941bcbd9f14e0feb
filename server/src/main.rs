//! Library server: loads settings, opens the store, ensures the `books` table, and serves the API.
//!
//! Run from repo root: `cargo run -p library-server`

use library_api::{app, connect, ensure_books_table, telemetry, AppState, Settings};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Before telemetry, so RUST_LOG from .env is honoured.
    dotenvy::dotenv().ok();
    telemetry::init();

    let settings = Settings::from_env()?;
    let pool = connect(&settings.database_url, settings.max_connections).await?;
    ensure_books_table(&pool).await?;

    let state = AppState::new(pool.clone());
    let router = app(state, &settings);

    let listener = TcpListener::bind(settings.bind_addr()).await?;
    tracing::info!("library server listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("store closed, bye");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
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
    tracing::info!("shutdown signal received");
}

//! player-stats-server
//!
//! Serves the `/api/players` resource over HTTP.

use std::sync::Arc;

use player_stats_db::ConnectionPool;
use player_stats_lib::{PlayerService, ServerSettings, SqliteGateway};
use player_stats_server::{AppState, ServerError, build_router};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run().await {
        log::error!("{e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let settings = ServerSettings::load()?;

    if let Some(parent) = settings.database_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    // Refuse to serve at all if the store is unreachable.
    let pool = Arc::new(ConnectionPool::open(settings.pool_config()).await?);
    log::info!(
        "Connected to database at {} (max {} connections)",
        settings.database_path.display(),
        settings.max_connections
    );

    let state = AppState::new(PlayerService::new(SqliteGateway::new(pool.clone())));
    let app = build_router(state.clone());

    let addr = settings.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;
    let port = listener.local_addr()?.port();
    log::info!("Server running on http://localhost:{port}");
    log::info!("API available at http://localhost:{port}/api/players");
    log::info!("Health check at http://localhost:{port}/api/health");

    let drain = settings.shutdown_drain;
    let shutdown_state = state.clone();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            wait_for_shutdown_signal().await;
            log::info!("Shutdown requested, draining for {}ms", drain.as_millis());
            shutdown_state.stop_accepting();
            tokio::time::sleep(drain).await;
        })
        .await?;

    pool.close();
    log::info!("Database pool closed, exiting");
    Ok(())
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        match (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = sigint.recv() => {}
                }
                return;
            }
            (Err(e), _) | (_, Err(e)) => {
                log::warn!("Could not register signal handlers ({e}); falling back to Ctrl-C");
            }
        }
    }
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}

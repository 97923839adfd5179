use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use tokio::net::TcpListener;

use crate::{AppState, Config, router};

/// Connects to the store, applies migrations when configured to, and serves
/// until Ctrl-C or SIGTERM.
pub async fn start(config: Config) -> anyhow::Result<()> {
    let conn = bakery_service::connect(&config.database_url)
        .await
        .context("database connection failed")?;

    if config.run_migrations {
        Migrator::up(&conn, None)
            .await
            .context("applying migrations failed")?;
    }

    let app = router(AppState::new(conn));

    let server_url = config.server_url();
    let listener = TcpListener::bind(&server_url)
        .await
        .with_context(|| format!("cannot bind {server_url}"))?;
    tracing::info!(addr = %server_url, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "cannot listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutting down");
}

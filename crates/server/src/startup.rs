use std::net::SocketAddr;

use axum::Router;
use configs::{AppConfig, DatabaseConfig};
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// `config.toml` (or `CONFIG_PATH`) when readable, environment variables otherwise.
fn load_config() -> anyhow::Result<AppConfig> {
    match AppConfig::load_and_validate() {
        Ok(cfg) => Ok(cfg),
        Err(e) => {
            warn!(error = %e, "config file unavailable, using environment");
            AppConfig::from_env()
        }
    }
}

/// Create missing tables and seed demo data, as configured.
pub async fn prepare_database(db: &DatabaseConnection, cfg: &DatabaseConfig) -> anyhow::Result<()> {
    if cfg.run_migrations {
        migration::Migrator::up(db, None).await?;
        info!("database schema up to date");
    }
    if cfg.seed_demo_data {
        let seeded = service::seed::seed_demo_data(db).await?;
        info!(seeded, "demo data check finished");
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received, draining connections");
}

/// Public entry: build the app and run the HTTP server until Ctrl+C.
pub async fn run() -> anyhow::Result<()> {
    let cfg = load_config()?;

    let db = models::db::connect_with_config(&cfg.database).await?;
    prepare_database(&db, &cfg.database).await?;

    let app: Router = routes::build_router(ServerState { db }, build_cors());

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "polyclinic server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use payroll::config::Config;
use payroll::db::SqliteStorage;
use payroll::router::{PayrollState, payroll_router};
use payroll::service::preload::preload;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::load()?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cfg.basic.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.basic.database_url,
        public_url = %cfg.basic.public_url,
        loglevel = %cfg.basic.loglevel,
        preload = cfg.basic.preload,
        security = cfg.security.enabled,
        user = %cfg.security.username,
    );

    let storage = SqliteStorage::connect(&cfg.basic.database_url).await?;
    storage.init_schema().await?;

    if cfg.basic.preload {
        preload(&storage).await?;
    }

    let state = PayrollState::new(storage, &cfg);
    let app = payroll_router(state);

    let listener = TcpListener::bind(cfg.basic.listen_addr.as_str()).await?;
    info!("HTTP server listening on {}", cfg.basic.listen_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
    }
}

use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use trivia::config::{Config, ConfigError};
use trivia::{api, init_db, seed_demo_data, Repository};

#[derive(Debug, Error)]
enum StartupError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("store: {0}")]
    Store(#[from] sqlx::Error),
    #[error("listener on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
    #[error("server: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!("trivia api stopped: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = Config::from_env()?;
    let pool = init_db(&config.database_path).await?;

    if config.seed_demo_data && seed_demo_data(&pool).await? {
        tracing::info!("demo data loaded into empty store");
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let repo = Arc::new(Repository::new(pool));
    let app = api::create_router(api::AppState::new(repo, config));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;
    tracing::info!("trivia api listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("ctrl-c handler unavailable: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

use anyhow::Result;
use newsdesk_core::application::{
    ports::time::Clock,
    services::{ApplicationServices, Repositories, ServiceSettings},
};
use newsdesk_core::config::AppConfig;
use newsdesk_core::infrastructure::{
    database,
    repositories::{
        PostgresArticleReadRepository, PostgresArticleTopicRepository,
        PostgresArticleWriteRepository, PostgresAuthorRepository, PostgresTopicReadRepository,
        PostgresTopicWriteRepository,
    },
    time::SystemClock,
};
use newsdesk_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;

    let repos = Repositories {
        article_write: Arc::new(PostgresArticleWriteRepository::new(pool.clone())),
        article_read: Arc::new(PostgresArticleReadRepository::new(pool.clone())),
        authors: Arc::new(PostgresAuthorRepository::new(pool.clone())),
        topic_write: Arc::new(PostgresTopicWriteRepository::new(pool.clone())),
        topic_read: Arc::new(PostgresTopicReadRepository::new(pool.clone())),
        article_topics: Arc::new(PostgresArticleTopicRepository::new(pool)),
    };
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let settings = ServiceSettings {
        request_timeout: config.request_timeout(),
        enrichment_max_in_flight: config.enrichment_max_in_flight(),
    };

    let services = Arc::new(ApplicationServices::new(repos, clock, settings));
    let state = HttpState { services };

    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(
        timeout_secs = config.request_timeout().as_secs(),
        max_in_flight = config.enrichment_max_in_flight(),
        "listening on {address}"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}

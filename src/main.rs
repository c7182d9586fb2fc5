use anyhow::Result;
use axum::{ServiceExt, body::Body};
use openalt_catalog::application::{
    ports::{ClockPort, EventPublisherPort, SlugGeneratorPort},
    services::ApplicationServices,
};
use openalt_catalog::config::AppConfig;
use openalt_catalog::domain::{catalog::RecordReadRepository, tool::ToolRepository};
use openalt_catalog::infrastructure::{
    database,
    events::{HttpEventPublisher, LogEventPublisher},
    repositories::{PostgresRecordRepository, PostgresToolRepository},
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use openalt_catalog::presentation::http::{routes::build_router, state::HttpState};
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
    let settings = config.catalog();

    let pool = database::init_pool(config.database_url(), settings.store_deadline).await?;
    database::run_migrations(&pool).await?;

    let record_repo: Arc<dyn RecordReadRepository> =
        Arc::new(PostgresRecordRepository::new(pool.clone()));
    let tool_repo: Arc<dyn ToolRepository> = Arc::new(PostgresToolRepository::new(pool));

    let events: Arc<EventPublisherPort> = match config.event_sink() {
        Some(sink) => {
            tracing::info!(url = %sink.url, "publishing tool events over HTTP");
            Arc::new(HttpEventPublisher::new(
                sink.url.clone(),
                sink.key.clone(),
                sink.timeout,
            )?)
        }
        None => {
            tracing::info!("EVENT_URL not set; tool events are only logged");
            Arc::new(LogEventPublisher)
        }
    };
    let clock: Arc<ClockPort> = Arc::new(SystemClock);
    let slugger: Arc<SlugGeneratorPort> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        record_repo,
        tool_repo,
        events,
        clock,
        slugger,
        settings,
    ));

    let state = HttpState { services };
    let app = build_router(state, config.allowed_origins());
    let service = app.into_service::<Body>().into_make_service();

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, service)
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
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}

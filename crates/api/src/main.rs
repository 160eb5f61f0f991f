use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kanjigo_api::config::ServerConfig;
use kanjigo_api::router::build_app_router;
use kanjigo_api::state::AppState;
use kanjigo_core::details::DetailsService;
use kanjigo_core::lookup::LookupService;
use kanjigo_db::store::PgKanjiStore;
use kanjigo_kanjialive::KanjiAliveClient;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kanjigo_api=debug,kanjigo_core=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    config.validate().expect("Invalid server configuration");
    tracing::info!(
        host = %config.host,
        port = %config.port,
        provider = %config.kanji_alive.base_url,
        provider_timeout_secs = config.kanji_alive.timeout.as_secs(),
        "Loaded server configuration"
    );
    if !config.kanji_alive.has_api_key() {
        tracing::warn!("KANJI_ALIVE_API_KEY is not set; provider lookups will fail");
    }

    // --- Database ---
    let pool = kanjigo_db::create_pool(&config.database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    kanjigo_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    kanjigo_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Services ---
    let store = Arc::new(PgKanjiStore::new(pool.clone()));
    let provider = Arc::new(
        KanjiAliveClient::new(config.kanji_alive.clone())
            .expect("Failed to build Kanji Alive HTTP client"),
    );
    let lookup = LookupService::new(store, provider.clone());
    let details = DetailsService::new(provider);

    // --- App state ---
    let state = AppState { lookup, details };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, closing database pool");
    pool.close().await;
    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}

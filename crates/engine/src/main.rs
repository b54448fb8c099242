//! Engrenages Engine - Main entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod app;
mod infrastructure;
mod stores;
mod use_cases;

use app::App;
use infrastructure::{
    clock::SystemClock,
    default_config::{FileConfigSource, HttpConfigSource},
    notify::TracingNotifier,
    ports::{ClockPort, DefaultConfigSource},
    settings::SqliteSettingsStore,
};
use stores::registry::ConfigRegistry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "engrenages_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Engrenages Engine");

    // Load configuration
    let settings_db = std::env::var("SETTINGS_DB").unwrap_or_else(|_| "settings.db".into());
    let server_host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let server_port: u16 = std::env::var("SERVER_PORT")
        .or_else(|_| std::env::var("PORT"))
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .unwrap_or(3000);

    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock);
    let store = Arc::new(SqliteSettingsStore::new(&settings_db, clock).await?);

    // The bundled default document is either served by the package host or
    // shipped on disk next to the engine.
    let source: Arc<dyn DefaultConfigSource> = match std::env::var("DEFAULT_CONFIG_URL") {
        Ok(url) => {
            tracing::info!(url = %url, "Fetching the default configuration over HTTP");
            Arc::new(HttpConfigSource::new(&url))
        }
        Err(_) => {
            let path = std::env::var("DEFAULT_CONFIG_PATH")
                .unwrap_or_else(|_| "config/default.toml".into());
            Arc::new(FileConfigSource::new(path))
        }
    };

    let registry = Arc::new(ConfigRegistry::new());
    let app = Arc::new(App::new(
        store,
        source,
        Arc::new(TracingNotifier),
        registry,
    ));

    // Establish the active configuration before serving
    app.config.init().await;

    let router = api::http::routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr: SocketAddr = format!("{server_host}:{server_port}").parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

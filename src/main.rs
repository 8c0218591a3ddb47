// src/main.rs

use std::sync::Arc;
use std::time::Duration;

use cuestionario::config::Config;
use cuestionario::routes;
use cuestionario::state::AppState;
use cuestionario::store::PgStore;
use dotenvy::dotenv;
use sqlx::{Connection, PgConnection};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenv().ok();

    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    // Migrations run over a one-off connection; request handlers open their own.
    let mut retry_count = 0;
    let mut conn = loop {
        match PgConnection::connect_with(&config.connect_options()).await {
            Ok(conn) => break conn,
            Err(e) => {
                retry_count += 1;
                if retry_count > 5 {
                    panic!("Failed to connect to database after 5 retries: {}", e);
                }
                tracing::warn!("Database not ready, retrying in 2s... (Attempt {})", retry_count);
                tokio::time::sleep(Duration::from_secs(2)).await;
            }
        }
    };

    tracing::info!("Running migrations...");
    sqlx::migrate!("./migrations")
        .run(&mut conn)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Migrations applied successfully.");

    if let Err(e) = conn.close().await {
        tracing::warn!("Failed to close migration connection: {:?}", e);
    }

    if config.admin_key_hash.is_none() {
        tracing::warn!("ADMIN_KEY_HASH not set; /admin routes will reject every request");
    }

    let state = AppState {
        store: Arc::new(PgStore::new(config.connect_options())),
        config: config.clone(),
    };

    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind listening address");
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await.expect("Server error");
}

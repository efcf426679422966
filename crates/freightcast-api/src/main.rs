use std::sync::Arc;

use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use freightcast_api::config::ApiConfig;
use freightcast_api::router::create_router;
use freightcast_api::state::AppState;
use freightcast_model::engine_from_config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "freightcast_api=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env().context("Failed to load configuration")?;

    tracing::info!(
        port = config.port,
        records = %config.engine.records_path.value.display(),
        origin = %config.engine.default_origin.value,
        "Starting Freightcast API server"
    );

    let engine = engine_from_config(&config.engine).context(
        "Failed to initialise the prediction engine. Check FREIGHTCAST_CITIES_PATH and \
         FREIGHTCAST_HISTORY_PATH",
    )?;

    let state = Arc::new(AppState::new(engine));

    let cors_origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin: {}", config.cors_origin))?;
    let cors = CorsLayer::new()
        .allow_origin(cors_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let app = create_router(state).layer(TraceLayer::new_for_http()).layer(cors);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("CORS enabled for {}", config.cors_origin);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

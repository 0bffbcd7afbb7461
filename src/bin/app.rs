use adapter::database::connect_database_with;
use anyhow::{Context, Result};
use api::route::build_app_router;
use axum::http::{header, HeaderValue};
use registry::AppRegistry;
use shared::config::AppConfig;
use tokio::net::TcpListener;
use tower_http::{
    compression::CompressionLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();
    bootstrap().await
}

fn init_logger() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn bootstrap() -> Result<()> {
    let app_config = AppConfig::load()?;
    let pool = connect_database_with(&app_config.database)?;
    sqlx::migrate!("./migrations")
        .run(pool.inner_ref())
        .await
        .context("failed to run database migrations")?;

    let registry = AppRegistry::new(pool);
    let app = build_app_router()
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .with_state(registry);

    let addr = format!("{}:{}", app_config.server.host, app_config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .context("failed to bind listener")?;
    info!("listening on {addr}");
    axum::serve(listener, app)
        .await
        .context("unexpected error happened in server")
}

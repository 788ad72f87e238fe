use axum::middleware;
use lms_api::{
    config::ApiConfig,
    metrics,
    middleware::{cors, rate_limit, request_id, security_headers},
    state::ApiState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment variables
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env()?;

    lms_api::tracing::init_tracing(&config.environment);

    // Connect and migrate before accepting traffic
    let pool = lms_db::create_pool(&config.database_url, config.max_db_connections).await?;
    lms_db::ensure_db_and_migrate(&config.database_url, &pool).await?;

    let state = ApiState::new(&config, pool);

    let metrics_handle = metrics::init_metrics()?;

    // Create the application router
    let app = lms_api::router::router()
        .with_state(state)
        .route(
            "/metrics",
            axum::routing::get(metrics::metrics_handler).with_state(metrics_handle),
        )
        .layer(middleware::from_fn(metrics::track_metrics))
        .layer(middleware::from_fn(request_id::request_id_middleware))
        .layer(cors::create_cors_layer(config.allowed_origins.clone()));

    let app = security_headers::apply_security_headers(app, config.environment.clone());
    let app = rate_limit::apply_general_rate_limit(app);

    // Start the server
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("Server running on http://localhost:{}", config.port);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await?;

    Ok(())
}

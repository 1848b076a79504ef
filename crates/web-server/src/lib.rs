use analyzer::Dashboard;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use configuration::Settings;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer, ExposeHeaders},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
pub struct AppState {
    pub dashboard: Dashboard,
}

impl AppState {
    pub fn new(dashboard: Dashboard) -> Self {
        Self { dashboard }
    }
}

/// Builds the router with every API route and the shared middleware stack.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any())
        .expose_headers(ExposeHeaders::any());

    Router::new()
        .route("/api/health", get(handlers::health_check))
        .route("/api/indices", get(handlers::get_indices))
        .route("/api/indices/filter", post(handlers::filter_indices))
        .route("/api/statistics", get(handlers::get_statistics))
        .route("/api/quadrants", get(handlers::get_quadrants))
        .route("/api/top-performers", get(handlers::get_top_performers))
        .route("/api/index/:name", get(handlers::get_index_details))
        .route("/api/compare", post(handlers::compare_indices))
        .route("/api/categories", get(handlers::get_categories))
        .route("/api/dashboard", post(handlers::get_dashboard))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(1024 * 1024))
}

/// Loads the dataset, binds the configured address and serves until ctrl-c.
pub async fn run_server(settings: Settings) -> anyhow::Result<()> {
    let dataset = dataset::load(settings.dataset.path.as_deref())?;
    let dashboard = Dashboard::new(dataset, &settings);
    tracing::info!(
        indices = dashboard.dataset().len(),
        baseline = ?dashboard.baseline(),
        "Dashboard ready."
    );

    let app = build_router(Arc::new(AppState::new(dashboard)));

    let listener =
        tokio::net::TcpListener::bind((settings.server.host.as_str(), settings.server.port)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    tracing::info!("Web server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Web server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for the shutdown signal.");
    }
}

pub mod handlers;

pub use handlers::*;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// 构建路由
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/dashboard", get(dashboard))
        .route("/api/returns", get(list_returns))
        .route("/api/returns/summary", get(returns_summary))
        .route("/api/photos", get(photos))
        .route("/api/summary", post(upload_summary))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}

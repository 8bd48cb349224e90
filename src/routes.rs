use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::handlers::dashboard::{get_charts, get_dashboard, get_insight, get_variation};
use crate::handlers::readings::{create, delete, health, import, list, update};
use crate::insight::InsightGenerator;
use crate::services::ReadingService;

#[derive(Clone)]
pub struct AppState {
    pub service: ReadingService,
    pub insight: InsightGenerator,
    pub config: Config,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/readings", get(list).post(create))
        .route("/api/v1/readings/import", post(import))
        .route("/api/v1/readings/:id", axum::routing::put(update).delete(delete))
        .route("/api/v1/dashboard", get(get_dashboard))
        .route("/api/v1/dashboard/charts", get(get_charts))
        .route("/api/v1/dashboard/variation", get(get_variation))
        .route("/api/v1/dashboard/insight", get(get_insight))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

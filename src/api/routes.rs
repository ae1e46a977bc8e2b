use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use crate::api::handlers::{curve::{calibrate, force_curve, health, statistics}, AppState};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/curve/force", post(force_curve))
        .route("/api/curve/calibrate", post(calibrate))
        .route("/api/statistics", post(statistics))
        .with_state(state)
}

use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::{
    CalibrateRequest, ForceCurveRequest, ForceCurveResponse, HealthResponse, StatisticsRequest,
};
use crate::curve::compute_statistics;
use super::{AppState, curve_error_response};

pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub async fn force_curve(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ForceCurveRequest>,
) -> impl IntoResponse {
    let mapping = match state.calibration.force(&request.members, &request.target) {
        Ok(mapping) => mapping,
        Err(e) => return curve_error_response(e),
    };

    let old_scores: Vec<f64> = request.members.iter().map(|m| m.score).collect();
    let before = compute_statistics(&old_scores);
    let after = compute_statistics(&mapping.scores());

    Json(ForceCurveResponse {
        adjustments: mapping.into_entries(),
        before,
        after,
    })
    .into_response()
}

pub async fn calibrate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CalibrateRequest>,
) -> impl IntoResponse {
    match state.calibration.calibrate(&request.records, &request.target) {
        Ok(report) => Json(report).into_response(),
        Err(e) => curve_error_response(e),
    }
}

pub async fn statistics(Json(request): Json<StatisticsRequest>) -> impl IntoResponse {
    Json(compute_statistics(&request.values))
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::errors::CurveError;
use crate::services::calibration::CalibrationService;

pub mod curve;

pub struct AppState {
    pub calibration: CalibrationService,
}

fn curve_error_response(error: CurveError) -> Response {
    log::warn!("Rejected calibration request: {}", error);
    (StatusCode::UNPROCESSABLE_ENTITY, error.to_string()).into_response()
}

use serde::{Deserialize, Serialize};

use crate::curve::{Adjustment, ScoredMember, Statistics, TargetDistribution};
use crate::domain::EmployeeRecord;

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForceCurveRequest {
    pub members: Vec<ScoredMember>,
    pub target: TargetDistribution,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForceCurveResponse {
    pub adjustments: Vec<Adjustment>,
    pub before: Statistics,
    pub after: Statistics,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalibrateRequest {
    pub records: Vec<EmployeeRecord>,
    pub target: TargetDistribution,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct StatisticsRequest {
    pub values: Vec<f64>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

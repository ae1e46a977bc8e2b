use anyhow::Result;
use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::config::settings::AppConfig;
use crate::curve::{self, AdjustmentMapping, ScoreBounds, ScoredMember, Statistics, TargetDistribution};
use crate::domain::{AdjustedRecord, BandDistribution, EmployeeRecord, NineBoxCell};
use crate::errors::{CurveError, with_parse_context, with_read_context};

/// Outcome of one calibration run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalibrationReport {
    pub target: TargetDistribution,
    pub adjustments: AdjustmentMapping,
    pub records: Vec<AdjustedRecord>,
    pub before: Statistics,
    pub after: Statistics,
    pub bands_before: BandDistribution,
    pub bands_after: BandDistribution,
    pub calculated_at: DateTime<Utc>,
}

pub struct CalibrationService {
    config: AppConfig,
}

impl CalibrationService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn default_target(&self) -> TargetDistribution {
        self.config.curve.default_target
    }

    /// Reads a JSON list of employee records
    pub fn load_records<P: AsRef<Path>>(&self, path: P) -> Result<Vec<EmployeeRecord>> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let json = with_read_context(fs::read_to_string(path), &display)?;
        let records: Vec<EmployeeRecord> =
            with_parse_context(serde_json::from_str(&json), "population document")?;

        info!("Loaded {} records from {}", records.len(), display);
        Ok(records)
    }

    /// Rejects invalid targets, then targets outside the configured mean and
    /// standard deviation limits
    pub fn validate_target(&self, target: &TargetDistribution) -> Result<(), CurveError> {
        curve::forcing::validate_target(target)?;

        let settings = &self.config.curve;
        check_limit("mean", target.mean, &settings.mean_limits)?;
        check_limit("standard deviation", target.standard_deviation, &settings.std_dev_limits)?;
        Ok(())
    }

    /// Forces bare scored members within the configured target bounds
    pub fn force(
        &self,
        members: &[ScoredMember],
        target: &TargetDistribution,
    ) -> Result<AdjustmentMapping, CurveError> {
        self.validate_target(target)?;
        curve::force_curve_within(members, target, &self.config.curve.target_bounds)
    }

    pub fn calibrate(
        &self,
        records: &[EmployeeRecord],
        target: &TargetDistribution,
    ) -> Result<CalibrationReport, CurveError> {
        info!("=== Starting Calibration ({} records) ===", records.len());

        let members = self.convert_to_members(records);
        let adjustments = self.force(&members, target)?;
        info!("  → Forced {} scores", adjustments.len());

        let adjusted = self.adjust_records(records, &adjustments)?;
        info!("  → Adjusted competencies of {} records", adjusted.len());

        let old_scores: Vec<f64> = members.iter().map(|m| m.score).collect();
        let new_scores = adjustments.scores();
        let grid = &self.config.grid;

        let report = CalibrationReport {
            target: *target,
            before: curve::compute_statistics(&old_scores),
            after: curve::compute_statistics(&new_scores),
            bands_before: BandDistribution::from_scores(&old_scores, grid),
            bands_after: BandDistribution::from_scores(&new_scores, grid),
            adjustments,
            records: adjusted,
            calculated_at: Utc::now(),
        };

        info!(
            "  → Mean {:.2} → {:.2}, standard deviation {:.2} → {:.2}",
            report.before.mean,
            report.after.mean,
            report.before.standard_deviation,
            report.after.standard_deviation
        );
        info!("=== Calibration Complete ===");
        Ok(report)
    }

    fn convert_to_members(&self, records: &[EmployeeRecord]) -> Vec<ScoredMember> {
        records.iter().map(EmployeeRecord::to_scored_member).collect()
    }

    fn adjust_records(
        &self,
        records: &[EmployeeRecord],
        adjustments: &AdjustmentMapping,
    ) -> Result<Vec<AdjustedRecord>, CurveError> {
        // The mapping keeps input order, so records and adjustments line up
        records
            .iter()
            .zip(adjustments.iter())
            .map(|(record, adjustment)| {
                let mut adjusted =
                    curve::adjust_record(record, adjustment.new_score, &self.config.curve)?;
                adjusted.cell = record.potential_score.map(|potential| {
                    NineBoxCell::from_scores(adjusted.new_score, potential, &self.config.grid)
                });
                Ok(adjusted)
            })
            .collect()
    }
}

fn check_limit(field: &'static str, value: f64, limits: &ScoreBounds) -> Result<(), CurveError> {
    if value.is_finite() && limits.contains(value) {
        return Ok(());
    }
    Err(CurveError::TargetOutOfRange {
        field,
        value,
        min: limits.min,
        max: limits.max,
    })
}

use std::collections::HashSet;

use log::{debug, info};

use super::inverse_normal::inverse_normal_cdf;
use super::percentile::assign_percentiles;
use super::types::{Adjustment, AdjustmentMapping, ScoreBounds, ScoredMember, TargetDistribution};
use crate::errors::CurveError;

/// Forces the population onto `target`, clamping into the default `[1.0, 4.0]` bounds
pub fn force_curve(
    population: &[ScoredMember],
    target: &TargetDistribution,
) -> Result<AdjustmentMapping, CurveError> {
    force_curve_within(population, target, &ScoreBounds::default())
}

/// Rank-based forced distribution: every member's percentile is mapped through
/// the inverse normal CDF onto `target`, then clamped into `bounds`.
///
/// Rank order is preserved. The realized mean and standard deviation can drift
/// from the target when the clamp truncates a large share of the mass.
pub fn force_curve_within(
    population: &[ScoredMember],
    target: &TargetDistribution,
    bounds: &ScoreBounds,
) -> Result<AdjustmentMapping, CurveError> {
    validate_target(target)?;
    validate_bounds(bounds)?;
    validate_population(population)?;

    if population.is_empty() {
        debug!("Empty population, nothing to force");
        return Ok(AdjustmentMapping::default());
    }

    info!(
        "Forcing {} members onto N({}, {})",
        population.len(),
        target.mean,
        target.standard_deviation
    );

    let mut new_scores = vec![0.0; population.len()];
    for ranked in assign_percentiles(population) {
        let z = inverse_normal_cdf(ranked.percentile);
        new_scores[ranked.index] = bounds.clamp(transform_score(z, target));
    }

    Ok(build_mapping(population, new_scores))
}

pub(crate) fn validate_target(target: &TargetDistribution) -> Result<(), CurveError> {
    let sd = target.standard_deviation;
    if !target.mean.is_finite() || !sd.is_finite() || sd <= 0.0 {
        return Err(CurveError::InvalidTarget {
            mean: target.mean,
            standard_deviation: sd,
        });
    }
    Ok(())
}

pub(crate) fn validate_bounds(bounds: &ScoreBounds) -> Result<(), CurveError> {
    if !bounds.is_valid() {
        return Err(CurveError::InvalidBounds {
            min: bounds.min,
            max: bounds.max,
        });
    }
    Ok(())
}

fn validate_population(population: &[ScoredMember]) -> Result<(), CurveError> {
    let mut seen = HashSet::with_capacity(population.len());

    for member in population {
        if !member.score.is_finite() {
            return Err(CurveError::NonFiniteScore {
                identifier: member.identifier.clone(),
            });
        }
        if !seen.insert(member.identifier.as_str()) {
            return Err(CurveError::DuplicateIdentifier {
                identifier: member.identifier.clone(),
            });
        }
    }

    Ok(())
}

fn transform_score(z: f64, target: &TargetDistribution) -> f64 {
    target.mean + z * target.standard_deviation
}

fn build_mapping(population: &[ScoredMember], new_scores: Vec<f64>) -> AdjustmentMapping {
    let entries = population
        .iter()
        .zip(new_scores)
        .map(|(member, new_score)| Adjustment {
            identifier: member.identifier.clone(),
            new_score,
        })
        .collect();

    AdjustmentMapping::new(entries)
}

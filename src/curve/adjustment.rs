use log::warn;

use super::forcing::validate_bounds;
use crate::config::CurveSettings;
use crate::domain::{AdjustedRecord, CompetencyScore, EmployeeRecord};
use crate::errors::CurveError;

/// Applies a forced population-level score to one record.
///
/// Every competency is scaled by `new_score / previous_score` and clamped into
/// `record_bounds`. This second clamp is independent of the one applied while
/// forcing. When the previous score is within `min_denominator` of zero each
/// competency is set to the clamped new score instead.
///
/// Fails on invalid `record_bounds` and on any non-finite score.
pub fn adjust_record(
    record: &EmployeeRecord,
    new_score: f64,
    settings: &CurveSettings,
) -> Result<AdjustedRecord, CurveError> {
    validate_bounds(&settings.record_bounds)?;
    validate_scores(record, new_score)?;

    let previous_score = record.average_score();
    let ratio = calculate_ratio(previous_score, new_score, settings.min_denominator);

    if ratio.is_none() {
        warn!(
            "Previous score of '{}' is {}, setting competencies to {} directly",
            record.identifier, previous_score, new_score
        );
    }

    let competencies = record
        .competencies
        .iter()
        .map(|c| CompetencyScore {
            name: c.name.clone(),
            score: scale_score(c.score, new_score, ratio, settings),
        })
        .collect();

    Ok(AdjustedRecord {
        identifier: record.identifier.clone(),
        name: record.name.clone(),
        previous_score,
        new_score,
        ratio,
        competencies,
        potential_score: record.potential_score,
        cell: None,
    })
}

fn validate_scores(record: &EmployeeRecord, new_score: f64) -> Result<(), CurveError> {
    let competencies_finite = record.competencies.iter().all(|c| c.score.is_finite());
    let potential_finite = record.potential_score.is_none_or(f64::is_finite);

    if new_score.is_finite()
        && record.average_score().is_finite()
        && competencies_finite
        && potential_finite
    {
        return Ok(());
    }
    Err(CurveError::NonFiniteScore {
        identifier: record.identifier.clone(),
    })
}

fn calculate_ratio(previous_score: f64, new_score: f64, min_denominator: f64) -> Option<f64> {
    if previous_score.abs() < min_denominator {
        None
    } else {
        Some(new_score / previous_score)
    }
}

fn scale_score(score: f64, new_score: f64, ratio: Option<f64>, settings: &CurveSettings) -> f64 {
    let scaled = match ratio {
        Some(ratio) => score * ratio,
        None => new_score,
    };
    settings.record_bounds.clamp(scaled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::ScoreBounds;

    fn record() -> EmployeeRecord {
        EmployeeRecord::new("ana@example.com", 2.0)
            .with_competency("leadership", 2.0)
            .with_competency("delivery", 3.0)
            .with_competency("communication", 1.0)
    }

    #[test]
    fn test_scales_competencies_by_ratio() {
        let adjusted = adjust_record(&record(), 2.5, &CurveSettings::default()).unwrap();

        assert_eq!(adjusted.ratio, Some(1.25));
        let scores: Vec<f64> = adjusted.competencies.iter().map(|c| c.score).collect();
        assert_eq!(scores, vec![2.5, 3.75, 1.25]);
        assert_eq!(adjusted.previous_score, 2.0);
        assert_eq!(adjusted.new_score, 2.5);
    }

    #[test]
    fn test_clamps_each_competency() {
        let adjusted = adjust_record(&record(), 3.0, &CurveSettings::default()).unwrap();

        // ratio 1.5: 3.0, 4.5 -> 4.0, 1.5
        let scores: Vec<f64> = adjusted.competencies.iter().map(|c| c.score).collect();
        assert_eq!(scores, vec![3.0, 4.0, 1.5]);
    }

    #[test]
    fn test_record_bounds_are_configurable() {
        let settings = CurveSettings {
            record_bounds: ScoreBounds::new(0.0, 5.0),
            ..CurveSettings::default()
        };
        let adjusted = adjust_record(&record(), 3.0, &settings).unwrap();

        let scores: Vec<f64> = adjusted.competencies.iter().map(|c| c.score).collect();
        assert_eq!(scores, vec![3.0, 4.5, 1.5]);
    }

    #[test]
    fn test_zero_previous_score_is_guarded() {
        let record = EmployeeRecord::new("new.hire@example.com", 0.0)
            .with_competency("leadership", 0.0)
            .with_competency("delivery", 0.0);
        let adjusted = adjust_record(&record, 2.7, &CurveSettings::default()).unwrap();

        assert_eq!(adjusted.ratio, None);
        assert!(adjusted.competencies.iter().all(|c| c.score == 2.7));
    }

    #[test]
    fn test_previous_score_defaults_to_competency_mean() {
        let mut record = record();
        record.performance_score = None;
        let adjusted = adjust_record(&record, 3.0, &CurveSettings::default()).unwrap();

        assert_eq!(adjusted.previous_score, 2.0);
        assert_eq!(adjusted.ratio, Some(1.5));
    }

    #[test]
    fn test_inverted_record_bounds_are_rejected() {
        let settings = CurveSettings {
            record_bounds: ScoreBounds::new(4.0, 1.0),
            ..CurveSettings::default()
        };
        let result = adjust_record(&record(), 2.5, &settings);

        assert_eq!(result, Err(CurveError::InvalidBounds { min: 4.0, max: 1.0 }));
    }

    #[test]
    fn test_nan_record_bound_is_rejected() {
        let settings = CurveSettings {
            record_bounds: ScoreBounds::new(1.0, f64::NAN),
            ..CurveSettings::default()
        };
        let result = adjust_record(&record(), 2.5, &settings);

        assert!(matches!(result, Err(CurveError::InvalidBounds { .. })));
    }

    #[test]
    fn test_non_finite_competency_is_rejected() {
        let record = EmployeeRecord::new("a", 2.0).with_competency("focus", f64::NAN);
        let result = adjust_record(&record, 2.5, &CurveSettings::default());

        assert_eq!(
            result,
            Err(CurveError::NonFiniteScore {
                identifier: "a".to_string()
            })
        );
    }
}

use crate::curve::{ScoreBounds, TargetDistribution};

#[derive(Debug, Clone)]
pub struct CurveSettings {
    /// Clamp applied to the population-level forced score
    pub target_bounds: ScoreBounds,
    /// Clamp applied to every ratio-adjusted competency score
    pub record_bounds: ScoreBounds,
    /// Allowed range for a requested target mean
    pub mean_limits: ScoreBounds,
    /// Allowed range for a requested target standard deviation
    pub std_dev_limits: ScoreBounds,
    pub default_target: TargetDistribution,
    /// Prior averages closer to zero than this cannot be scaled by ratio
    pub min_denominator: f64,
}

impl Default for CurveSettings {
    fn default() -> Self {
        Self {
            target_bounds: ScoreBounds::new(1.0, 4.0),
            record_bounds: ScoreBounds::new(1.0, 4.0),
            mean_limits: ScoreBounds::new(1.0, 4.0),
            std_dev_limits: ScoreBounds::new(0.1, 2.0),
            default_target: TargetDistribution::new(2.5, 0.5),
            min_denominator: 1e-6,
        }
    }
}

/// Nine Box band thresholds on the 1-4 score scale
#[derive(Debug, Clone)]
pub struct GridSettings {
    /// Scores below this are Low
    pub low_upper: f64,
    /// Scores at or above this are High
    pub high_lower: f64,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            low_upper: 2.0,
            high_lower: 3.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub default_bind_address: &'static str,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            default_bind_address: "0.0.0.0",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub curve: CurveSettings,
    pub grid: GridSettings,
    pub server: ServerSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            curve: CurveSettings::default(),
            grid: GridSettings::default(),
            server: ServerSettings::default(),
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::config::GridSettings;

/// One axis band of the Nine Box Grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Low,
    Medium,
    High,
}

impl Band {
    pub fn from_score(score: f64, thresholds: &GridSettings) -> Self {
        if score < thresholds.low_upper {
            Band::Low
        } else if score < thresholds.high_lower {
            Band::Medium
        } else {
            Band::High
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Band::Low => "low",
            Band::Medium => "medium",
            Band::High => "high",
        }
    }
}

/// Position of an employee on the performance x potential matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NineBoxCell {
    pub performance: Band,
    pub potential: Band,
}

impl NineBoxCell {
    pub fn from_scores(performance: f64, potential: f64, thresholds: &GridSettings) -> Self {
        Self {
            performance: Band::from_score(performance, thresholds),
            potential: Band::from_score(potential, thresholds),
        }
    }
}

/// Number of scores per band
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandDistribution {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl BandDistribution {
    pub fn from_scores(scores: &[f64], thresholds: &GridSettings) -> Self {
        let mut distribution = Self::default();
        for &score in scores {
            match Band::from_score(score, thresholds) {
                Band::Low => distribution.low += 1,
                Band::Medium => distribution.medium += 1,
                Band::High => distribution.high += 1,
            }
        }
        distribution
    }

    pub fn total(&self) -> usize {
        self.low + self.medium + self.high
    }
}

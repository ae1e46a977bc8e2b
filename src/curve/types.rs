use serde::{Deserialize, Serialize};

pub type MemberId = String;
pub type ScoreValue = f64;

/// One person/score pairing taking part in a forcing run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredMember {
    pub identifier: MemberId,
    pub score: ScoreValue,
}

impl ScoredMember {
    pub fn new(identifier: impl Into<MemberId>, score: ScoreValue) -> Self {
        Self {
            identifier: identifier.into(),
            score,
        }
    }
}

/// Desired shape of the output population
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetDistribution {
    pub mean: f64,
    pub standard_deviation: f64,
}

impl TargetDistribution {
    pub fn new(mean: f64, standard_deviation: f64) -> Self {
        Self {
            mean,
            standard_deviation,
        }
    }
}

/// Closed interval a forced or adjusted score is clamped into
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBounds {
    pub min: ScoreValue,
    pub max: ScoreValue,
}

impl ScoreBounds {
    pub const fn new(min: ScoreValue, max: ScoreValue) -> Self {
        Self { min, max }
    }

    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }

    pub fn clamp(&self, value: ScoreValue) -> ScoreValue {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: ScoreValue) -> bool {
        value >= self.min && value <= self.max
    }
}

impl Default for ScoreBounds {
    fn default() -> Self {
        Self::new(1.0, 4.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Adjustment {
    pub identifier: MemberId,
    pub new_score: ScoreValue,
}

/// Forced scores, in the input order of the population
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdjustmentMapping {
    entries: Vec<Adjustment>,
}

impl AdjustmentMapping {
    pub fn new(entries: Vec<Adjustment>) -> Self {
        Self { entries }
    }

    pub fn get(&self, identifier: &str) -> Option<ScoreValue> {
        self.entries
            .iter()
            .find(|a| a.identifier == identifier)
            .map(|a| a.new_score)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Adjustment> {
        self.entries.iter()
    }

    pub fn scores(&self) -> Vec<ScoreValue> {
        self.entries.iter().map(|a| a.new_score).collect()
    }

    pub fn into_entries(self) -> Vec<Adjustment> {
        self.entries
    }
}

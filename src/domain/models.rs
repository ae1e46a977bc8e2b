use serde::{Deserialize, Serialize};

use crate::curve::ScoredMember;
use super::grid::NineBoxCell;

/// A single competency evaluation of an employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetencyScore {
    pub name: String,
    pub score: f64,
}

/// Employee as it enters a calibration run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    /// Unique key within the population (email or person+board key)
    pub identifier: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Prior average. Falls back to the competency mean when absent.
    #[serde(default)]
    pub performance_score: Option<f64>,
    #[serde(default)]
    pub competencies: Vec<CompetencyScore>,
    #[serde(default)]
    pub potential_score: Option<f64>,
}

impl EmployeeRecord {
    pub fn new(identifier: impl Into<String>, performance_score: f64) -> Self {
        Self {
            identifier: identifier.into(),
            name: None,
            performance_score: Some(performance_score),
            competencies: Vec::new(),
            potential_score: None,
        }
    }

    pub fn with_competency(mut self, name: impl Into<String>, score: f64) -> Self {
        self.competencies.push(CompetencyScore {
            name: name.into(),
            score,
        });
        self
    }

    pub fn with_potential(mut self, potential: f64) -> Self {
        self.potential_score = Some(potential);
        self
    }

    /// Stored performance score, or the competency mean, or 0 for an empty record
    pub fn average_score(&self) -> f64 {
        if let Some(score) = self.performance_score {
            return score;
        }
        if self.competencies.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.competencies.iter().map(|c| c.score).sum();
        sum / self.competencies.len() as f64
    }

    pub fn to_scored_member(&self) -> ScoredMember {
        ScoredMember::new(self.identifier.clone(), self.average_score())
    }
}

/// Employee after the forced score was applied to its competencies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustedRecord {
    pub identifier: String,
    #[serde(default)]
    pub name: Option<String>,
    pub previous_score: f64,
    pub new_score: f64,
    /// Multiplier applied to every competency; None when the prior average was ~0
    pub ratio: Option<f64>,
    pub competencies: Vec<CompetencyScore>,
    #[serde(default)]
    pub potential_score: Option<f64>,
    #[serde(default)]
    pub cell: Option<NineBoxCell>,
}

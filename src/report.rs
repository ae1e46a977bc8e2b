use colored::Colorize;
use serde::Serialize;
use std::fmt;

use crate::config::GridSettings;
use crate::curve::{Statistics, compute_statistics};
use crate::domain::{Band, BandDistribution, EmployeeRecord};

/// Current distribution of a population, as shown by `stats`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulationSummary {
    pub statistics: Statistics,
    pub bands: BandDistribution,
}

impl PopulationSummary {
    pub fn from_records(records: &[EmployeeRecord], grid: &GridSettings) -> Self {
        let scores: Vec<f64> = records.iter().map(EmployeeRecord::average_score).collect();
        Self {
            statistics: compute_statistics(&scores),
            bands: BandDistribution::from_scores(&scores, grid),
        }
    }
}

impl fmt::Display for PopulationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = &self.statistics;

        writeln!(f, "{}", "Population statistics".bold())?;
        writeln!(f, "  {:<20}{}", "members", stats.count)?;
        writeln!(f, "  {:<20}{:.2}", "mean", stats.mean)?;
        writeln!(f, "  {:<20}{:.2}", "standard deviation", stats.standard_deviation)?;
        writeln!(f, "  {:<20}{:.2}", "minimum", stats.minimum)?;
        writeln!(f, "  {:<20}{:.2}", "maximum", stats.maximum)?;
        writeln!(f, "{} ({})", "Bands".bold(), self.bands.total())?;
        writeln!(f, "  {:<20}{}", Band::Low.as_str().red(), self.bands.low)?;
        writeln!(f, "  {:<20}{}", Band::Medium.as_str().yellow(), self.bands.medium)?;
        writeln!(f, "  {:<20}{}", Band::High.as_str().green(), self.bands.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_from_records() {
        let records = vec![
            EmployeeRecord::new("a", 1.5),
            EmployeeRecord::new("b", 2.5),
            EmployeeRecord::new("c", 3.5),
        ];
        let summary = PopulationSummary::from_records(&records, &GridSettings::default());

        assert_eq!(summary.statistics.count, 3);
        assert!((summary.statistics.mean - 2.5).abs() < 1e-12);
        assert_eq!(summary.bands, BandDistribution { low: 1, medium: 1, high: 1 });
    }

    #[test]
    fn test_display_lists_every_figure() {
        colored::control::set_override(false);
        let summary = PopulationSummary::from_records(&[], &GridSettings::default());
        let text = summary.to_string();

        assert!(text.contains("members             0"));
        assert!(text.contains("mean                0.00"));
        assert!(text.contains("Bands (0)"));
        assert!(text.contains("high                0"));
    }
}

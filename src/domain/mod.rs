pub mod grid;
pub mod models;

pub use grid::{Band, BandDistribution, NineBoxCell};
pub use models::{AdjustedRecord, CompetencyScore, EmployeeRecord};

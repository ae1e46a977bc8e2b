pub mod adjustment;
pub mod forcing;
pub mod inverse_normal;
mod percentile;
pub mod statistics;
pub mod types;

pub use adjustment::adjust_record;
pub use forcing::{force_curve, force_curve_within};
pub use inverse_normal::inverse_normal_cdf;
pub use percentile::{RankedMember, assign_percentiles};
pub use statistics::{Statistics, compute_statistics};
pub use types::{Adjustment, AdjustmentMapping, ScoreBounds, ScoredMember, TargetDistribution};

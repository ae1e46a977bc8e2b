use anyhow::Context as _;
use thiserror::Error;

/// Failures raised by the curve forcing core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    #[error("invalid target distribution: mean {mean}, standard deviation {standard_deviation} (standard deviation must be finite and > 0, mean must be finite)")]
    InvalidTarget { mean: f64, standard_deviation: f64 },

    #[error("target {field} {value} is outside the allowed range [{min}, {max}]")]
    TargetOutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("member '{identifier}' has a non-finite score")]
    NonFiniteScore { identifier: String },

    #[error("member '{identifier}' appears more than once in the population")]
    DuplicateIdentifier { identifier: String },

    #[error("invalid clamp bounds [{min}, {max}]")]
    InvalidBounds { min: f64, max: f64 },
}

/// Add context to file read errors
pub fn read_context(path: &str) -> String {
    format!("Failed to read population file: {}", path)
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}

/// Wrap result with read context
pub fn with_read_context<T, E>(result: Result<T, E>, path: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(read_context(path))
}

/// Wrap result with parse context
pub fn with_parse_context<T, E>(result: Result<T, E>, data_type: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(parse_context(data_type))
}

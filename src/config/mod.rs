pub mod settings;

pub use settings::{AppConfig, CurveSettings, GridSettings, ServerSettings};

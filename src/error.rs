use thiserror::Error;

/// Errors raised at the fallible edges of the tracker: selection parsing,
/// scenario inputs and config loading. The footprint and ROI models never fail.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("unknown {category} option: {value}")]
    UnknownOption {
        category: &'static str,
        value: String,
    },
    #[error("adoption must be between 0.0 and 1.0, got {0}")]
    InvalidAdoption(f64),
    #[error("invalid model config: {0}")]
    InvalidConfig(&'static str),
    #[error("config read failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse failed: {0}")]
    Json(#[from] serde_json::Error),
}

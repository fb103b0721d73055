use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("Invalid parameter: {name} must be positive, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("Insufficient data: need at least {required} values, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("Invalid bin width: {0} (must be positive and finite)")]
    InvalidBinWidth(f64),

    #[error("Non-finite value {value} at index {index}")]
    NonFiniteValue { index: usize, value: f64 },

    #[error("Too many bins: cannot allocate {bins} bins")]
    TooManyBins { bins: f64 },

    #[error("Sample is empty")]
    EmptySample,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

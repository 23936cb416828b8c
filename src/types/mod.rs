use thiserror::Error;

pub mod constants;
pub mod search;
pub mod targets;

pub use search::{max_value_for_width, parse_hex_digest, SearchOutcome, SearchParameters};
pub use targets::{SearchMethod, TargetSequence};

/// Errors raised while assembling search parameters
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParameterError {
    #[error("Target sequence must not be empty")]
    EmptyTargetSequence,
    #[error("Target counts must be positive")]
    ZeroTarget,
    #[error("At least 2 search targets are required, got {0}")]
    TooFewTargets(u64),
    #[error("At most {max} search targets are allowed, got {value}")]
    TooManyTargets { value: u64, max: u64 },
    #[error("Number of geometric attempts must be between 2 and 31, got {0}")]
    GeometricAttemptsOutOfRange(u32),
    #[error("Input width must be between 1 and 62 bits, got {0}")]
    InputWidthOutOfRange(u32),
    #[error("Output width must be positive")]
    ZeroOutputWidth,
    #[error("Output {value} does not fit in {width} bits")]
    OutputTooWide { value: String, width: u32 },
}

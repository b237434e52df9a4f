use thiserror::Error;

/// Failures surfaced while bringing an animator up.
///
/// Per-frame work is total and never produces one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),
    #[error("input source unavailable: {0}")]
    InputUnavailable(String),
}

pub type Result<T> = std::result::Result<T, FieldError>;

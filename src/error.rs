use thiserror::Error;

/// Errors reported by the field and template operations.
///
/// Contract violations (mismatched field sizes, strict reads outside the
/// field) are not represented here: they panic.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The identifier does not name one of the known templates.
    #[error("template {0:?} is not supported")]
    UnsupportedPattern(String),
    /// Fill rate must be a probability.
    #[error("fill rate {0} must be between 0.0 and 1.0")]
    InvalidFillRate(f64),
}

pub type Result<T> = std::result::Result<T, Error>;

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// ConfigError
///
///////////////////////////////////////////////////////////////////////////////////////////////////
use thiserror::Error;

/// Configuration errors raised synchronously while building a `Rotatable`
/// or parsing a rotation direction. Never deferred into touch handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a rotation direction must be specified")]
    MissingDirection,
    #[error("rotation count and rotation distance are mutually exclusive")]
    ConflictingBounds,
    #[error("unknown rotation direction `{0}`")]
    InvalidDirection(String),
}

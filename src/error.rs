use thiserror::Error;

/// Failures raised by the Tyrian time conversions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TyrianTimeError {
    /// The caller handed in a value outside the operation's domain.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A valid input could not be classified. Points at a broken period table.
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, TyrianTimeError>;

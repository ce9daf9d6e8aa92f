/// Convenience result type used across the crate.
pub type ResampleResult<T> = Result<T, ResampleError>;

/// Top-level error taxonomy used by resampling APIs.
#[derive(thiserror::Error, Debug)]
pub enum ResampleError {
    /// Configuration names something that does not exist (e.g. an unknown kernel tag).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Invalid caller-provided data (buffer sizes, transforms, parameters).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ResampleError {
    /// Build a [`ResampleError::InvalidConfiguration`] value.
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Build a [`ResampleError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ResampleError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

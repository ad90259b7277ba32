/// Convenience result type used across the crate.
pub type MorphResult<T> = Result<T, MorphError>;

/// Top-level error taxonomy used by morphing APIs.
#[derive(thiserror::Error, Debug)]
pub enum MorphError {
    /// Invalid user-provided or morph description data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while warping, blending, or encoding frames.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MorphError {
    /// Build a [`MorphError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MorphError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`MorphError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

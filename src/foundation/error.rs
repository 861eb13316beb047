/// Convenience result type used across warptex.
pub type WarpResult<T> = Result<T, WarpError>;

/// Top-level error taxonomy used by the warp engine and its collaborators.
#[derive(thiserror::Error, Debug)]
pub enum WarpError {
    /// Invalid source metadata or settings.
    #[error("validation error: {0}")]
    Validation(String),

    /// A pixel source failed to produce a usable buffer.
    #[error("load error: {0}")]
    Load(String),

    /// Errors when serializing or deserializing settings.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WarpError {
    /// Build a [`WarpError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`WarpError::Load`] value.
    pub fn load(msg: impl Into<String>) -> Self {
        Self::Load(msg.into())
    }

    /// Build a [`WarpError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

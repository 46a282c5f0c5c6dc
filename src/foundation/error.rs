/// Convenience result type used across the crate.
pub type LayerModeResult<T> = Result<T, LayerModeError>;

/// Top-level error taxonomy used by kernel, operation and tool APIs.
#[derive(thiserror::Error, Debug)]
pub enum LayerModeError {
    /// Caller contract violations: buffer shapes, config values, thread counts.
    #[error("validation error: {0}")]
    Validation(String),

    /// A mode or operation name that resolves to no known layer mode.
    #[error("unknown layer mode: {0}")]
    UnknownMode(String),

    /// Errors while reading or writing tool parameters.
    #[error("parameter error: {0}")]
    Param(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LayerModeError {
    /// Build a [`LayerModeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LayerModeError::UnknownMode`] value.
    pub fn unknown_mode(name: impl Into<String>) -> Self {
        Self::UnknownMode(name.into())
    }

    /// Build a [`LayerModeError::Param`] value.
    pub fn param(msg: impl Into<String>) -> Self {
        Self::Param(msg.into())
    }

    /// Build a [`LayerModeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

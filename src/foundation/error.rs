/// Convenience result type used across hellobounce.
pub type PageResult<T> = Result<T, PageError>;

/// Top-level error taxonomy used by page APIs.
#[derive(thiserror::Error, Debug)]
pub enum PageError {
    /// Invalid user-provided configuration or descriptor data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while sampling animation curves.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors while rasterizing or encoding a preview frame.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PageError {
    /// Build a [`PageError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PageError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`PageError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`PageError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

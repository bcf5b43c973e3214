/// Convenience result type used across glyphfx.
pub type GlyphFxResult<T> = Result<T, GlyphFxError>;

/// Top-level error taxonomy used by the engine's edges.
///
/// Kernel evaluation itself never fails; errors only surface from
/// configuration, text shaping and render collaborators.
#[derive(thiserror::Error, Debug)]
pub enum GlyphFxError {
    /// Invalid user-provided configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Failures while shaping or laying out text.
    #[error("layout error: {0}")]
    Layout(String),

    /// Failures while writing or rasterizing render buffers.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GlyphFxError {
    /// Build a [`GlyphFxError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GlyphFxError::Layout`] value.
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`GlyphFxError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

impl From<serde_json::Error> for GlyphFxError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

/// Convenience result type used across tourguide.
pub type TourResult<T> = Result<T, TourError>;

/// Top-level error taxonomy.
///
/// Public tour and overlay operations never return these: they are produced by loaders and by
/// internal geometry helpers, and converted into safe fallbacks at the operation boundary.
#[derive(thiserror::Error, Debug)]
pub enum TourError {
    /// Invalid user-provided step or shape data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A path could not be parsed or produced a degenerate contour.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Invalid provider configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TourError {
    /// Build a [`TourError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TourError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`TourError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`TourError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for TourError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

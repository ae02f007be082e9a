//! Settings error types.

use cirrus_lighting::SunsetConfigError;

/// Errors that can occur when loading, saving, or validating sky settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// Failed to read the settings file from disk.
    #[error("failed to read settings: {0}")]
    ReadError(#[source] std::io::Error),

    /// Failed to write the settings file to disk.
    #[error("failed to write settings: {0}")]
    WriteError(#[source] std::io::Error),

    /// Failed to parse RON content.
    #[error("failed to parse settings: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    /// Failed to serialize settings to RON.
    #[error("failed to serialize settings: {0}")]
    SerializeError(#[source] ron::Error),

    /// Sunset angles would break the lighting resolver.
    #[error("invalid sunset configuration: {0}")]
    InvalidSunset(#[from] SunsetConfigError),

    /// A scalar setting is outside its documented range.
    #[error("{field} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
}

use thiserror::Error;

/// Errors that can occur while loading or storing persisted settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to serialize settings: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to write settings: {0}")]
    WriteError(#[from] std::io::Error),

    #[error("Failed to read settings file: {0}")]
    ReadError(String),

    #[error("Invalid stroke width: {0}")]
    InvalidWidth(String),

    #[error("Invalid color value: {0}")]
    InvalidColor(String),
}

/// Result type for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Errors raised when creating a drawing surface
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("Invalid surface dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

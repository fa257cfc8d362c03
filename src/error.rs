use thiserror::Error;

/// Errors surfaced by the sketch core to its callers.
///
/// Malformed sketch files are not in here: the codec recovers from those
/// locally and returns whatever it could read.
#[derive(Debug, Error)]
pub enum SketchError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid settings data: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("Rotation of {0} degrees is not a multiple of 90")]
    InvalidRotation(i32),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to load font: {0}")]
    Font(String),

    #[error("Corrupt record: {0}")]
    CorruptRecord(String),
}

/// Result type for sketch operations
pub type SketchResult<T> = Result<T, SketchError>;

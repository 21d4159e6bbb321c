use thiserror::Error;

// Main application error type

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),
    #[error("Wardrobe error: {0}")]
    Wardrobe(#[from] WardrobeError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Request validation failures, reported to the caller before any analysis
// runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("No valid images in upload")]
    EmptyUpload,
    #[error("Unsupported file extension for '{0}'")]
    UnsupportedExtension(String),
    #[error("Upload payload of {actual} bytes exceeds the {limit} byte limit")]
    PayloadTooLarge { actual: usize, limit: usize },
    #[error("At least {required} images are required, got {actual}")]
    NotEnoughImages { required: usize, actual: usize },
}

#[derive(Error, Debug)]
pub enum WardrobeError {
    #[error("Wardrobe task is no longer running")]
    ChannelClosed,
}

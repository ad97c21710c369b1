use thiserror::Error;

#[derive(Error, Debug)]
pub enum FaviconError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Image encoding error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Failed to read source image '{path}': {message}")]
    SourceError { path: String, message: String },

    #[error("SVG parsing error: {message}")]
    SvgError { message: String },

    #[error("Cannot allocate a {width}x{height} pixmap")]
    PixmapError { width: u32, height: u32 },

    #[error("XML writing error: {message}")]
    XmlError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl FaviconError {
    /// 給使用者的修復建議
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FaviconError::SourceError { .. } => {
                "Check that the source SVG exists and run the generator from the website directory"
            }
            FaviconError::SvgError { .. } => "Make sure the source file is a valid SVG document",
            FaviconError::PixmapError { .. } => {
                "Lower --density or reduce the intrinsic size of the SVG"
            }
            FaviconError::IoError(_) => {
                "Check that the output directory is writable and the disk is not full"
            }
            FaviconError::ConfigError { .. } | FaviconError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and re-run the generator"
            }
            FaviconError::SerializationError(_)
            | FaviconError::ImageError(_)
            | FaviconError::XmlError { .. } => "Re-run the generator; if it keeps failing, report the error",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FaviconError::SourceError { path, .. } => {
                format!("Could not read the source image at '{}'", path)
            }
            FaviconError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            other => format!("Favicon generation failed: {}", other),
        }
    }
}

pub type Result<T> = std::result::Result<T, FaviconError>;

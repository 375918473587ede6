use thiserror::Error;

/// Errors that can occur while loading a variant or the user settings.
///
/// Payloads are plain strings so the error can travel inside iced messages,
/// which must be `Clone`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Reading the file from disk failed
    #[error("I/O error: {0}")]
    Io(String),

    /// The file's bytes could not be decoded as an image
    #[error("Failed to decode image: {0}")]
    Decode(String),

    /// The settings file could not be read or written
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(ref msg) if msg.contains("missing")));
    }

    #[test]
    fn test_display_includes_context() {
        let err = Error::Decode("bad header".to_string());
        assert_eq!(err.to_string(), "Failed to decode image: bad header");
    }
}

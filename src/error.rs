//! Error handling for atlas building
//!
//! Per-tile problems are `DecodeError`s and never abort a batch. Everything
//! else is an `AtlasError`, which orchestrators turn into `BuildResult`
//! messages instead of returning it.

use std::fmt;
use std::path::Path;

/// Failure to turn one source file into a `DecodedImage`
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DecodeError {
    #[error("File not found: {path}")]
    NotFound { path: String },
    #[error("IO error for {path}: {error}")]
    Io { path: String, error: String },
    #[error("Truncated bitmap: needed {needed} bytes, found {found}")]
    Truncated { needed: usize, found: usize },
    #[error("Invalid bitmap signature: {found:02x?}")]
    InvalidSignature { found: [u8; 2] },
    #[error("Unsupported info header size: {size}")]
    UnsupportedHeader { size: u32 },
    #[error("Unsupported bit depth: {bits_per_pixel} (only 24-bit is supported)")]
    UnsupportedDepth { bits_per_pixel: u16 },
    #[error("Compressed bitmaps are not supported (compression {compression})")]
    Compressed { compression: u32 },
    #[error("Invalid bitmap dimensions: {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },
}

/// Atlas build error
#[derive(Debug, thiserror::Error)]
pub enum AtlasError {
    #[error("Source directory not found: {path}")]
    SourceNotFound { path: String },
    #[error("No BMP files (*.{extension}) found in {path}")]
    NoMatchingFiles { path: String, extension: String },
    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: DecodeError,
    },
    #[error("Tile {key} rejected: {reason}")]
    TileRejected { key: String, reason: String },
    #[error("Encoding failed: {0}")]
    Encode(String),
    #[error("Write failed for {path}: {error}")]
    Write { path: String, error: String },
    #[error("Manifest error for {path}: {error}")]
    Manifest { path: String, error: String },
    #[error("Atlas too large: {width}x{height} exceeds {max}x{max}")]
    AtlasTooLarge { width: u32, height: u32, max: u32 },
    #[error("Invalid config: {0}")]
    Config(String),
    #[error("IO error for {path}: {error}")]
    Io { path: String, error: String },
}

impl AtlasError {
    /// Whether this error ends the whole build
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            AtlasError::Decode { .. } | AtlasError::TileRejected { .. }
        )
    }
}

/// Result type for atlas operations
pub type AtlasResult<T> = Result<T, AtlasError>;

/// Result type for bitmap decoding
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Extension trait for attaching a file path to failures
pub trait ErrorContext<T> {
    /// Failure while persisting output
    fn write_context(self, path: &Path) -> AtlasResult<T>;
    /// Failure while reading or listing input
    fn io_context(self, path: &Path) -> AtlasResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: fmt::Display,
{
    fn write_context(self, path: &Path) -> AtlasResult<T> {
        self.map_err(|e| AtlasError::Write {
            path: path.display().to_string(),
            error: e.to_string(),
        })
    }

    fn io_context(self, path: &Path) -> AtlasResult<T> {
        self.map_err(|e| AtlasError::Io {
            path: path.display().to_string(),
            error: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AtlasError::SourceNotFound {
            path: "/tmp/roads".to_string(),
        };
        assert_eq!(err.to_string(), "Source directory not found: /tmp/roads");

        let err = AtlasError::NoMatchingFiles {
            path: "/tmp/roads".to_string(),
            extension: "bmp".to_string(),
        };
        assert!(err.to_string().contains("No BMP files"));

        let err = AtlasError::AtlasTooLarge {
            width: 32768,
            height: 1,
            max: 16384,
        };
        assert_eq!(err.to_string(), "Atlas too large: 32768x1 exceeds 16384x16384");
        assert!(err.is_fatal());
    }

    #[test]
    fn test_decode_error_is_not_fatal() {
        let err = AtlasError::Decode {
            path: "a.bmp".to_string(),
            source: DecodeError::UnsupportedDepth { bits_per_pixel: 8 },
        };
        assert!(!err.is_fatal());
        assert!(err.to_string().contains("a.bmp"));
        assert!(err.to_string().contains("24-bit"));

        let err = AtlasError::Write {
            path: "atlas.png".to_string(),
            error: "disk full".to_string(),
        };
        assert!(err.is_fatal());
    }

    #[test]
    fn test_error_context() {
        let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = result
            .write_context(Path::new("out/atlas.png"))
            .expect_err("context should keep the error");
        assert!(matches!(err, AtlasError::Write { ref path, .. } if path == "out/atlas.png"));
    }
}

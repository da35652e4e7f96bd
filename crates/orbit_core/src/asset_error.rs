//! Asset error types
//!
//! Provides error handling for model and texture loading.

use std::fmt;
use std::io;

/// Error type for asset operations
#[derive(Debug)]
pub enum AssetError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// Parse error (malformed model or material file)
    Parse(String),
    /// Image decoding error
    Image(String),
    /// Asset referenced by a model could not be located
    NotFound(String),
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Io(err) => write!(f, "Asset IO error: {}", err),
            AssetError::Parse(msg) => write!(f, "Asset parse error: {}", msg),
            AssetError::Image(msg) => write!(f, "Asset image error: {}", msg),
            AssetError::NotFound(path) => write!(f, "Asset not found: {}", path),
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::Io(err) => Some(err),
            AssetError::Parse(_) => None,
            AssetError::Image(_) => None,
            AssetError::NotFound(_) => None,
        }
    }
}

impl From<io::Error> for AssetError {
    fn from(err: io::Error) -> Self {
        AssetError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file missing");
        let asset_err = AssetError::Io(io_err);
        let msg = format!("{}", asset_err);
        assert!(msg.contains("IO error"));
        assert!(msg.contains("file missing"));
    }

    #[test]
    fn test_parse_error_display() {
        let err = AssetError::Parse("unexpected token".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("parse error"));
        assert!(msg.contains("unexpected token"));
    }

    #[test]
    fn test_image_error_display() {
        let err = AssetError::Image("unsupported format".to_string());
        assert!(format!("{}", err).contains("image error"));
    }

    #[test]
    fn test_not_found_error_display() {
        let err = AssetError::NotFound("model/diffuse.png".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("not found"));
        assert!(msg.contains("model/diffuse.png"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let asset_err: AssetError = io_err.into();
        match asset_err {
            AssetError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::PermissionDenied),
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_source() {
        use std::error::Error;

        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        assert!(AssetError::Io(io_err).source().is_some());
        assert!(AssetError::Parse("bad".to_string()).source().is_none());
        assert!(AssetError::NotFound("path".to_string()).source().is_none());
    }
}

//! Error types for iPlantGuard page behaviors

use thiserror::Error;

/// Main error type for page behavior operations
#[derive(Error, Debug)]
pub enum PageError {
    /// The IP-camera address is not `<a>.<b>.<c>.<d>:<port>`
    #[error("Formato de IP inválido. Ejemplo válido: 192.168.0.23:8080")]
    InvalidCameraAddress { input: String },

    /// The user or the browser refused camera access
    #[error("No se pudo acceder a la cámara: {0}")]
    CameraDenied(String),

    /// The browser exposes no camera API
    #[error("Tu navegador no soporta acceso a cámara web.")]
    CameraUnsupported,

    /// The captured frame could not be encoded as JPEG
    #[error("No se pudo procesar la captura: {0}")]
    EncodeFailed(String),

    /// An optional page element was not found
    #[error("Element not found: {0}")]
    MissingElement(String),

    /// Persistent key-value storage rejected an operation
    #[error("Storage error: {0}")]
    Storage(String),

    /// Bundled configuration could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// A browser API call failed
    #[error("Browser error: {0}")]
    Browser(String),
}

/// Result type alias using PageError
pub type PageResult<T> = Result<T, PageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_address_message_shows_example() {
        let err = PageError::InvalidCameraAddress {
            input: "abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Formato de IP inválido. Ejemplo válido: 192.168.0.23:8080"
        );
    }

    #[test]
    fn test_camera_denied_includes_reason() {
        let err = PageError::CameraDenied("Permission denied".to_string());
        assert_eq!(
            err.to_string(),
            "No se pudo acceder a la cámara: Permission denied"
        );
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: PageError = json_err.into();
        assert!(matches!(err, PageError::Config(_)));
    }
}

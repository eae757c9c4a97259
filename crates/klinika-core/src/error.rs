use thiserror::Error;

/// Top-level error type for the Klinika system.
///
/// Each variant wraps a subsystem-specific error. Subsystem crates define
/// their own error types and implement `From<SubsystemError> for KlinikaError`
/// so that the `?` operator works seamlessly across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum KlinikaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Search error: {0}")]
    Search(String),

    #[error("Chat error: {0}")]
    Chat(String),

    #[error("Auth error: {0}")]
    Auth(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Navigation error: {0}")]
    Navigation(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for KlinikaError {
    fn from(err: toml::de::Error) -> Self {
        KlinikaError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for KlinikaError {
    fn from(err: toml::ser::Error) -> Self {
        KlinikaError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for KlinikaError {
    fn from(err: serde_json::Error) -> Self {
        KlinikaError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Klinika operations.
pub type Result<T> = std::result::Result<T, KlinikaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KlinikaError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_error_display_all_variants() {
        let cases: Vec<(KlinikaError, &str)> = vec![
            (
                KlinikaError::Search("endpoint unreachable".to_string()),
                "Search error: endpoint unreachable",
            ),
            (
                KlinikaError::Chat("empty reply".to_string()),
                "Chat error: empty reply",
            ),
            (
                KlinikaError::Auth("bad credentials".to_string()),
                "Auth error: bad credentials",
            ),
            (
                KlinikaError::Http("status 502".to_string()),
                "HTTP error: status 502",
            ),
            (
                KlinikaError::Navigation("empty path".to_string()),
                "Navigation error: empty path",
            ),
            (
                KlinikaError::Serialization("invalid json".to_string()),
                "Serialization error: invalid json",
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.to_string(), expected);
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: KlinikaError = io_err.into();
        assert!(matches!(err, KlinikaError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_from_toml_de() {
        let bad_toml = "invalid = [[[";
        let parsed: std::result::Result<toml::Value, _> = toml::from_str(bad_toml);
        assert!(parsed.is_err());
        let err: KlinikaError = parsed.unwrap_err().into();
        assert!(matches!(err, KlinikaError::Config(_)));
    }

    #[test]
    fn test_error_from_serde_json() {
        let bad_json = "{ invalid json }";
        let parsed: std::result::Result<serde_json::Value, _> = serde_json::from_str(bad_json);
        assert!(parsed.is_err());
        let err: KlinikaError = parsed.unwrap_err().into();
        assert!(matches!(err, KlinikaError::Serialization(_)));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_ok() -> Result<i32> {
            Ok(42)
        }

        fn returns_err() -> Result<i32> {
            Err(KlinikaError::Config("fail".to_string()))
        }

        assert_eq!(returns_ok().unwrap(), 42);
        assert!(returns_err().is_err());
    }

    #[test]
    fn test_error_debug_impl() {
        let err = KlinikaError::Search("test debug".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("Search"));
        assert!(debug_str.contains("test debug"));
    }
}

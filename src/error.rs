use std::fmt;
use std::path::PathBuf;

/// Custom error type for TFE operations
#[derive(Debug)]
pub enum TfeError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// Token not found in any source
    TokenNotFound(String),
    /// Failed to read or parse credentials file
    Credentials(String),
    /// JSON parsing error
    Json(String),
    /// Configuration error
    Config(String),
    /// A variable file could not be read
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },
    /// HCL content could not be decoded
    Decode(String),
    /// A `key=value` variable argument is malformed
    InvalidVariable(String),
    /// Resource exists and overwriting was not requested
    AlreadyExists { kind: &'static str, name: String },
    /// User declined a confirmation prompt
    UserCancelled,
}

impl fmt::Display for TfeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TfeError::Http(e) => write!(f, "HTTP request failed: {}", e),
            TfeError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            TfeError::TokenNotFound(msg) => write!(f, "{}", msg),
            TfeError::Credentials(msg) => write!(f, "{}", msg),
            TfeError::Json(msg) => write!(f, "JSON error: {}", msg),
            TfeError::Config(msg) => write!(f, "Configuration error: {}", msg),
            TfeError::FileRead { path, source } => {
                write!(f, "cannot read the file {:?}: {}", path.display(), source)
            }
            TfeError::Decode(msg) => write!(f, "cannot read the HCL content: {}", msg),
            TfeError::InvalidVariable(var) => write!(
                f,
                "invalid variable {:?}: the format must be key=value",
                var
            ),
            TfeError::AlreadyExists { kind, name } => {
                write!(f, "cannot create {:?}: {} already exists", name, kind)
            }
            TfeError::UserCancelled => write!(f, "Operation cancelled by user"),
        }
    }
}

impl std::error::Error for TfeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TfeError::Http(e) => Some(e),
            TfeError::FileRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TfeError {
    fn from(err: reqwest::Error) -> Self {
        TfeError::Http(err)
    }
}

impl From<serde_json::Error> for TfeError {
    fn from(err: serde_json::Error) -> Self {
        TfeError::Json(err.to_string())
    }
}

impl From<hcl::Error> for TfeError {
    fn from(err: hcl::Error) -> Self {
        TfeError::Decode(err.to_string())
    }
}

/// Result type alias for TFE operations
pub type Result<T> = std::result::Result<T, TfeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TfeError::TokenNotFound("test host".to_string());
        assert!(err.to_string().contains("test host"));
    }

    #[test]
    fn test_api_error_display() {
        let err = TfeError::Api {
            status: 404,
            message: "Not found".to_string(),
        };
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("Not found"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TfeError>();
    }

    #[test]
    fn test_file_read_display_includes_path() {
        let err = TfeError::FileRead {
            path: PathBuf::from("/tmp/missing.tfvars"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/missing.tfvars"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_file_read_has_source() {
        use std::error::Error;
        let err = TfeError::FileRead {
            path: PathBuf::from("vars.tfvars"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
    }

    #[test]
    fn test_decode_error_display() {
        let err = TfeError::Decode("unexpected token".to_string());
        assert!(err.to_string().contains("HCL"));
        assert!(err.to_string().contains("unexpected token"));
    }

    #[test]
    fn test_invalid_variable_display() {
        let err = TfeError::InvalidVariable("novalue".to_string());
        assert!(err.to_string().contains("novalue"));
        assert!(err.to_string().contains("key=value"));
    }

    #[test]
    fn test_already_exists_display() {
        let err = TfeError::AlreadyExists {
            kind: "variable",
            name: "region".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "cannot create \"region\": variable already exists"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = TfeError::Config("no organization specified".to_string());
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("no organization specified"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: TfeError = json_err.into();
        match err {
            TfeError::Json(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected TfeError::Json"),
        }
    }


    #[test]
    fn test_error_source_api() {
        use std::error::Error;
        let err = TfeError::Api {
            status: 500,
            message: "Server error".to_string(),
        };
        assert!(err.source().is_none());
    }
}

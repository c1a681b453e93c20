//! Error types for the sonarci CLI

use thiserror::Error;

/// Result type alias for sonarci operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Context(#[from] ContextError),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required input was absent or empty. Carries the public input name
    /// as declared in the action contract (camelCase), not the flag name.
    #[error("Input required and not supplied: {0}")]
    MissingInput(&'static str),

    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Errors reading the CI context (ref and event payload)
#[derive(Debug, Error)]
pub enum ContextError {
    #[error("Failed to read event payload {path}: {source}")]
    Payload {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse event payload: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for ContextError {
    fn from(err: serde_json::Error) -> Self {
        ContextError::Malformed(err.to_string())
    }
}

/// Scanner invocation errors
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to launch sonar-scanner: {0}")]
    Launch(#[source] std::io::Error),

    #[error("SonarScanner failed.")]
    ScannerFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_message() {
        let err = ConfigError::MissingInput("projectKey");
        assert_eq!(
            err.to_string(),
            "Input required and not supplied: projectKey"
        );
    }

    #[test]
    fn test_config_error_not_found() {
        let err = ConfigError::NotFound("/tmp/nope.yaml".to_string());
        assert!(err.to_string().contains("/tmp/nope.yaml"));
    }

    #[test]
    fn test_config_error_from_yaml_error() {
        let yaml_str = "invalid: [yaml: content";
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let config_err: ConfigError = yaml_err.into();

        match config_err {
            ConfigError::ParseError(_) => (),
            _ => panic!("Expected ConfigError::ParseError"),
        }
    }

    #[test]
    fn test_context_error_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let ctx_err: ContextError = json_err.into();

        match ctx_err {
            ContextError::Malformed(_) => (),
            _ => panic!("Expected ContextError::Malformed"),
        }
    }

    #[test]
    fn test_scanner_failed_message() {
        let err = ScanError::ScannerFailed;
        assert_eq!(err.to_string(), "SonarScanner failed.");
    }

    #[test]
    fn test_error_from_config_error() {
        let cfg_err = ConfigError::MissingInput("token");
        let err: Error = cfg_err.into();

        match err {
            Error::Config(ConfigError::MissingInput("token")) => (),
            _ => panic!("Expected Error::Config(ConfigError::MissingInput)"),
        }
    }

    #[test]
    fn test_error_from_scan_error() {
        let scan_err = ScanError::ScannerFailed;
        let err: Error = scan_err.into();

        match err {
            Error::Scan(ScanError::ScannerFailed) => (),
            _ => panic!("Expected Error::Scan(ScanError::ScannerFailed)"),
        }
    }
}

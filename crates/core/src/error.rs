//! Error types for pasta-core
//!
//! Provides a unified error type that can be converted to appropriate exit codes.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for pasta-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for pasta-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// The config file does not exist
    #[error("Unable to load the targets, please check if {} exists", path.display())]
    ConfigNotFound { path: PathBuf },

    /// The config file exists but does not match the expected shape
    #[error("Parsing failed for {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// The updated config could not be persisted
    #[error("Failed to write {}: {source}", path.display())]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// The home directory could not be resolved
    #[error("Could not determine the home directory")]
    HomeDirNotFound,

    /// No target with this name is configured
    #[error("Target not found: {0}")]
    TargetNotFound(String),

    /// No target has been selected yet
    #[error("No current target, run `copy-pasta login` first")]
    NoCurrentTarget,

    /// The downloaded object is not valid UTF-8 text
    #[error("Object {0} is not valid UTF-8 text")]
    NotText(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Object store failure, message kept as reported by the client
    #[error("{0}")]
    Network(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// General error
    #[error("{0}")]
    General(String),
}

impl Error {
    /// Get the appropriate exit code for this error
    pub const fn exit_code(&self) -> i32 {
        match self {
            Error::ConfigNotFound { .. }
            | Error::ConfigParse { .. }
            | Error::Config(_)
            | Error::NoCurrentTarget => 2, // UsageError
            Error::Network(_) => 3,                              // NetworkError
            Error::NotFound(_) | Error::TargetNotFound(_) => 5, // NotFound
            _ => 1,                                              // GeneralError
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_exit_codes() {
        let path = PathBuf::from("/home/me/.copy-pastarc");
        assert_eq!(Error::ConfigNotFound { path }.exit_code(), 2);
        assert_eq!(Error::Config("test".into()).exit_code(), 2);
        assert_eq!(Error::NoCurrentTarget.exit_code(), 2);
        assert_eq!(Error::Network("test".into()).exit_code(), 3);
        assert_eq!(Error::NotFound("test".into()).exit_code(), 5);
        assert_eq!(Error::TargetNotFound("test".into()).exit_code(), 5);
        assert_eq!(Error::HomeDirNotFound.exit_code(), 1);
        assert_eq!(Error::NotText("b/o".into()).exit_code(), 1);
        assert_eq!(Error::General("test".into()).exit_code(), 1);
    }

    #[test]
    fn test_error_display() {
        let err = Error::ConfigNotFound {
            path: PathBuf::from("/home/me/.copy-pastarc"),
        };
        assert_eq!(
            err.to_string(),
            "Unable to load the targets, please check if /home/me/.copy-pastarc exists"
        );

        let err = Error::Network("Yo-failed".into());
        assert_eq!(err.to_string(), "Yo-failed");

        let err = Error::TargetNotFound("work".into());
        assert_eq!(err.to_string(), "Target not found: work");
    }
}

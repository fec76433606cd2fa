//! Error types for zed_unity
//!
//! A single error enum covers every failure the crate can report. Generation
//! errors are propagated to the caller, launch and discovery failures are
//! turned into `false` at their boundary and logged.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for zed_unity operations
#[derive(Error, Debug)]
pub enum ZedUnityError {
    /// IO errors (file writes, directory creation, reading manifests)
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing/serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// The assembly manifest exported by the Unity side could not be used
    #[error("Invalid assembly manifest {path:?}: {message}")]
    Manifest { path: PathBuf, message: String },

    /// An assembly name that cannot be written into a project or solution file
    #[error("Invalid assembly name {name:?}: {reason}")]
    InvalidAssemblyName { name: String, reason: &'static str },

    /// `ProjectSettings` exists but does not say what the project needs
    #[error("Unexpected project settings {path:?}: {message}")]
    ProjectSettings { path: PathBuf, message: String },

    /// No Zed executable configured or discovered
    #[error(
        "Could not find Zed executable. Make sure Zed is installed and set as the external script editor"
    )]
    EditorNotFound,

    /// The OS refused to start the editor process
    #[error("Failed to launch {executable}: {source}")]
    Launch {
        executable: String,
        #[source]
        source: std::io::Error,
    },

    /// The platform has no local data / config directory
    #[error("Could not determine {kind} directory")]
    NoDataDirectory { kind: &'static str },
}

/// Result type alias for zed_unity operations
pub type ZedResult<T> = Result<T, ZedUnityError>;

impl From<std::io::Error> for ZedUnityError {
    fn from(err: std::io::Error) -> Self {
        ZedUnityError::Io {
            source: err,
            message: "IO operation failed".to_string(),
        }
    }
}

/// Helper trait for converting IO errors with context
pub trait IoContext<T> {
    fn with_io_context(self, message: impl FnOnce() -> String) -> ZedResult<T>;
}

impl<T> IoContext<T> for Result<T, std::io::Error> {
    fn with_io_context(self, message: impl FnOnce() -> String) -> ZedResult<T> {
        self.map_err(|e| ZedUnityError::Io {
            message: message(),
            source: e,
        })
    }
}

/// Helper trait for converting JSON errors with context
pub trait JsonContext<T> {
    fn with_json_context(self, message: impl FnOnce() -> String) -> ZedResult<T>;
}

impl<T> JsonContext<T> for Result<T, serde_json::Error> {
    fn with_json_context(self, message: impl FnOnce() -> String) -> ZedResult<T> {
        self.map_err(|e| ZedUnityError::Json {
            message: message(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_context_keeps_message_and_source() {
        let result: Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        let err = result
            .with_io_context(|| "Failed to write Game.csproj".to_string())
            .unwrap_err();

        assert_eq!(err.to_string(), "IO error: Failed to write Game.csproj");
        let source = std::error::Error::source(&err).expect("source should be kept");
        assert_eq!(source.to_string(), "denied");
    }

    #[test]
    fn test_editor_not_found_message() {
        let message = ZedUnityError::EditorNotFound.to_string();
        assert!(message.contains("Could not find Zed executable"));
    }
}

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for screen-splice operations
#[derive(Error, Debug)]
pub enum SpliceError {
    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("File is not valid UTF-8: {path:?}")]
    Encoding { path: PathBuf },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Regex compilation failed: {0}")]
    Pattern(#[from] regex::Error),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Unknown config key: {key}")]
    UnknownKey { key: String },

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

/// Result type alias for screen-splice operations
pub type SpliceResult<T> = Result<T, SpliceError>;

impl SpliceError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::InvalidData {
            return SpliceError::Encoding { path };
        }
        SpliceError::Io { path, source }
    }

    /// A short hint shown under the error in the CLI
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            SpliceError::Io { source, .. } => match source.kind() {
                io::ErrorKind::NotFound => Some("Check the target path, or set it with: screen-splice config set target.path <PATH>"),
                io::ErrorKind::PermissionDenied => Some("Check file permissions on the target file"),
                _ => None,
            },
            SpliceError::Encoding { .. } => Some("The target file must be UTF-8 text"),
            SpliceError::Config(_) => Some("Inspect .screen-splice/config.toml or run: screen-splice config list"),
            SpliceError::Pattern(_) => None,
        }
    }
}

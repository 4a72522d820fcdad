use thiserror::Error;

#[derive(Error, Debug)]
pub enum CountError {
    #[error("Cannot read input file '{path}': {source}")]
    FileAccess {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Input file '{path}' is not valid UTF-8: {source}")]
    Encoding {
        path: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Input file '{path}' is not valid JSON: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Input file '{path}' must contain a JSON array, found {found}")]
    TypeMismatch { path: String, found: &'static str },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The input could not be opened or read.
    Input,
    /// The input was read but its content is not a JSON array.
    Format,
    Configuration,
}

impl CountError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CountError::FileAccess { .. } => ErrorCategory::Input,
            CountError::Encoding { .. }
            | CountError::Parse { .. }
            | CountError::TypeMismatch { .. } => ErrorCategory::Format,
            CountError::ConfigError { .. } | CountError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CountError::FileAccess { path, source } => match source.kind() {
                std::io::ErrorKind::NotFound => format!("Input file not found: {}", path),
                std::io::ErrorKind::PermissionDenied => {
                    format!("Permission denied reading: {}", path)
                }
                _ => format!("Unable to read {}: {}", path, source),
            },
            CountError::Encoding { path, .. } => {
                format!("{} contains bytes that are not valid UTF-8", path)
            }
            CountError::Parse { path, source } => format!(
                "{} is not valid JSON (line {}, column {})",
                path,
                source.line(),
                source.column()
            ),
            CountError::TypeMismatch { path, found } => {
                format!("{} holds a JSON {} instead of a list of movies", path, found)
            }
            CountError::ConfigError { .. } | CountError::InvalidConfigValueError { .. } => {
                self.to_string()
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CountError::FileAccess { .. } => {
                "Check that the file exists, is a regular file and is readable, or pass --input"
            }
            CountError::Encoding { .. } => "Re-save the file with UTF-8 encoding",
            CountError::Parse { .. } => "Fix the JSON syntax at the reported position",
            CountError::TypeMismatch { .. } => {
                "Wrap the movie records in a top-level JSON array: [ {...}, {...} ]"
            }
            CountError::ConfigError { .. } | CountError::InvalidConfigValueError { .. } => {
                "Review the command-line flags and the TOML configuration file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CountError>;

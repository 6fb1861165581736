use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComputeError {
    #[error("Negative number not allowed")]
    NegativeInput { value: f64 },

    #[error("Computation already settled")]
    AlreadySettled,

    #[error("Computation canceled before settling")]
    Canceled,

    #[error("Worker task failed: {0}")]
    JoinError(#[from] tokio::task::JoinError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config file parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required config field: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ComputeError {
    /// Severity drives the CLI exit code. Per-input failures inside a
    /// batch are reported in the batch entries and never reach main's
    /// error path.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ComputeError::NegativeInput { .. }
            | ComputeError::AlreadySettled
            | ComputeError::Canceled => ErrorSeverity::High,
            ComputeError::ConfigError { .. }
            | ComputeError::InvalidConfigValueError { .. }
            | ComputeError::MissingConfigError { .. }
            | ComputeError::TomlError(_) => ErrorSeverity::Medium,
            ComputeError::JoinError(_)
            | ComputeError::IoError(_)
            | ComputeError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }
}

pub type Result<T> = std::result::Result<T, ComputeError>;

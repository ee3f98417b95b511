use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeployError {
    #[error("Cluster API request failed: {0}")]
    ClusterApiError(#[from] kube::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Validation,
    Remote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DeployError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DeployError::ClusterApiError(_) => ErrorCategory::Remote,
            DeployError::SerializationError(_) | DeployError::ValidationError { .. } => {
                ErrorCategory::Validation
            }
            DeployError::ConfigError { .. }
            | DeployError::MissingConfigError { .. }
            | DeployError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 遠端錯誤可由事件來源重試
            ErrorCategory::Remote => ErrorSeverity::Medium,
            ErrorCategory::Validation => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Remote => {
                "Check cluster connectivity and credentials, then retry the deployment".to_string()
            }
            ErrorCategory::Validation => {
                "Check the deployment request fields (image, name, ports)".to_string()
            }
            ErrorCategory::Configuration => {
                "Check kubeconfig availability or the HOST/API_TOKEN environment variables"
                    .to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DeployError::ClusterApiError(e) => format!("Cluster rejected the request: {}", e),
            DeployError::SerializationError(e) => format!("Malformed message payload: {}", e),
            DeployError::ConfigError { message } => format!("Configuration problem: {}", message),
            DeployError::ValidationError { message } => format!("Invalid deployment: {}", message),
            DeployError::MissingConfigError { field } => {
                format!("Missing configuration value: {}", field)
            }
            DeployError::InvalidConfigValueError { field, reason, .. } => {
                format!("Bad configuration value for {}: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DeployError>;

use crate::domain::model::ErrorResponse;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("API returned HTTP {status}: {message}")]
    ApiError {
        status: u16,
        message: String,
        problem: Option<ErrorResponse>,
        body: String,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Missing the required parameter '{param}' when calling {operation}")]
    MissingParameter { operation: String, param: String },

    #[error("Path segment '{segment}' would resolve to a different endpoint")]
    InvalidPathSegment { segment: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Api,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ClientError {
    pub(crate) fn from_response(status: u16, body: String) -> Self {
        let problem = serde_json::from_str::<ErrorResponse>(&body).ok();
        let message = problem
            .as_ref()
            .and_then(|p| p.detail.clone().or_else(|| p.title.clone()))
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    "empty response body".to_string()
                } else {
                    body.clone()
                }
            });

        ClientError::ApiError {
            status,
            message,
            problem,
            body,
        }
    }

    /// HTTP 狀態碼（僅 API 錯誤或帶狀態的傳輸錯誤）
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::ApiError { status, .. } => Some(*status),
            ClientError::TransportError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ClientError::TransportError(_) => ErrorCategory::Network,
            ClientError::ApiError { .. }
            | ClientError::MissingParameter { .. }
            | ClientError::InvalidPathSegment { .. } => ErrorCategory::Api,
            ClientError::SerializationError(_) => ErrorCategory::Data,
            ClientError::IoError(_) => ErrorCategory::System,
            ClientError::UrlError(_)
            | ClientError::ConfigError { .. }
            | ClientError::ConfigValidationError { .. }
            | ClientError::InvalidConfigValueError { .. }
            | ClientError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 伺服器暫時不可用，可稍後重試
            ClientError::TransportError(_) => ErrorSeverity::Medium,
            ClientError::ApiError { status, .. } if *status >= 500 => ErrorSeverity::Medium,
            ClientError::ApiError { .. } => ErrorSeverity::High,
            ClientError::MissingParameter { .. }
            | ClientError::InvalidPathSegment { .. }
            | ClientError::SerializationError(_) => ErrorSeverity::High,
            ClientError::IoError(_) => ErrorSeverity::Critical,
            ClientError::UrlError(_)
            | ClientError::ConfigError { .. }
            | ClientError::ConfigValidationError { .. }
            | ClientError::InvalidConfigValueError { .. }
            | ClientError::MissingConfigError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ClientError::TransportError(e) if e.is_timeout() => {
                "The server did not answer in time; raise --timeout-seconds or check the server load"
                    .to_string()
            }
            ClientError::TransportError(_) => {
                "Check that the Airflow webserver is reachable at the configured base URL".to_string()
            }
            ClientError::ApiError { status: 401, .. } => {
                "Check the username/password or token used for authentication".to_string()
            }
            ClientError::ApiError { status: 403, .. } => {
                "The authenticated user lacks permission for this resource".to_string()
            }
            ClientError::ApiError { status: 404, .. } => {
                "Verify the identifiers passed on the command line".to_string()
            }
            ClientError::ApiError { status: 409, .. } => {
                "The resource already exists; update it instead of creating it".to_string()
            }
            ClientError::ApiError { status, .. } if *status >= 500 => {
                "The server failed to handle the request; inspect the webserver logs".to_string()
            }
            ClientError::ApiError { .. } => "Review the request parameters and body".to_string(),
            ClientError::SerializationError(_) => {
                "The server response did not match the expected schema; check the API version"
                    .to_string()
            }
            ClientError::IoError(_) => "Check file permissions and paths".to_string(),
            ClientError::MissingParameter { param, .. } => {
                format!("Provide a non-empty value for '{}'", param)
            }
            ClientError::InvalidPathSegment { .. } => {
                "Identifiers cannot be '.' or '..'; rename the resource on the server".to_string()
            }
            ClientError::UrlError(_) => {
                "Use a full http(s) base URL such as http://localhost:8080/api/v1".to_string()
            }
            ClientError::ConfigError { .. }
            | ClientError::ConfigValidationError { .. }
            | ClientError::InvalidConfigValueError { .. }
            | ClientError::MissingConfigError { .. } => {
                "Fix the configuration flags, environment variables or TOML file".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ClientError::ApiError {
                status, problem, message, ..
            } => match problem.as_ref().and_then(|p| p.title.as_deref()) {
                Some(title) if title != message.as_str() => {
                    format!("Request rejected ({}): {} - {}", status, title, message)
                }
                _ => format!("Request rejected ({}): {}", status, message),
            },
            ClientError::TransportError(_) => "Could not reach the Airflow API".to_string(),
            other => other.to_string(),
        }
    }
}

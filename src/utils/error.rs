use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Server responded with status {status} for {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("Unknown database identifier: {name}")]
    UnknownDatabase { name: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    Processing { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Input,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl SearchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SearchError::Http(_) | SearchError::UnexpectedStatus { .. } => ErrorCategory::Network,
            SearchError::InvalidUrl(_)
            | SearchError::Config { .. }
            | SearchError::InvalidConfigValue { .. } => ErrorCategory::Configuration,
            SearchError::UnknownDatabase { .. } => ErrorCategory::Input,
            SearchError::Serialization(_) | SearchError::Processing { .. } => ErrorCategory::Data,
            SearchError::Io(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 網路錯誤通常可以重試
            SearchError::Http(e) if e.is_timeout() || e.is_connect() => ErrorSeverity::Medium,
            SearchError::UnexpectedStatus { status, .. } if *status >= 500 => ErrorSeverity::Medium,
            SearchError::Http(_) | SearchError::UnexpectedStatus { .. } => ErrorSeverity::High,
            SearchError::Serialization(_) | SearchError::Processing { .. } => ErrorSeverity::High,
            SearchError::UnknownDatabase { .. }
            | SearchError::InvalidUrl(_)
            | SearchError::Config { .. }
            | SearchError::InvalidConfigValue { .. } => ErrorSeverity::High,
            SearchError::Io(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SearchError::Http(e) if e.is_timeout() => {
                "Increase request.timeout_seconds or check server load".to_string()
            }
            SearchError::Http(_) => "Check that the search server is running and reachable".to_string(),
            SearchError::UnexpectedStatus { status, .. } if *status >= 500 => {
                "The server failed to run the query; retry later or inspect the server logs".to_string()
            }
            SearchError::UnexpectedStatus { .. } => {
                "Verify server.search_path and server.base_url in the configuration".to_string()
            }
            SearchError::UnknownDatabase { .. } => {
                "Use one of: BioGRID, IntAct, STRING".to_string()
            }
            SearchError::InvalidUrl(_) => "Use an absolute http(s) URL such as http://localhost:5000".to_string(),
            SearchError::Config { .. } => "Check the TOML configuration file".to_string(),
            SearchError::InvalidConfigValue { field, .. } => format!("Fix the value of '{}'", field),
            SearchError::Serialization(_) | SearchError::Processing { .. } => {
                "The server response did not match the expected format".to_string()
            }
            SearchError::Io(_) => "Check file paths and permissions".to_string(),
        }
    }

    /// CLI 依嚴重程度決定退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2, // 可重試
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not reach the search server: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Input => format!("Invalid input: {}", self),
            ErrorCategory::Data => format!("Unexpected data: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_errors_are_retryable() {
        let err = SearchError::UnexpectedStatus {
            status: 503,
            url: "http://localhost/interactor/search".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.exit_code(), 2);

        let err = SearchError::UnexpectedStatus {
            status: 404,
            url: "http://localhost/interactor/search".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.exit_code(), 1);
        assert!(err.recovery_suggestion().contains("search_path"));
    }

    #[test]
    fn test_malformed_json_is_a_data_error() {
        let err: SearchError = serde_json::from_str::<serde_json::Value>("{\"nodes\": [")
            .unwrap_err()
            .into();
        assert!(matches!(err, SearchError::Serialization(_)));
        assert_eq!(err.category(), ErrorCategory::Data);
        assert_eq!(err.exit_code(), 1);

        let err: SearchError = std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_user_friendly_message_mentions_input() {
        let err = SearchError::UnknownDatabase {
            name: "Reactome".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert!(err.user_friendly_message().contains("Reactome"));
    }
}

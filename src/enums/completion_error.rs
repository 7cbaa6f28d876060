use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionError {
    NotConfigured,
    ApiError(String),
    NetworkError(String),
    SerializationError(String),
    AuthenticationError(String),
}

impl fmt::Display for CompletionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CompletionError::NotConfigured => write!(f, "Completion endpoint is not configured"),
            CompletionError::ApiError(msg) => write!(f, "Completion API Error: {}", msg),
            CompletionError::NetworkError(msg) => write!(f, "Network Error: {}", msg),
            CompletionError::SerializationError(msg) => write!(f, "Serialization Error: {}", msg),
            CompletionError::AuthenticationError(msg) => write!(f, "Authentication Error: {}", msg),
        }
    }
}

impl Error for CompletionError {}

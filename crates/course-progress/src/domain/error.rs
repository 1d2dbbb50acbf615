//! Domain Errors

/// Common result type for tracker operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Tracker-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    InvalidInput(String),
    Storage(String),
    Config(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            DomainError::Storage(msg) => write!(f, "Storage error: {}", msg),
            DomainError::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Whether the error was caused by the caller's input rather than a fault
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn invalid_selector<T: AsRef<str>>(selector: T, reason: impl std::fmt::Display) -> Self {
        Self::Parse(format!(
            "invalid selector '{}': {}",
            selector.as_ref(),
            reason
        ))
    }
}

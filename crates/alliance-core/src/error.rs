//! Save/load error taxonomy
//!
//! Every failure of the persistence collaborator is converted into one of
//! these before it reaches the UI.

use crate::validation::{summarize, Rule, ValidationIssue};

/// User-facing error category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Validation,
    Network,
    Permission,
    NotFound,
    Server,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyncError {
    /// Rejected before or by the server because of the submitted data
    #[error("validation failed: {}", summarize(.0))]
    Validation(Vec<ValidationIssue>),

    /// No response reached us
    #[error("network error: {0}")]
    Network(String),

    /// HTTP 401 / 403
    #[error("permission denied (HTTP {status})")]
    Permission { status: u16 },

    /// HTTP 404
    #[error("not found: {0}")]
    NotFound(String),

    /// HTTP 5xx, unexpected status, or `success: false`
    #[error("server error{}: {message}", status_suffix(.status))]
    Server { status: Option<u16>, message: String },

    /// A save for the same list is still outstanding
    #[error("a save is already in progress")]
    Busy,
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {s})")).unwrap_or_default()
}

impl SyncError {
    /// Maps a non-success HTTP status; `message` is the server's own text if it sent one.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            400 | 422 => SyncError::Validation(vec![ValidationIssue::general(Rule::Server(
                message.unwrap_or_else(|| "The data you entered is invalid.".to_string()),
            ))]),
            401 | 403 => SyncError::Permission { status },
            404 => SyncError::NotFound(message.unwrap_or_else(|| "The requested resource was not found.".to_string())),
            _ => SyncError::Server {
                status: Some(status),
                message: message.unwrap_or_else(|| "A server error occurred.".to_string()),
            },
        }
    }

    /// A 2xx response whose body reported `success: false`
    pub fn rejected(message: Option<String>) -> Self {
        SyncError::Server {
            status: None,
            message: message.unwrap_or_else(|| "The server rejected the request.".to_string()),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            SyncError::Validation(_) => ErrorCategory::Validation,
            SyncError::Network(_) => ErrorCategory::Network,
            SyncError::Permission { .. } => ErrorCategory::Permission,
            SyncError::NotFound(_) => ErrorCategory::NotFound,
            SyncError::Server { .. } | SyncError::Busy => ErrorCategory::Server,
        }
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        match self {
            SyncError::Validation(issues) => issues,
            _ => &[],
        }
    }
}

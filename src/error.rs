//! Error types for the library ledger

use serde::Serialize;
use thiserror::Error;

/// Stable error codes handed to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    NoSuchBook = 2,
    NoSuchMember = 3,
    NoSuchBorrowing = 4,
    BadValue = 5,
    BookNotAvailable = 6,
    MemberInactive = 7,
    BookBorrowed = 8,
    MemberHasBorrowings = 9,
    AlreadyReturned = 10,
}

/// Business-rule violations, kept distinct so callers can tell them apart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    BookNotAvailable,
    MemberInactive,
    BookBorrowed,
    MemberHasBorrowings,
    AlreadyReturned,
}

/// Kind of record an unknown id referred to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Book,
    Member,
    Borrowing,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RecordKind::Book => "Book",
            RecordKind::Member => "Member",
            RecordKind::Borrowing => "Borrowing",
        };
        write!(f, "{}", label)
    }
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {kind} with id {id}")]
    NotFound { kind: RecordKind, id: i32 },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {message}")]
    Conflict { kind: ConflictKind, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn not_found(kind: RecordKind, id: i32) -> Self {
        AppError::NotFound { kind, id }
    }

    pub fn conflict(kind: ConflictKind, message: impl Into<String>) -> Self {
        AppError::Conflict {
            kind,
            message: message.into(),
        }
    }

    /// Error code reported to the presentation layer
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::NotFound { kind, .. } => match kind {
                RecordKind::Book => ErrorCode::NoSuchBook,
                RecordKind::Member => ErrorCode::NoSuchMember,
                RecordKind::Borrowing => ErrorCode::NoSuchBorrowing,
            },
            AppError::Validation(_) => ErrorCode::BadValue,
            AppError::Conflict { kind, .. } => match kind {
                ConflictKind::BookNotAvailable => ErrorCode::BookNotAvailable,
                ConflictKind::MemberInactive => ErrorCode::MemberInactive,
                ConflictKind::BookBorrowed => ErrorCode::BookBorrowed,
                ConflictKind::MemberHasBorrowings => ErrorCode::MemberHasBorrowings,
                ConflictKind::AlreadyReturned => ErrorCode::AlreadyReturned,
            },
            AppError::Config(_) | AppError::Internal(_) => ErrorCode::Failure,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

/// Error body handed to whatever renders the failure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        let code = err.code();
        let message = match err {
            AppError::Config(e) => {
                tracing::error!("Configuration error: {:?}", e);
                "Configuration error".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal error".to_string()
            }
            other => other.to_string(),
        };

        ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

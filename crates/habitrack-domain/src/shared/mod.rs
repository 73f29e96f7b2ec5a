use serde::{Deserialize, Serialize};
use uuid::Uuid;

mod clock;

pub use clock::{Clock, FixedClock, SystemClock};

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn from_string(s: &str) -> Self {
                Self(s.to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

define_id!(UserId);
define_id!(HabitId);
define_id!(EntryId);

/// Error codes for structured error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Authentication & Authorization (1xxx)
    InvalidCredentials = 1001,
    Unauthorized = 1002,

    // Resource Not Found (2xxx)
    UserNotFound = 2001,
    HabitNotFound = 2002,
    ResourceNotFound = 2003,

    // Business Logic (3xxx)
    NotScheduledForDay = 3001,
    DuplicateCompletion = 3002,
    EmailAlreadyInUse = 3003,
    ConcurrentModification = 3004,

    // Data & Persistence (4xxx)
    RepositoryError = 4001,
    DataIntegrityError = 4003,
    SerializationError = 4004,

    // Infrastructure (5xxx)
    InfrastructureError = 5001,

    // Validation (6xxx)
    ValidationError = 6001,
    InvalidInput = 6002,
    InvalidDateFormat = 6003,
}

impl ErrorCode {
    /// Get error code as integer
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ErrorCode::InvalidCredentials
            | ErrorCode::Unauthorized
            | ErrorCode::DuplicateCompletion
            | ErrorCode::ConcurrentModification => ErrorSeverity::Warning,

            ErrorCode::UserNotFound
            | ErrorCode::HabitNotFound
            | ErrorCode::ResourceNotFound
            | ErrorCode::NotScheduledForDay
            | ErrorCode::EmailAlreadyInUse
            | ErrorCode::ValidationError
            | ErrorCode::InvalidInput
            | ErrorCode::InvalidDateFormat => ErrorSeverity::Info,

            ErrorCode::DataIntegrityError
            | ErrorCode::RepositoryError
            | ErrorCode::SerializationError
            | ErrorCode::InfrastructureError => ErrorSeverity::Error,
        }
    }

    /// Check if error is recoverable
    ///
    /// Every user-facing rejection is recoverable: the caller can fix the
    /// input and try again. Only storage and infrastructure faults are not.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self.severity(), ErrorSeverity::Error | ErrorSeverity::Critical)
    }

    /// HTTP-equivalent status for collaborators that speak HTTP
    pub fn http_status(&self) -> u16 {
        match self {
            ErrorCode::InvalidCredentials | ErrorCode::Unauthorized => 401,
            ErrorCode::UserNotFound | ErrorCode::HabitNotFound | ErrorCode::ResourceNotFound => {
                404
            }
            ErrorCode::NotScheduledForDay => 422,
            ErrorCode::DuplicateCompletion
            | ErrorCode::EmailAlreadyInUse
            | ErrorCode::ConcurrentModification => 409,
            ErrorCode::ValidationError | ErrorCode::InvalidInput | ErrorCode::InvalidDateFormat => {
                400
            }
            ErrorCode::RepositoryError
            | ErrorCode::DataIntegrityError
            | ErrorCode::SerializationError
            | ErrorCode::InfrastructureError => 500,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("{0}")]
    InvalidCredentials(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Habit not found: {0}")]
    HabitNotFound(String),

    #[error("Invalid date format. {0}")]
    InvalidDateFormat(String),

    #[error("This habit is not scheduled for {0}")]
    NotScheduledForDay(String),

    #[error("Habit already completed for this date: {0}")]
    DuplicateCompletion(String),

    #[error("Email already in use: {0}")]
    EmailAlreadyInUse(String),

    #[error("Concurrent modification: {0}")]
    ConcurrentModification(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl DomainError {
    /// Get error code
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::InvalidCredentials(_) => ErrorCode::InvalidCredentials,
            DomainError::Unauthorized(_) => ErrorCode::Unauthorized,
            DomainError::UserNotFound(_) => ErrorCode::UserNotFound,
            DomainError::HabitNotFound(_) => ErrorCode::HabitNotFound,
            DomainError::InvalidDateFormat(_) => ErrorCode::InvalidDateFormat,
            DomainError::NotScheduledForDay(_) => ErrorCode::NotScheduledForDay,
            DomainError::DuplicateCompletion(_) => ErrorCode::DuplicateCompletion,
            DomainError::EmailAlreadyInUse(_) => ErrorCode::EmailAlreadyInUse,
            DomainError::ConcurrentModification(_) => ErrorCode::ConcurrentModification,
            DomainError::Repository(_) => ErrorCode::RepositoryError,
            DomainError::Infrastructure(_) => ErrorCode::InfrastructureError,
            DomainError::Validation(_) => ErrorCode::ValidationError,
            DomainError::DataIntegrity(_) => ErrorCode::DataIntegrityError,
            DomainError::InvalidInput(_) => ErrorCode::InvalidInput,
            DomainError::Serialization(_) => ErrorCode::SerializationError,
            DomainError::NotFound(_) => ErrorCode::ResourceNotFound,
        }
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        self.code().severity()
    }

    /// Check if error is recoverable
    pub fn is_recoverable(&self) -> bool {
        self.code().is_recoverable()
    }

    /// HTTP-equivalent status code
    pub fn http_status(&self) -> u16 {
        self.code().http_status()
    }

    /// Format error with code
    pub fn format_with_code(&self) -> String {
        format!("[{}] {}", self.code().code(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_completion_errors_are_user_facing() {
        let errors = [
            DomainError::InvalidDateFormat("2024-1-1".to_string()),
            DomainError::NotScheduledForDay("Wed".to_string()),
            DomainError::DuplicateCompletion("2024-01-01".to_string()),
            DomainError::HabitNotFound("h1".to_string()),
        ];

        for err in errors {
            assert!(err.is_recoverable(), "{} should be recoverable", err);
            let status = err.http_status();
            assert!((400..500).contains(&status), "{} mapped to {}", err, status);
        }
    }

    #[test]
    fn test_not_scheduled_is_distinct_from_generic_validation() {
        let not_scheduled = DomainError::NotScheduledForDay("Wed".to_string());
        let validation = DomainError::Validation("bad".to_string());

        assert_ne!(not_scheduled.code(), validation.code());
        assert_ne!(not_scheduled.http_status(), validation.http_status());
        assert_eq!(
            not_scheduled.to_string(),
            "This habit is not scheduled for Wed"
        );
    }

    #[test]
    fn test_duplicate_completion_message_names_the_date() {
        let err = DomainError::DuplicateCompletion("2024-01-01".to_string());
        assert_eq!(
            err.to_string(),
            "Habit already completed for this date: 2024-01-01"
        );
    }

    #[test]
    fn test_infrastructure_errors_are_not_recoverable() {
        let err = DomainError::Repository("disk full".to_string());
        assert_eq!(err.severity(), ErrorSeverity::Error);
        assert!(!err.is_recoverable());
        assert_eq!(err.http_status(), 500);
        assert_eq!(err.format_with_code(), "[4001] Repository error: disk full");
    }

    #[test]
    fn test_ids_are_unique_and_round_trip() {
        let a = HabitId::new();
        let b = HabitId::new();
        assert_ne!(a, b);
        assert_eq!(HabitId::from_string(a.as_str()), a);
        assert_eq!(a.to_string(), a.as_str());
    }
}

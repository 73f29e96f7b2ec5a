use habitrack_domain::shared::{DomainError, ErrorCode, ErrorSeverity};
use serde::{Deserialize, Serialize};

/// Structured error returned by the application facade
///
/// Carries everything a caller needs to present or retry:
/// - Error code for programmatic handling
/// - Human-readable message
/// - Severity level
/// - Recoverability flag
/// - HTTP-equivalent status for HTTP collaborators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandError {
    /// Numeric error code (1xxx-6xxx range)
    pub code: u16,

    /// Human-readable error message
    pub message: String,

    /// Error severity level
    pub severity: ErrorSeverity,

    /// Whether the caller can fix the input and try again
    pub recoverable: bool,

    pub status: u16,
}

impl CommandError {
    /// Create an error from an error code and message
    pub fn from_code(error_code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: error_code.code(),
            message: message.into(),
            severity: error_code.severity(),
            recoverable: error_code.is_recoverable(),
            status: error_code.http_status(),
        }
    }

    /// Create a generic infrastructure error
    pub fn infrastructure(message: impl Into<String>) -> Self {
        Self::from_code(ErrorCode::InfrastructureError, message)
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::from_code(ErrorCode::ValidationError, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::from_code(ErrorCode::Unauthorized, message)
    }
}

impl From<DomainError> for CommandError {
    fn from(err: DomainError) -> Self {
        Self::from_code(err.code(), err.to_string())
    }
}

impl From<String> for CommandError {
    fn from(message: String) -> Self {
        Self::infrastructure(message)
    }
}

impl From<&str> for CommandError {
    fn from(message: &str) -> Self {
        Self::infrastructure(message.to_string())
    }
}

impl From<anyhow::Error> for CommandError {
    fn from(err: anyhow::Error) -> Self {
        Self::infrastructure(err.to_string())
    }
}

impl From<sqlx::Error> for CommandError {
    fn from(err: sqlx::Error) -> Self {
        Self::from_code(ErrorCode::RepositoryError, err.to_string())
    }
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        Self::from_code(ErrorCode::SerializationError, err.to_string())
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for CommandError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_error_from_domain_error() {
        let domain_err = DomainError::HabitNotFound("h-123".to_string());
        let cmd_err: CommandError = domain_err.into();

        assert_eq!(cmd_err.code, 2002);
        assert_eq!(cmd_err.message, "Habit not found: h-123");
        assert_eq!(cmd_err.severity, ErrorSeverity::Info);
        assert!(cmd_err.recoverable);
        assert_eq!(cmd_err.status, 404);
    }

    #[test]
    fn test_core_completion_errors_map_to_client_statuses() {
        let cases = [
            (DomainError::InvalidDateFormat("Use YYYY-MM-DD".to_string()), 400),
            (DomainError::NotScheduledForDay("Wed".to_string()), 422),
            (DomainError::DuplicateCompletion("2024-01-01".to_string()), 409),
            (DomainError::ConcurrentModification("streak".to_string()), 409),
        ];

        for (err, status) in cases {
            let cmd_err = CommandError::from(err);
            assert_eq!(cmd_err.status, status, "{}", cmd_err);
            assert!(cmd_err.recoverable);
        }
    }

    #[test]
    fn test_invalid_credentials_message_is_verbatim() {
        let cmd_err =
            CommandError::from(DomainError::InvalidCredentials("Invalid credentials".to_string()));
        assert_eq!(cmd_err.message, "Invalid credentials");
        assert_eq!(cmd_err.status, 401);
    }

    #[test]
    fn test_command_error_from_string() {
        let cmd_err: CommandError = "Something went wrong".into();

        assert_eq!(cmd_err.code, 5001); // InfrastructureError code
        assert_eq!(cmd_err.message, "Something went wrong");
        assert_eq!(cmd_err.severity, ErrorSeverity::Error);
        assert!(!cmd_err.recoverable);
        assert_eq!(cmd_err.status, 500);
    }

    #[test]
    fn test_command_error_helpers() {
        assert_eq!(CommandError::validation("Invalid input").code, 6001);
        assert_eq!(CommandError::unauthorized("Missing session token").status, 401);
        assert_eq!(CommandError::infrastructure("Service unavailable").code, 5001);
        assert_eq!(
            CommandError::validation("bad").to_string(),
            "[6001] bad"
        );
    }
}

use habitrack_domain::shared::DomainError;

/// Extension trait for Result types to simplify error handling
pub trait ResultExt<T, E> {
    /// Convert error to DomainError::Infrastructure
    /// Usage: `result.to_infra_err()?`
    fn to_infra_err(self) -> Result<T, DomainError>;
}

impl<T, E: std::fmt::Display> ResultExt<T, E> for Result<T, E> {
    fn to_infra_err(self) -> Result<T, DomainError> {
        self.map_err(|e| DomainError::Infrastructure(e.to_string()))
    }
}

/// True when the statement hit a UNIQUE or PRIMARY KEY constraint.
pub fn is_unique_violation(error: &sqlx::Error) -> bool {
    matches!(error, sqlx::Error::Database(db) if db.is_unique_violation())
}

/// Maps sqlx errors to domain errors, prefixed with the operation.
pub struct RepositoryErrorMapper;

impl RepositoryErrorMapper {
    pub fn map_sqlx_error(error: sqlx::Error, context: &str) -> DomainError {
        match error {
            sqlx::Error::RowNotFound => DomainError::NotFound(format!("{}: row not found", context)),
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
                DomainError::DataIntegrity(format!("{}: {}", context, error))
            }
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                DomainError::DataIntegrity(format!("{}: {}", context, error))
            }
            other => DomainError::Repository(format!("{}: {}", context, other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_infra_err() {
        let result: Result<i32, &str> = Err("infra error");
        match result.to_infra_err() {
            Err(DomainError::Infrastructure(msg)) => assert_eq!(msg, "infra error"),
            other => panic!("Expected Infrastructure error, got {:?}", other),
        }
    }

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err = RepositoryErrorMapper::map_sqlx_error(sqlx::Error::RowNotFound, "Find habit");
        assert!(matches!(err, DomainError::NotFound(msg) if msg.starts_with("Find habit")));
    }

    #[test]
    fn test_other_errors_map_to_repository() {
        let err = RepositoryErrorMapper::map_sqlx_error(sqlx::Error::PoolTimedOut, "Save habit");
        assert!(matches!(err, DomainError::Repository(_)));
        assert!(!is_unique_violation(&sqlx::Error::PoolTimedOut));
    }
}

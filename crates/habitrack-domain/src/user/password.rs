use crate::shared::DomainError;

/// One-way password hashing port.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// `Ok(false)` for a well-formed hash that does not match.
    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, DomainError>;
}

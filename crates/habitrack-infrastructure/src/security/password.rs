use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{self, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString};
use argon2::Argon2;

use habitrack_domain::shared::DomainError;
use habitrack_domain::user::PasswordHasher;

/// Argon2id password hashing
///
/// Produces PHC strings (`$argon2id$v=19$...`) with a fresh random salt per
/// hash, so the same password never hashes to the same string twice.
#[derive(Default)]
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| DomainError::Infrastructure(format!("Failed to hash password: {}", e)))
    }

    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, DomainError> {
        let parsed = PasswordHash::new(password_hash).map_err(|e| {
            DomainError::DataIntegrity(format!("Stored password hash is malformed: {}", e))
        })?;

        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(DomainError::Infrastructure(format!(
                "Failed to verify password: {}",
                e
            ))),
        }
    }
}

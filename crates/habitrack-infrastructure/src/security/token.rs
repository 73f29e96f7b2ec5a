use uuid::Uuid;

/// Opaque session token (UUID v4, hyphenated).
pub fn generate_session_token() -> String {
    Uuid::new_v4().to_string()
}

mod aggregate;
mod password;
mod repository;

pub use aggregate::{Theme, User, UserSettings};
pub use password::PasswordHasher;
pub use repository::UserRepository;

use std::sync::Arc;

use crate::application::dtos::UserDto;
use habitrack_domain::session::AuthContext;
use habitrack_domain::shared::DomainError;
use habitrack_domain::user::UserRepository;

pub struct UserQueryService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserQueryService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Profile of the authenticated user
    pub async fn get_current_user(&self, auth: &AuthContext) -> Result<UserDto, DomainError> {
        let user = self
            .user_repo
            .find_by_id(&auth.user_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(auth.user_id.to_string()))?;

        Ok(UserDto::from(&user))
    }
}

use async_trait::async_trait;

use super::ProfileError;
use crate::profile::application::domain::entities::Profile;

#[async_trait]
pub trait GetProfileUseCase: Send + Sync {
    async fn execute(&self) -> Result<Profile, ProfileError>;
}

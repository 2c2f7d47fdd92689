use async_trait::async_trait;

use super::ProfileError;
use crate::profile::application::domain::entities::{CreateProfileData, Profile};

#[async_trait]
pub trait CreateProfileUseCase: Send + Sync {
    async fn execute(&self, data: CreateProfileData) -> Result<Profile, ProfileError>;
}

use async_trait::async_trait;
use uuid::Uuid;

use super::ProfileError;
use crate::profile::application::domain::entities::{PatchProfileData, Profile};

#[async_trait]
pub trait PatchProfileUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, data: PatchProfileData) -> Result<Profile, ProfileError>;
}

use async_trait::async_trait;
use uuid::Uuid;

use crate::profile::application::domain::entities::{NewProfile, Profile, ProfileChanges};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("Profile not found")]
    NotFound,

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// The oldest profile by `created_at`, with its links in order.
    async fn find_default(&self) -> Result<Profile, ProfileRepositoryError>;

    async fn create(&self, data: NewProfile) -> Result<Profile, ProfileRepositoryError>;

    /// Row update and link replacement commit together.
    async fn update(
        &self,
        id: Uuid,
        changes: ProfileChanges,
    ) -> Result<Profile, ProfileRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<bool, ProfileRepositoryError>;
}

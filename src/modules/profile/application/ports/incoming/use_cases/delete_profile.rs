use async_trait::async_trait;
use uuid::Uuid;

use super::ProfileError;

#[async_trait]
pub trait DeleteProfileUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), ProfileError>;
}

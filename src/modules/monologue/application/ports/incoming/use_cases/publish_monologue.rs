use async_trait::async_trait;
use uuid::Uuid;

use super::MonologueError;
use crate::monologue::application::domain::entities::Monologue;

#[async_trait]
pub trait PublishMonologueUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<Monologue, MonologueError>;
}

#[async_trait]
pub trait UnpublishMonologueUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<Monologue, MonologueError>;
}

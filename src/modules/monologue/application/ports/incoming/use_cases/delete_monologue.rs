use async_trait::async_trait;
use uuid::Uuid;

use super::MonologueError;

#[async_trait]
pub trait DeleteMonologueUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), MonologueError>;
}

use async_trait::async_trait;
use uuid::Uuid;

use super::MonologueError;
use crate::monologue::application::domain::entities::{Monologue, MonologueFilter, MonologuePage};
use crate::shared::visibility::Visibility;

#[async_trait]
pub trait GetMonologuesUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: MonologueFilter,
        visibility: Visibility,
    ) -> Result<MonologuePage, MonologueError>;
}

#[async_trait]
pub trait GetMonologueUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, visibility: Visibility) -> Result<Monologue, MonologueError>;
}

use async_trait::async_trait;
use uuid::Uuid;

use super::MonologueError;
use crate::monologue::application::domain::entities::{Monologue, PatchMonologueData};

#[async_trait]
pub trait PatchMonologueUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        data: PatchMonologueData,
    ) -> Result<Monologue, MonologueError>;
}

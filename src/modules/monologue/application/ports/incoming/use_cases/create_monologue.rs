use async_trait::async_trait;

use super::MonologueError;
use crate::monologue::application::domain::entities::{CreateMonologueData, Monologue};

#[async_trait]
pub trait CreateMonologueUseCase: Send + Sync {
    async fn execute(&self, data: CreateMonologueData) -> Result<Monologue, MonologueError>;
}

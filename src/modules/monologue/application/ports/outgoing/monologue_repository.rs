use async_trait::async_trait;
use uuid::Uuid;

use crate::monologue::application::domain::entities::{Monologue, MonologueChanges, NewMonologue};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MonologueRepositoryError {
    #[error("Monologue not found")]
    NotFound,

    #[error("Code category does not exist")]
    UnknownCodeCategory,

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Writes monologue rows only. Returned values carry no embedded category
/// or preview; callers re-read through `MonologueQuery` for those.
#[async_trait]
pub trait MonologueRepository: Send + Sync {
    async fn create(&self, data: NewMonologue) -> Result<Monologue, MonologueRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        changes: MonologueChanges,
    ) -> Result<Monologue, MonologueRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<bool, MonologueRepositoryError>;
}

use async_trait::async_trait;
use uuid::Uuid;

use crate::monologue::application::domain::entities::{Monologue, MonologueFilter, MonologuePage};
use crate::shared::visibility::Visibility;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MonologueQueryError {
    #[error("Monologue not found")]
    NotFound,

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait MonologueQuery: Send + Sync {
    /// Public: published only, newest publish first.
    /// Admin: everything, newest created first.
    async fn list(
        &self,
        filter: &MonologueFilter,
        visibility: Visibility,
    ) -> Result<MonologuePage, MonologueQueryError>;

    async fn find_by_id(
        &self,
        id: Uuid,
        visibility: Visibility,
    ) -> Result<Monologue, MonologueQueryError>;
}

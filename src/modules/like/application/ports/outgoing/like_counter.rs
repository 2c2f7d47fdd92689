use async_trait::async_trait;
use uuid::Uuid;

use crate::like::application::domain::entities::LikeTarget;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LikeCounterError {
    #[error("Content not found")]
    NotFound,

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait LikeCounter: Send + Sync {
    /// Adds one and returns the new count, as a single store-side statement.
    async fn increment(&self, target: LikeTarget, id: Uuid) -> Result<i32, LikeCounterError>;
}

use async_trait::async_trait;
use uuid::Uuid;

use crate::monologue::application::domain::entities::{Monologue, MonologueFilter, MonologuePage};
use crate::monologue::application::ports::incoming::use_cases::{
    GetMonologueUseCase, GetMonologuesUseCase, MonologueError,
};
use crate::monologue::application::ports::outgoing::MonologueQuery;
use crate::shared::visibility::Visibility;

pub struct GetMonologuesService<Q: MonologueQuery> {
    query: Q,
}

impl<Q: MonologueQuery> GetMonologuesService<Q> {
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetMonologuesUseCase for GetMonologuesService<Q>
where
    Q: MonologueQuery + Send + Sync,
{
    async fn execute(
        &self,
        mut filter: MonologueFilter,
        visibility: Visibility,
    ) -> Result<MonologuePage, MonologueError> {
        filter.tags.retain(|t| !t.trim().is_empty());
        Ok(self.query.list(&filter, visibility).await?)
    }
}

pub struct GetMonologueService<Q: MonologueQuery> {
    query: Q,
}

impl<Q: MonologueQuery> GetMonologueService<Q> {
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetMonologueUseCase for GetMonologueService<Q>
where
    Q: MonologueQuery + Send + Sync,
{
    async fn execute(&self, id: Uuid, visibility: Visibility) -> Result<Monologue, MonologueError> {
        Ok(self.query.find_by_id(id, visibility).await?)
    }
}

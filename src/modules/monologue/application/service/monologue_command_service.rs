use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::link_preview::application::service::PreviewRefresher;
use crate::monologue::application::domain::entities::{
    CreateMonologueData, Monologue, MonologueChanges, NewMonologue, PatchMonologueData,
};
use crate::monologue::application::ports::incoming::use_cases::{
    CreateMonologueUseCase, DeleteMonologueUseCase, MonologueError, PatchMonologueUseCase,
    PublishMonologueUseCase, UnpublishMonologueUseCase,
};
use crate::monologue::application::ports::outgoing::{MonologueQuery, MonologueRepository};
use crate::shared::clock::Clock;
use crate::shared::visibility::Visibility;

/// Canonical read after a write, so the caller sees the embedded category
/// and whatever preview ended up stored.
async fn reload<Q: MonologueQuery>(query: &Q, id: Uuid) -> Result<Monologue, MonologueError> {
    Ok(query.find_by_id(id, Visibility::Admin).await?)
}

pub struct CreateMonologueService<R: MonologueRepository, Q: MonologueQuery> {
    repository: R,
    query: Q,
    previews: PreviewRefresher,
    clock: Arc<dyn Clock>,
}

impl<R: MonologueRepository, Q: MonologueQuery> CreateMonologueService<R, Q> {
    pub fn new(repository: R, query: Q, previews: PreviewRefresher, clock: Arc<dyn Clock>) -> Self {
        Self {
            repository,
            query,
            previews,
            clock,
        }
    }
}

#[async_trait]
impl<R, Q> CreateMonologueUseCase for CreateMonologueService<R, Q>
where
    R: MonologueRepository + Send + Sync,
    Q: MonologueQuery + Send + Sync,
{
    async fn execute(&self, data: CreateMonologueData) -> Result<Monologue, MonologueError> {
        let new = NewMonologue::new(data, self.clock.now())?;
        let created = self.repository.create(new).await?;

        if let Some(url) = created.url.as_deref() {
            self.previews.attach(created.id, url).await;
        }

        info!("Created monologue {}", created.id);
        reload(&self.query, created.id).await
    }
}

pub struct PatchMonologueService<R: MonologueRepository, Q: MonologueQuery> {
    repository: R,
    query: Q,
    previews: PreviewRefresher,
    clock: Arc<dyn Clock>,
}

impl<R: MonologueRepository, Q: MonologueQuery> PatchMonologueService<R, Q> {
    pub fn new(repository: R, query: Q, previews: PreviewRefresher, clock: Arc<dyn Clock>) -> Self {
        Self {
            repository,
            query,
            previews,
            clock,
        }
    }
}

#[async_trait]
impl<R, Q> PatchMonologueUseCase for PatchMonologueService<R, Q>
where
    R: MonologueRepository + Send + Sync,
    Q: MonologueQuery + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        data: PatchMonologueData,
    ) -> Result<Monologue, MonologueError> {
        let changes = MonologueChanges::from_patch(data, self.clock.now())?;
        let url = changes.url_change().map(|u| u.map(str::to_string));

        self.repository.update(id, changes).await?;

        if let Some(url) = url {
            self.previews.replace(id, url.as_deref()).await;
        }

        reload(&self.query, id).await
    }
}

pub struct DeleteMonologueService<R: MonologueRepository> {
    repository: R,
    previews: PreviewRefresher,
}

impl<R: MonologueRepository> DeleteMonologueService<R> {
    pub fn new(repository: R, previews: PreviewRefresher) -> Self {
        Self {
            repository,
            previews,
        }
    }
}

#[async_trait]
impl<R> DeleteMonologueUseCase for DeleteMonologueService<R>
where
    R: MonologueRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), MonologueError> {
        self.previews.remove(id).await?;

        if self.repository.delete(id).await? {
            info!("Deleted monologue {}", id);
            Ok(())
        } else {
            Err(MonologueError::NotFound)
        }
    }
}

pub struct PublishMonologueService<R: MonologueRepository, Q: MonologueQuery> {
    repository: R,
    query: Q,
    clock: Arc<dyn Clock>,
}

impl<R: MonologueRepository, Q: MonologueQuery> PublishMonologueService<R, Q> {
    pub fn new(repository: R, query: Q, clock: Arc<dyn Clock>) -> Self {
        Self {
            repository,
            query,
            clock,
        }
    }
}

#[async_trait]
impl<R, Q> PublishMonologueUseCase for PublishMonologueService<R, Q>
where
    R: MonologueRepository + Send + Sync,
    Q: MonologueQuery + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<Monologue, MonologueError> {
        self.repository
            .update(id, MonologueChanges::publish(self.clock.now()))
            .await?;
        reload(&self.query, id).await
    }
}

pub struct UnpublishMonologueService<R: MonologueRepository, Q: MonologueQuery> {
    repository: R,
    query: Q,
}

impl<R: MonologueRepository, Q: MonologueQuery> UnpublishMonologueService<R, Q> {
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> UnpublishMonologueUseCase for UnpublishMonologueService<R, Q>
where
    R: MonologueRepository + Send + Sync,
    Q: MonologueQuery + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<Monologue, MonologueError> {
        self.repository
            .update(id, MonologueChanges::unpublish())
            .await?;
        reload(&self.query, id).await
    }
}

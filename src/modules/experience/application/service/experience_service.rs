use async_trait::async_trait;
use uuid::Uuid;

use crate::experience::application::domain::entities::{
    CreateExperienceData, Experience, ExperienceChanges, NewExperience, PatchExperienceData,
};
use crate::experience::application::ports::incoming::use_cases::{
    CreateExperienceUseCase, DeleteExperienceUseCase, ExperienceError, GetExperiencesUseCase,
    PatchExperienceUseCase,
};
use crate::experience::application::ports::outgoing::ExperienceRepository;

pub struct GetExperiencesService<R: ExperienceRepository> {
    repository: R,
}

impl<R: ExperienceRepository> GetExperiencesService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetExperiencesUseCase for GetExperiencesService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Experience>, ExperienceError> {
        Ok(self.repository.list().await?)
    }
}

pub struct CreateExperienceService<R: ExperienceRepository> {
    repository: R,
}

impl<R: ExperienceRepository> CreateExperienceService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateExperienceUseCase for CreateExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(&self, data: CreateExperienceData) -> Result<Experience, ExperienceError> {
        let new = NewExperience::try_from(data)?;
        Ok(self.repository.create(new).await?)
    }
}

pub struct PatchExperienceService<R: ExperienceRepository> {
    repository: R,
}

impl<R: ExperienceRepository> PatchExperienceService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> PatchExperienceUseCase for PatchExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        data: PatchExperienceData,
    ) -> Result<Experience, ExperienceError> {
        let changes = ExperienceChanges::try_from(data)?;
        Ok(self.repository.update(id, changes).await?)
    }
}

pub struct DeleteExperienceService<R: ExperienceRepository> {
    repository: R,
}

impl<R: ExperienceRepository> DeleteExperienceService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteExperienceUseCase for DeleteExperienceService<R>
where
    R: ExperienceRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), ExperienceError> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(ExperienceError::NotFound)
        }
    }
}

use async_trait::async_trait;
use uuid::Uuid;

use crate::skill::application::domain::entities::{
    group_by_category, CreateSkillData, NewSkill, PatchSkillData, Skill, SkillCategory,
    SkillChanges,
};
use crate::skill::application::ports::incoming::use_cases::{
    CreateSkillUseCase, DeleteSkillUseCase, GetSkillsByCategoryUseCase, GetSkillsUseCase,
    PatchSkillUseCase, SkillError,
};
use crate::skill::application::ports::outgoing::SkillRepository;

pub struct GetSkillsService<R: SkillRepository> {
    repository: R,
}

impl<R: SkillRepository> GetSkillsService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetSkillsUseCase for GetSkillsService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Skill>, SkillError> {
        Ok(self.repository.list().await?)
    }
}

pub struct GetSkillsByCategoryService<R: SkillRepository> {
    repository: R,
}

impl<R: SkillRepository> GetSkillsByCategoryService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetSkillsByCategoryUseCase for GetSkillsByCategoryService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<SkillCategory>, SkillError> {
        let skills = self.repository.list().await?;
        Ok(group_by_category(skills))
    }
}

pub struct CreateSkillService<R: SkillRepository> {
    repository: R,
}

impl<R: SkillRepository> CreateSkillService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateSkillUseCase for CreateSkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self, data: CreateSkillData) -> Result<Skill, SkillError> {
        let new = NewSkill::try_from(data)?;
        Ok(self.repository.create(new).await?)
    }
}

pub struct PatchSkillService<R: SkillRepository> {
    repository: R,
}

impl<R: SkillRepository> PatchSkillService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> PatchSkillUseCase for PatchSkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid, data: PatchSkillData) -> Result<Skill, SkillError> {
        let changes = SkillChanges::try_from(data)?;
        Ok(self.repository.update(id, changes).await?)
    }
}

pub struct DeleteSkillService<R: SkillRepository> {
    repository: R,
}

impl<R: SkillRepository> DeleteSkillService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteSkillUseCase for DeleteSkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), SkillError> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(SkillError::NotFound)
        }
    }
}

use async_trait::async_trait;
use uuid::Uuid;

use crate::code_category::application::domain::entities::{
    CodeCategory, CodeCategoryChanges, CreateCodeCategoryData, NewCodeCategory,
    PatchCodeCategoryData,
};
use crate::code_category::application::domain::hierarchy::{
    build_hierarchy, creates_cycle, CodeCategoryNode,
};
use crate::code_category::application::ports::incoming::use_cases::{
    CodeCategoryError, CreateCodeCategoryUseCase, DeleteCodeCategoryUseCase,
    GetCodeCategoriesUseCase, GetCodeCategoryHierarchyUseCase, PatchCodeCategoryUseCase,
};
use crate::code_category::application::ports::outgoing::CodeCategoryRepository;
use crate::shared::validation::ValidationError;

fn invalid_parent(reason: &str) -> CodeCategoryError {
    CodeCategoryError::Validation(ValidationError::Invalid {
        field: "parent_id",
        reason: reason.to_string(),
    })
}

//
// ──────────────────────────────────────────────────────────
// Reads
// ──────────────────────────────────────────────────────────
//

pub struct GetCodeCategoriesService<R>
where
    R: CodeCategoryRepository,
{
    repository: R,
}

impl<R: CodeCategoryRepository> GetCodeCategoriesService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetCodeCategoriesUseCase for GetCodeCategoriesService<R>
where
    R: CodeCategoryRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<CodeCategory>, CodeCategoryError> {
        Ok(self.repository.list().await?)
    }
}

pub struct GetCodeCategoryHierarchyService<R>
where
    R: CodeCategoryRepository,
{
    repository: R,
}

impl<R: CodeCategoryRepository> GetCodeCategoryHierarchyService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetCodeCategoryHierarchyUseCase for GetCodeCategoryHierarchyService<R>
where
    R: CodeCategoryRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<CodeCategoryNode>, CodeCategoryError> {
        let categories = self.repository.list().await?;
        Ok(build_hierarchy(categories))
    }
}

//
// ──────────────────────────────────────────────────────────
// Writes
// ──────────────────────────────────────────────────────────
//

pub struct CreateCodeCategoryService<R>
where
    R: CodeCategoryRepository,
{
    repository: R,
}

impl<R: CodeCategoryRepository> CreateCodeCategoryService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateCodeCategoryUseCase for CreateCodeCategoryService<R>
where
    R: CodeCategoryRepository + Send + Sync,
{
    async fn execute(
        &self,
        data: CreateCodeCategoryData,
    ) -> Result<CodeCategory, CodeCategoryError> {
        let new = NewCodeCategory::try_from(data)?;

        if let Some(parent) = new.parent_id {
            let all = self.repository.list().await?;
            if !all.iter().any(|c| c.id == parent) {
                return Err(invalid_parent("parent category does not exist"));
            }
        }

        Ok(self.repository.create(new).await?)
    }
}

pub struct PatchCodeCategoryService<R>
where
    R: CodeCategoryRepository,
{
    repository: R,
}

impl<R: CodeCategoryRepository> PatchCodeCategoryService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> PatchCodeCategoryUseCase for PatchCodeCategoryService<R>
where
    R: CodeCategoryRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        data: PatchCodeCategoryData,
    ) -> Result<CodeCategory, CodeCategoryError> {
        let changes = CodeCategoryChanges::try_from(data)?;

        if let Some(parent) = changes.new_parent() {
            if parent == id {
                return Err(invalid_parent("a category cannot be its own parent"));
            }

            let all = self.repository.list().await?;
            if !all.iter().any(|c| c.id == parent) {
                return Err(invalid_parent("parent category does not exist"));
            }
            if creates_cycle(id, parent, &all) {
                return Err(invalid_parent("parent would create a cycle"));
            }
        }

        Ok(self.repository.update(id, changes).await?)
    }
}

pub struct DeleteCodeCategoryService<R>
where
    R: CodeCategoryRepository,
{
    repository: R,
}

impl<R: CodeCategoryRepository> DeleteCodeCategoryService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteCodeCategoryUseCase for DeleteCodeCategoryService<R>
where
    R: CodeCategoryRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), CodeCategoryError> {
        match self.repository.delete(id).await? {
            true => Ok(()),
            false => Err(CodeCategoryError::NotFound),
        }
    }
}

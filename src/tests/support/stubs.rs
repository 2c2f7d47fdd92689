//! Inert use cases for the default `TestAppStateBuilder`. Reads come back
//! empty or `NotFound`; writes fail as `NotFound` so a test that forgot to
//! install a real use case shows up as a 404 rather than a false success.

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::ports::incoming::use_cases::{
    LoginAdminCommand, LoginAdminError, LoginAdminResult, LoginAdminUseCase,
};
use crate::blog_post::application::domain::entities::{
    BlogPost, CreateBlogPostData, PatchBlogPostData,
};
use crate::blog_post::application::ports::incoming::use_cases::{
    BlogPostError, CreateBlogPostUseCase, DeleteBlogPostUseCase, GetBlogPostBySlugUseCase,
    GetBlogPostsUseCase, PatchBlogPostUseCase, PublishBlogPostUseCase, UnpublishBlogPostUseCase,
};
use crate::code_category::application::domain::entities::{
    CodeCategory, CreateCodeCategoryData, PatchCodeCategoryData,
};
use crate::code_category::application::domain::hierarchy::CodeCategoryNode;
use crate::code_category::application::ports::incoming::use_cases::{
    CodeCategoryError, CreateCodeCategoryUseCase, DeleteCodeCategoryUseCase,
    GetCodeCategoriesUseCase, GetCodeCategoryHierarchyUseCase, PatchCodeCategoryUseCase,
};
use crate::experience::application::domain::entities::{
    CreateExperienceData, Experience, PatchExperienceData,
};
use crate::experience::application::ports::incoming::use_cases::{
    CreateExperienceUseCase, DeleteExperienceUseCase, ExperienceError, GetExperiencesUseCase,
    PatchExperienceUseCase,
};
use crate::like::application::domain::entities::LikeResult;
use crate::like::application::ports::incoming::use_cases::{
    LikeBlogPostUseCase, LikeError, LikeMonologueUseCase,
};
use crate::link_preview::application::domain::entities::PreviewMetadata;
use crate::link_preview::application::ports::incoming::use_cases::GenerateLinkPreviewUseCase;
use crate::link_preview::application::ports::outgoing::LinkPreviewError;
use crate::monologue::application::domain::entities::{
    CreateMonologueData, Monologue, MonologueFilter, MonologuePage, PatchMonologueData,
};
use crate::monologue::application::ports::incoming::use_cases::{
    CreateMonologueUseCase, DeleteMonologueUseCase, GetMonologueUseCase, GetMonologuesUseCase,
    MonologueError, PatchMonologueUseCase, PublishMonologueUseCase, UnpublishMonologueUseCase,
};
use crate::profile::application::domain::entities::{CreateProfileData, PatchProfileData, Profile};
use crate::profile::application::ports::incoming::use_cases::{
    CreateProfileUseCase, DeleteProfileUseCase, GetProfileUseCase, PatchProfileUseCase,
    ProfileError,
};
use crate::related_content::application::domain::matcher::RelatedContent;
use crate::related_content::application::ports::incoming::use_cases::{
    GetRelatedContentUseCase, RelatedContentError,
};
use crate::shared::visibility::Visibility;
use crate::skill::application::domain::entities::{
    CreateSkillData, PatchSkillData, Skill, SkillCategory,
};
use crate::skill::application::ports::incoming::use_cases::{
    CreateSkillUseCase, DeleteSkillUseCase, GetSkillsByCategoryUseCase, GetSkillsUseCase,
    PatchSkillUseCase, SkillError,
};

#[derive(Default, Clone)]
pub struct StubLoginAdminUseCase;

#[async_trait]
impl LoginAdminUseCase for StubLoginAdminUseCase {
    async fn execute(
        &self,
        _command: LoginAdminCommand,
    ) -> Result<LoginAdminResult, LoginAdminError> {
        Err(LoginAdminError::InvalidCredentials)
    }
}

//
// ──────────────────────────────────────────────────────────
// Profile
// ──────────────────────────────────────────────────────────
//

#[derive(Default, Clone)]
pub struct StubProfileUseCase;

#[async_trait]
impl GetProfileUseCase for StubProfileUseCase {
    async fn execute(&self) -> Result<Profile, ProfileError> {
        Err(ProfileError::NotFound)
    }
}

#[async_trait]
impl CreateProfileUseCase for StubProfileUseCase {
    async fn execute(&self, _data: CreateProfileData) -> Result<Profile, ProfileError> {
        Err(ProfileError::RepositoryError("not used in this test".to_string()))
    }
}

#[async_trait]
impl PatchProfileUseCase for StubProfileUseCase {
    async fn execute(&self, _id: Uuid, _data: PatchProfileData) -> Result<Profile, ProfileError> {
        Err(ProfileError::NotFound)
    }
}

#[async_trait]
impl DeleteProfileUseCase for StubProfileUseCase {
    async fn execute(&self, _id: Uuid) -> Result<(), ProfileError> {
        Err(ProfileError::NotFound)
    }
}

//
// ──────────────────────────────────────────────────────────
// Skills
// ──────────────────────────────────────────────────────────
//

#[derive(Default, Clone)]
pub struct StubSkillUseCase;

#[async_trait]
impl GetSkillsUseCase for StubSkillUseCase {
    async fn execute(&self) -> Result<Vec<Skill>, SkillError> {
        Ok(vec![])
    }
}

#[async_trait]
impl GetSkillsByCategoryUseCase for StubSkillUseCase {
    async fn execute(&self) -> Result<Vec<SkillCategory>, SkillError> {
        Ok(vec![])
    }
}

#[async_trait]
impl CreateSkillUseCase for StubSkillUseCase {
    async fn execute(&self, _data: CreateSkillData) -> Result<Skill, SkillError> {
        Err(SkillError::RepositoryError("not used in this test".to_string()))
    }
}

#[async_trait]
impl PatchSkillUseCase for StubSkillUseCase {
    async fn execute(&self, _id: Uuid, _data: PatchSkillData) -> Result<Skill, SkillError> {
        Err(SkillError::NotFound)
    }
}

#[async_trait]
impl DeleteSkillUseCase for StubSkillUseCase {
    async fn execute(&self, _id: Uuid) -> Result<(), SkillError> {
        Err(SkillError::NotFound)
    }
}

//
// ──────────────────────────────────────────────────────────
// Experiences
// ──────────────────────────────────────────────────────────
//

#[derive(Default, Clone)]
pub struct StubExperienceUseCase;

#[async_trait]
impl GetExperiencesUseCase for StubExperienceUseCase {
    async fn execute(&self) -> Result<Vec<Experience>, ExperienceError> {
        Ok(vec![])
    }
}

#[async_trait]
impl CreateExperienceUseCase for StubExperienceUseCase {
    async fn execute(&self, _data: CreateExperienceData) -> Result<Experience, ExperienceError> {
        Err(ExperienceError::RepositoryError(
            "not used in this test".to_string(),
        ))
    }
}

#[async_trait]
impl PatchExperienceUseCase for StubExperienceUseCase {
    async fn execute(
        &self,
        _id: Uuid,
        _data: PatchExperienceData,
    ) -> Result<Experience, ExperienceError> {
        Err(ExperienceError::NotFound)
    }
}

#[async_trait]
impl DeleteExperienceUseCase for StubExperienceUseCase {
    async fn execute(&self, _id: Uuid) -> Result<(), ExperienceError> {
        Err(ExperienceError::NotFound)
    }
}

//
// ──────────────────────────────────────────────────────────
// Code categories
// ──────────────────────────────────────────────────────────
//

#[derive(Default, Clone)]
pub struct StubCodeCategoryUseCase;

#[async_trait]
impl GetCodeCategoriesUseCase for StubCodeCategoryUseCase {
    async fn execute(&self) -> Result<Vec<CodeCategory>, CodeCategoryError> {
        Ok(vec![])
    }
}

#[async_trait]
impl GetCodeCategoryHierarchyUseCase for StubCodeCategoryUseCase {
    async fn execute(&self) -> Result<Vec<CodeCategoryNode>, CodeCategoryError> {
        Ok(vec![])
    }
}

#[async_trait]
impl CreateCodeCategoryUseCase for StubCodeCategoryUseCase {
    async fn execute(
        &self,
        _data: CreateCodeCategoryData,
    ) -> Result<CodeCategory, CodeCategoryError> {
        Err(CodeCategoryError::RepositoryError(
            "not used in this test".to_string(),
        ))
    }
}

#[async_trait]
impl PatchCodeCategoryUseCase for StubCodeCategoryUseCase {
    async fn execute(
        &self,
        _id: Uuid,
        _data: PatchCodeCategoryData,
    ) -> Result<CodeCategory, CodeCategoryError> {
        Err(CodeCategoryError::NotFound)
    }
}

#[async_trait]
impl DeleteCodeCategoryUseCase for StubCodeCategoryUseCase {
    async fn execute(&self, _id: Uuid) -> Result<(), CodeCategoryError> {
        Err(CodeCategoryError::NotFound)
    }
}

//
// ──────────────────────────────────────────────────────────
// Blog posts
// ──────────────────────────────────────────────────────────
//

#[derive(Default, Clone)]
pub struct StubBlogPostUseCase;

#[async_trait]
impl GetBlogPostsUseCase for StubBlogPostUseCase {
    async fn execute(&self, _visibility: Visibility) -> Result<Vec<BlogPost>, BlogPostError> {
        Ok(vec![])
    }
}

#[async_trait]
impl GetBlogPostBySlugUseCase for StubBlogPostUseCase {
    async fn execute(&self, _slug: String) -> Result<BlogPost, BlogPostError> {
        Err(BlogPostError::NotFound)
    }
}

#[async_trait]
impl CreateBlogPostUseCase for StubBlogPostUseCase {
    async fn execute(&self, _data: CreateBlogPostData) -> Result<BlogPost, BlogPostError> {
        Err(BlogPostError::RepositoryError(
            "not used in this test".to_string(),
        ))
    }
}

#[async_trait]
impl PatchBlogPostUseCase for StubBlogPostUseCase {
    async fn execute(
        &self,
        _id: Uuid,
        _data: PatchBlogPostData,
    ) -> Result<BlogPost, BlogPostError> {
        Err(BlogPostError::NotFound)
    }
}

#[async_trait]
impl DeleteBlogPostUseCase for StubBlogPostUseCase {
    async fn execute(&self, _id: Uuid) -> Result<(), BlogPostError> {
        Err(BlogPostError::NotFound)
    }
}

#[async_trait]
impl PublishBlogPostUseCase for StubBlogPostUseCase {
    async fn execute(&self, _id: Uuid) -> Result<BlogPost, BlogPostError> {
        Err(BlogPostError::NotFound)
    }
}

#[async_trait]
impl UnpublishBlogPostUseCase for StubBlogPostUseCase {
    async fn execute(&self, _id: Uuid) -> Result<BlogPost, BlogPostError> {
        Err(BlogPostError::NotFound)
    }
}

//
// ──────────────────────────────────────────────────────────
// Monologues
// ──────────────────────────────────────────────────────────
//

#[derive(Default, Clone)]
pub struct StubMonologueUseCase;

#[async_trait]
impl GetMonologuesUseCase for StubMonologueUseCase {
    async fn execute(
        &self,
        filter: MonologueFilter,
        _visibility: Visibility,
    ) -> Result<MonologuePage, MonologueError> {
        Ok(MonologuePage::new(vec![], 0, &filter))
    }
}

#[async_trait]
impl GetMonologueUseCase for StubMonologueUseCase {
    async fn execute(
        &self,
        _id: Uuid,
        _visibility: Visibility,
    ) -> Result<Monologue, MonologueError> {
        Err(MonologueError::NotFound)
    }
}

#[async_trait]
impl CreateMonologueUseCase for StubMonologueUseCase {
    async fn execute(&self, _data: CreateMonologueData) -> Result<Monologue, MonologueError> {
        Err(MonologueError::RepositoryError(
            "not used in this test".to_string(),
        ))
    }
}

#[async_trait]
impl PatchMonologueUseCase for StubMonologueUseCase {
    async fn execute(
        &self,
        _id: Uuid,
        _data: PatchMonologueData,
    ) -> Result<Monologue, MonologueError> {
        Err(MonologueError::NotFound)
    }
}

#[async_trait]
impl DeleteMonologueUseCase for StubMonologueUseCase {
    async fn execute(&self, _id: Uuid) -> Result<(), MonologueError> {
        Err(MonologueError::NotFound)
    }
}

#[async_trait]
impl PublishMonologueUseCase for StubMonologueUseCase {
    async fn execute(&self, _id: Uuid) -> Result<Monologue, MonologueError> {
        Err(MonologueError::NotFound)
    }
}

#[async_trait]
impl UnpublishMonologueUseCase for StubMonologueUseCase {
    async fn execute(&self, _id: Uuid) -> Result<Monologue, MonologueError> {
        Err(MonologueError::NotFound)
    }
}

//
// ──────────────────────────────────────────────────────────
// Previews, likes, related content
// ──────────────────────────────────────────────────────────
//

#[derive(Default, Clone)]
pub struct StubGenerateLinkPreviewUseCase;

#[async_trait]
impl GenerateLinkPreviewUseCase for StubGenerateLinkPreviewUseCase {
    async fn execute(&self, _url: String) -> Result<PreviewMetadata, LinkPreviewError> {
        Err(LinkPreviewError::GenerationFailed(
            "not used in this test".to_string(),
        ))
    }
}

#[derive(Default, Clone)]
pub struct StubLikeUseCase;

#[async_trait]
impl LikeBlogPostUseCase for StubLikeUseCase {
    async fn execute(&self, _raw_id: String) -> Result<LikeResult, LikeError> {
        Err(LikeError::NotFound)
    }
}

#[async_trait]
impl LikeMonologueUseCase for StubLikeUseCase {
    async fn execute(&self, _raw_id: String) -> Result<LikeResult, LikeError> {
        Err(LikeError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubRelatedContentUseCase;

#[async_trait]
impl GetRelatedContentUseCase for StubRelatedContentUseCase {
    async fn execute(
        &self,
        _monologue_id: Uuid,
        _limit: Option<usize>,
    ) -> Result<Vec<RelatedContent>, RelatedContentError> {
        Ok(vec![])
    }
}

use std::sync::Arc;

use actix_web::web;

use crate::auth::application::ports::incoming::use_cases::LoginAdminUseCase;
use crate::blog_post::application::ports::incoming::use_cases::{
    CreateBlogPostUseCase, DeleteBlogPostUseCase, GetBlogPostBySlugUseCase, GetBlogPostsUseCase,
    PatchBlogPostUseCase,
};
use crate::blog_post::application::service::{
    CreateBlogPostService, DeleteBlogPostService, GetBlogPostBySlugService, GetBlogPostsService,
    PatchBlogPostService, PublishBlogPostService, UnpublishBlogPostService,
};
use crate::blog_post::application::BlogPostUseCases;
use crate::code_category::application::ports::incoming::use_cases::{
    CreateCodeCategoryUseCase, DeleteCodeCategoryUseCase, GetCodeCategoriesUseCase,
    GetCodeCategoryHierarchyUseCase, PatchCodeCategoryUseCase,
};
use crate::code_category::application::CodeCategoryUseCases;
use crate::experience::application::ports::incoming::use_cases::{
    CreateExperienceUseCase, DeleteExperienceUseCase, GetExperiencesUseCase,
    PatchExperienceUseCase,
};
use crate::experience::application::ExperienceUseCases;
use crate::like::application::service::{LikeBlogPostService, LikeMonologueService};
use crate::like::application::LikeUseCases;
use crate::link_preview::adapter::outgoing::PlaceholderPreviewGenerator;
use crate::link_preview::application::ports::incoming::use_cases::GenerateLinkPreviewUseCase;
use crate::link_preview::application::service::{GenerateLinkPreviewService, PreviewRefresher};
use crate::link_preview::application::LinkPreviewUseCases;
use crate::monologue::application::ports::incoming::use_cases::GetMonologuesUseCase;
use crate::monologue::application::service::{
    CreateMonologueService, DeleteMonologueService, GetMonologueService, GetMonologuesService,
    PatchMonologueService, PublishMonologueService, UnpublishMonologueService,
};
use crate::monologue::application::MonologueUseCases;
use crate::profile::application::ports::incoming::use_cases::{
    DeleteProfileUseCase, GetProfileUseCase, PatchProfileUseCase,
};
use crate::profile::application::ProfileUseCases;
use crate::related_content::application::service::RelatedContentService;
use crate::related_content::application::RelatedContentUseCases;
use crate::shared::clock::Clock;
use crate::skill::application::ports::incoming::use_cases::{
    CreateSkillUseCase, GetSkillsByCategoryUseCase, GetSkillsUseCase, PatchSkillUseCase,
};
use crate::skill::application::SkillUseCases;
use crate::tests::support::fixed_clock::FixedClock;
use crate::tests::support::in_memory_store::InMemoryStore;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Every use case starts as an inert stub; tests swap in what they exercise.
pub struct TestAppStateBuilder {
    login_admin: Arc<dyn LoginAdminUseCase + Send + Sync>,
    profile: ProfileUseCases,
    skill: SkillUseCases,
    experience: ExperienceUseCases,
    code_category: CodeCategoryUseCases,
    blog_post: BlogPostUseCases,
    monologue: MonologueUseCases,
    link_preview: LinkPreviewUseCases,
    like: LikeUseCases,
    related_content: RelatedContentUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let profile = Arc::new(StubProfileUseCase);
        let skill = Arc::new(StubSkillUseCase);
        let experience = Arc::new(StubExperienceUseCase);
        let code_category = Arc::new(StubCodeCategoryUseCase);
        let blog_post = Arc::new(StubBlogPostUseCase);
        let monologue = Arc::new(StubMonologueUseCase);
        let like = Arc::new(StubLikeUseCase);

        Self {
            login_admin: Arc::new(StubLoginAdminUseCase),
            profile: ProfileUseCases {
                get_default: profile.clone(),
                create: profile.clone(),
                patch: profile.clone(),
                delete: profile,
            },
            skill: SkillUseCases {
                get_list: skill.clone(),
                get_by_category: skill.clone(),
                create: skill.clone(),
                patch: skill.clone(),
                delete: skill,
            },
            experience: ExperienceUseCases {
                get_list: experience.clone(),
                create: experience.clone(),
                patch: experience.clone(),
                delete: experience,
            },
            code_category: CodeCategoryUseCases {
                get_list: code_category.clone(),
                get_hierarchy: code_category.clone(),
                create: code_category.clone(),
                patch: code_category.clone(),
                delete: code_category,
            },
            blog_post: BlogPostUseCases {
                get_list: blog_post.clone(),
                get_by_slug: blog_post.clone(),
                create: blog_post.clone(),
                patch: blog_post.clone(),
                delete: blog_post.clone(),
                publish: blog_post.clone(),
                unpublish: blog_post,
            },
            monologue: MonologueUseCases {
                get_list: monologue.clone(),
                get_single: monologue.clone(),
                create: monologue.clone(),
                patch: monologue.clone(),
                delete: monologue.clone(),
                publish: monologue.clone(),
                unpublish: monologue,
            },
            link_preview: LinkPreviewUseCases {
                generate: Arc::new(StubGenerateLinkPreviewUseCase),
            },
            like: LikeUseCases {
                blog_post: like.clone(),
                monologue: like,
            },
            related_content: RelatedContentUseCases {
                get: Arc::new(StubRelatedContentUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    /// Wires the real blog post, monologue, like and related-content
    /// services over `store`, with `clock` as their notion of now.
    pub fn with_store(mut self, store: InMemoryStore, clock: Arc<FixedClock>) -> Self {
        let clock: Arc<dyn Clock> = clock;
        let previews = PreviewRefresher::new(
            Arc::new(PlaceholderPreviewGenerator),
            Arc::new(store.clone()),
        );

        self.blog_post = BlogPostUseCases {
            get_list: Arc::new(GetBlogPostsService::new(store.clone())),
            get_by_slug: Arc::new(GetBlogPostBySlugService::new(store.clone())),
            create: Arc::new(CreateBlogPostService::new(store.clone(), clock.clone())),
            patch: Arc::new(PatchBlogPostService::new(store.clone(), clock.clone())),
            delete: Arc::new(DeleteBlogPostService::new(store.clone())),
            publish: Arc::new(PublishBlogPostService::new(store.clone(), clock.clone())),
            unpublish: Arc::new(UnpublishBlogPostService::new(store.clone())),
        };

        self.monologue = MonologueUseCases {
            get_list: Arc::new(GetMonologuesService::new(store.clone())),
            get_single: Arc::new(GetMonologueService::new(store.clone())),
            create: Arc::new(CreateMonologueService::new(
                store.clone(),
                store.clone(),
                previews.clone(),
                clock.clone(),
            )),
            patch: Arc::new(PatchMonologueService::new(
                store.clone(),
                store.clone(),
                previews.clone(),
                clock.clone(),
            )),
            delete: Arc::new(DeleteMonologueService::new(store.clone(), previews)),
            publish: Arc::new(PublishMonologueService::new(
                store.clone(),
                store.clone(),
                clock,
            )),
            unpublish: Arc::new(UnpublishMonologueService::new(store.clone(), store.clone())),
        };

        self.like = LikeUseCases {
            blog_post: Arc::new(LikeBlogPostService::new(store.clone())),
            monologue: Arc::new(LikeMonologueService::new(store.clone())),
        };

        self.related_content = RelatedContentUseCases {
            get: Arc::new(RelatedContentService::new(store.clone(), store)),
        };

        self.link_preview = LinkPreviewUseCases {
            generate: Arc::new(GenerateLinkPreviewService::new(PlaceholderPreviewGenerator)),
        };

        self
    }

    pub fn with_login_admin(mut self, uc: impl LoginAdminUseCase + 'static) -> Self {
        self.login_admin = Arc::new(uc);
        self
    }

    pub fn with_get_profile(mut self, uc: impl GetProfileUseCase + 'static) -> Self {
        self.profile.get_default = Arc::new(uc);
        self
    }

    pub fn with_patch_profile(mut self, uc: impl PatchProfileUseCase + 'static) -> Self {
        self.profile.patch = Arc::new(uc);
        self
    }

    pub fn with_delete_profile(mut self, uc: impl DeleteProfileUseCase + 'static) -> Self {
        self.profile.delete = Arc::new(uc);
        self
    }

    pub fn with_get_skills(mut self, uc: impl GetSkillsUseCase + 'static) -> Self {
        self.skill.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_skills_by_category(
        mut self,
        uc: impl GetSkillsByCategoryUseCase + 'static,
    ) -> Self {
        self.skill.get_by_category = Arc::new(uc);
        self
    }

    pub fn with_create_skill(mut self, uc: impl CreateSkillUseCase + 'static) -> Self {
        self.skill.create = Arc::new(uc);
        self
    }

    pub fn with_patch_skill(mut self, uc: impl PatchSkillUseCase + 'static) -> Self {
        self.skill.patch = Arc::new(uc);
        self
    }

    pub fn with_get_experiences(mut self, uc: impl GetExperiencesUseCase + 'static) -> Self {
        self.experience.get_list = Arc::new(uc);
        self
    }

    pub fn with_create_experience(mut self, uc: impl CreateExperienceUseCase + 'static) -> Self {
        self.experience.create = Arc::new(uc);
        self
    }

    pub fn with_patch_experience(mut self, uc: impl PatchExperienceUseCase + 'static) -> Self {
        self.experience.patch = Arc::new(uc);
        self
    }

    pub fn with_delete_experience(mut self, uc: impl DeleteExperienceUseCase + 'static) -> Self {
        self.experience.delete = Arc::new(uc);
        self
    }

    pub fn with_get_code_categories(
        mut self,
        uc: impl GetCodeCategoriesUseCase + 'static,
    ) -> Self {
        self.code_category.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_code_category_hierarchy(
        mut self,
        uc: impl GetCodeCategoryHierarchyUseCase + 'static,
    ) -> Self {
        self.code_category.get_hierarchy = Arc::new(uc);
        self
    }

    pub fn with_create_code_category(
        mut self,
        uc: impl CreateCodeCategoryUseCase + 'static,
    ) -> Self {
        self.code_category.create = Arc::new(uc);
        self
    }

    pub fn with_patch_code_category(
        mut self,
        uc: impl PatchCodeCategoryUseCase + 'static,
    ) -> Self {
        self.code_category.patch = Arc::new(uc);
        self
    }

    pub fn with_delete_code_category(
        mut self,
        uc: impl DeleteCodeCategoryUseCase + 'static,
    ) -> Self {
        self.code_category.delete = Arc::new(uc);
        self
    }

    pub fn with_get_blog_posts(mut self, uc: impl GetBlogPostsUseCase + 'static) -> Self {
        self.blog_post.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_blog_post_by_slug(
        mut self,
        uc: impl GetBlogPostBySlugUseCase + 'static,
    ) -> Self {
        self.blog_post.get_by_slug = Arc::new(uc);
        self
    }

    pub fn with_create_blog_post(mut self, uc: impl CreateBlogPostUseCase + 'static) -> Self {
        self.blog_post.create = Arc::new(uc);
        self
    }

    pub fn with_patch_blog_post(mut self, uc: impl PatchBlogPostUseCase + 'static) -> Self {
        self.blog_post.patch = Arc::new(uc);
        self
    }

    pub fn with_delete_blog_post(mut self, uc: impl DeleteBlogPostUseCase + 'static) -> Self {
        self.blog_post.delete = Arc::new(uc);
        self
    }

    pub fn with_get_monologues(mut self, uc: impl GetMonologuesUseCase + 'static) -> Self {
        self.monologue.get_list = Arc::new(uc);
        self
    }

    pub fn with_generate_link_preview(
        mut self,
        uc: impl GenerateLinkPreviewUseCase + 'static,
    ) -> Self {
        self.link_preview.generate = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            login_admin: self.login_admin,
            profile: self.profile,
            skill: self.skill,
            experience: self.experience,
            code_category: self.code_category,
            blog_post: self.blog_post,
            monologue: self.monologue,
            link_preview: self.link_preview,
            like: self.like,
            related_content: self.related_content,
        })
    }
}

pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::blog_post;
pub use modules::code_category;
pub use modules::experience;
pub use modules::like;
pub use modules::link_preview;
pub use modules::monologue;
pub use modules::profile;
pub use modules::related_content;
pub use modules::skill;

use crate::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::auth::adapter::outgoing::security::Argon2PasswordVerifier;
use crate::auth::application::ports::incoming::use_cases::LoginAdminUseCase;
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::auth::application::service::LoginAdminService;

use crate::blog_post::adapter::outgoing::{BlogPostQueryPostgres, BlogPostRepositoryPostgres};
use crate::blog_post::application::service::{
    CreateBlogPostService, DeleteBlogPostService, GetBlogPostBySlugService, GetBlogPostsService,
    PatchBlogPostService, PublishBlogPostService, UnpublishBlogPostService,
};
use crate::blog_post::application::BlogPostUseCases;

use crate::code_category::adapter::outgoing::CodeCategoryRepositoryPostgres;
use crate::code_category::application::service::{
    CreateCodeCategoryService, DeleteCodeCategoryService, GetCodeCategoriesService,
    GetCodeCategoryHierarchyService, PatchCodeCategoryService,
};
use crate::code_category::application::CodeCategoryUseCases;

use crate::experience::adapter::outgoing::ExperienceRepositoryPostgres;
use crate::experience::application::service::{
    CreateExperienceService, DeleteExperienceService, GetExperiencesService,
    PatchExperienceService,
};
use crate::experience::application::ExperienceUseCases;

use crate::like::adapter::outgoing::LikeCounterPostgres;
use crate::like::application::service::{LikeBlogPostService, LikeMonologueService};
use crate::like::application::LikeUseCases;

use crate::link_preview::adapter::outgoing::{
    PlaceholderPreviewGenerator, UrlPreviewRepositoryPostgres,
};
use crate::link_preview::application::service::{GenerateLinkPreviewService, PreviewRefresher};
use crate::link_preview::application::LinkPreviewUseCases;

use crate::monologue::adapter::outgoing::{MonologueQueryPostgres, MonologueRepositoryPostgres};
use crate::monologue::application::service::{
    CreateMonologueService, DeleteMonologueService, GetMonologueService, GetMonologuesService,
    PatchMonologueService, PublishMonologueService, UnpublishMonologueService,
};
use crate::monologue::application::MonologueUseCases;

use crate::profile::adapter::outgoing::ProfileRepositoryPostgres;
use crate::profile::application::service::{
    CreateProfileService, DeleteProfileService, GetProfileService, PatchProfileService,
};
use crate::profile::application::ProfileUseCases;

use crate::related_content::application::service::RelatedContentService;
use crate::related_content::application::RelatedContentUseCases;

use crate::skill::adapter::outgoing::SkillRepositoryPostgres;
use crate::skill::application::service::{
    CreateSkillService, DeleteSkillService, GetSkillsByCategoryService, GetSkillsService,
    PatchSkillService,
};
use crate::skill::application::SkillUseCases;

use crate::config::AppConfig;
use crate::shared::api::custom_json_config;
use crate::shared::clock::{Clock, SystemClock};

use actix_web::{middleware::Logger, web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::io;
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub login_admin: Arc<dyn LoginAdminUseCase + Send + Sync>,
    pub profile: ProfileUseCases,
    pub skill: SkillUseCases,
    pub experience: ExperienceUseCases,
    pub code_category: CodeCategoryUseCases,
    pub blog_post: BlogPostUseCases,
    pub monologue: MonologueUseCases,
    pub link_preview: LinkPreviewUseCases,
    pub like: LikeUseCases,
    pub related_content: RelatedContentUseCases,
}

#[cfg(not(tarpaulin_include))]
fn build_state(
    db: &Arc<DatabaseConnection>,
    config: &AppConfig,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
) -> AppState {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let profile_repo = ProfileRepositoryPostgres::new(Arc::clone(db));
    let skill_repo = SkillRepositoryPostgres::new(Arc::clone(db));
    let experience_repo = ExperienceRepositoryPostgres::new(Arc::clone(db));
    let code_category_repo = CodeCategoryRepositoryPostgres::new(Arc::clone(db));
    let blog_post_repo = BlogPostRepositoryPostgres::new(Arc::clone(db));
    let blog_post_query = BlogPostQueryPostgres::new(Arc::clone(db));
    let monologue_repo = MonologueRepositoryPostgres::new(Arc::clone(db));
    let monologue_query = MonologueQueryPostgres::new(Arc::clone(db));
    let like_counter = LikeCounterPostgres::new(Arc::clone(db));

    let previews = PreviewRefresher::new(
        Arc::new(PlaceholderPreviewGenerator),
        Arc::new(UrlPreviewRepositoryPostgres::new(Arc::clone(db))),
    );

    AppState {
        login_admin: Arc::new(LoginAdminService::new(
            Argon2PasswordVerifier::new(),
            tokens,
            config.admin.clone(),
        )),
        profile: ProfileUseCases {
            get_default: Arc::new(GetProfileService::new(profile_repo.clone())),
            create: Arc::new(CreateProfileService::new(profile_repo.clone())),
            patch: Arc::new(PatchProfileService::new(profile_repo.clone())),
            delete: Arc::new(DeleteProfileService::new(profile_repo)),
        },
        skill: SkillUseCases {
            get_list: Arc::new(GetSkillsService::new(skill_repo.clone())),
            get_by_category: Arc::new(GetSkillsByCategoryService::new(skill_repo.clone())),
            create: Arc::new(CreateSkillService::new(skill_repo.clone())),
            patch: Arc::new(PatchSkillService::new(skill_repo.clone())),
            delete: Arc::new(DeleteSkillService::new(skill_repo)),
        },
        experience: ExperienceUseCases {
            get_list: Arc::new(GetExperiencesService::new(experience_repo.clone())),
            create: Arc::new(CreateExperienceService::new(experience_repo.clone())),
            patch: Arc::new(PatchExperienceService::new(experience_repo.clone())),
            delete: Arc::new(DeleteExperienceService::new(experience_repo)),
        },
        code_category: CodeCategoryUseCases {
            get_list: Arc::new(GetCodeCategoriesService::new(code_category_repo.clone())),
            get_hierarchy: Arc::new(GetCodeCategoryHierarchyService::new(
                code_category_repo.clone(),
            )),
            create: Arc::new(CreateCodeCategoryService::new(code_category_repo.clone())),
            patch: Arc::new(PatchCodeCategoryService::new(code_category_repo.clone())),
            delete: Arc::new(DeleteCodeCategoryService::new(code_category_repo)),
        },
        blog_post: BlogPostUseCases {
            get_list: Arc::new(GetBlogPostsService::new(blog_post_query.clone())),
            get_by_slug: Arc::new(GetBlogPostBySlugService::new(blog_post_query.clone())),
            create: Arc::new(CreateBlogPostService::new(blog_post_repo.clone(), clock.clone())),
            patch: Arc::new(PatchBlogPostService::new(blog_post_repo.clone(), clock.clone())),
            delete: Arc::new(DeleteBlogPostService::new(blog_post_repo.clone())),
            publish: Arc::new(PublishBlogPostService::new(blog_post_repo.clone(), clock.clone())),
            unpublish: Arc::new(UnpublishBlogPostService::new(blog_post_repo)),
        },
        monologue: MonologueUseCases {
            get_list: Arc::new(GetMonologuesService::new(monologue_query.clone())),
            get_single: Arc::new(GetMonologueService::new(monologue_query.clone())),
            create: Arc::new(CreateMonologueService::new(
                monologue_repo.clone(),
                monologue_query.clone(),
                previews.clone(),
                clock.clone(),
            )),
            patch: Arc::new(PatchMonologueService::new(
                monologue_repo.clone(),
                monologue_query.clone(),
                previews.clone(),
                clock.clone(),
            )),
            delete: Arc::new(DeleteMonologueService::new(monologue_repo.clone(), previews)),
            publish: Arc::new(PublishMonologueService::new(
                monologue_repo.clone(),
                monologue_query.clone(),
                clock,
            )),
            unpublish: Arc::new(UnpublishMonologueService::new(
                monologue_repo,
                monologue_query.clone(),
            )),
        },
        link_preview: LinkPreviewUseCases {
            generate: Arc::new(GenerateLinkPreviewService::new(PlaceholderPreviewGenerator)),
        },
        like: LikeUseCases {
            blog_post: Arc::new(LikeBlogPostService::new(like_counter.clone())),
            monologue: Arc::new(LikeMonologueService::new(like_counter)),
        },
        related_content: RelatedContentUseCases {
            get: Arc::new(RelatedContentService::new(monologue_query, blog_post_query)),
        },
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::load().map_err(|e| {
        error!("Invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
    })?;

    let mut opt = ConnectOptions::new(config.database.url.clone());
    opt.max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt).await.map_err(|e| {
        error!("Failed to connect to database: {}", e);
        io::Error::new(io::ErrorKind::ConnectionRefused, e.to_string())
    })?;

    Migrator::up(&conn, None).await.map_err(|e| {
        error!("Migrations failed: {}", e);
        io::Error::new(io::ErrorKind::Other, e.to_string())
    })?;

    let db_arc = Arc::new(conn);

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(config.jwt.clone()));

    let state = build_state(&db_arc, &config, Arc::clone(&token_provider_arc));

    let server_url = config.server_addr();
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(custom_json_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::blog_post::adapter::incoming::web::routes as blog_post_routes;
    use crate::code_category::adapter::incoming::web::routes as code_category_routes;
    use crate::experience::adapter::incoming::web::routes as experience_routes;
    use crate::monologue::adapter::incoming::web::routes as monologue_routes;
    use crate::profile::adapter::incoming::web::routes as profile_routes;
    use crate::skill::adapter::incoming::web::routes as skill_routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_admin_handler);
    // Profile
    cfg.service(profile_routes::get_profile_handler);
    cfg.service(profile_routes::create_profile_handler);
    cfg.service(profile_routes::patch_profile_handler);
    cfg.service(profile_routes::delete_profile_handler);
    // Skills
    cfg.service(skill_routes::get_skills_by_category_handler);
    cfg.service(skill_routes::get_skills_handler);
    cfg.service(skill_routes::create_skill_handler);
    cfg.service(skill_routes::patch_skill_handler);
    cfg.service(skill_routes::delete_skill_handler);
    // Experiences
    cfg.service(experience_routes::get_experiences_handler);
    cfg.service(experience_routes::create_experience_handler);
    cfg.service(experience_routes::patch_experience_handler);
    cfg.service(experience_routes::delete_experience_handler);
    // Code categories
    cfg.service(code_category_routes::get_code_category_hierarchy_handler);
    cfg.service(code_category_routes::get_code_categories_handler);
    cfg.service(code_category_routes::create_code_category_handler);
    cfg.service(code_category_routes::patch_code_category_handler);
    cfg.service(code_category_routes::delete_code_category_handler);
    // Blog posts
    cfg.service(blog_post_routes::get_admin_blog_posts_handler);
    cfg.service(blog_post_routes::get_blog_posts_handler);
    cfg.service(blog_post_routes::get_blog_post_by_slug_handler);
    cfg.service(blog_post_routes::create_blog_post_handler);
    cfg.service(blog_post_routes::patch_blog_post_handler);
    cfg.service(blog_post_routes::delete_blog_post_handler);
    cfg.service(blog_post_routes::publish_blog_post_handler);
    cfg.service(blog_post_routes::unpublish_blog_post_handler);
    cfg.service(crate::like::adapter::incoming::web::routes::like_blog_post_handler);
    // Monologues
    cfg.service(monologue_routes::get_admin_monologues_handler);
    cfg.service(monologue_routes::get_monologues_handler);
    cfg.service(
        crate::related_content::adapter::incoming::web::routes::get_related_content_handler,
    );
    cfg.service(monologue_routes::get_monologue_handler);
    cfg.service(monologue_routes::create_monologue_handler);
    cfg.service(monologue_routes::patch_monologue_handler);
    cfg.service(monologue_routes::delete_monologue_handler);
    cfg.service(monologue_routes::publish_monologue_handler);
    cfg.service(monologue_routes::unpublish_monologue_handler);
    cfg.service(crate::like::adapter::incoming::web::routes::like_monologue_handler);
    // URL previews
    cfg.service(crate::link_preview::adapter::incoming::web::routes::generate_link_preview_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}

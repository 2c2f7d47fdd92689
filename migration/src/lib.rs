pub use sea_orm_migration::prelude::*;

mod m20250801_000001_create_profiles_table;
mod m20250801_000002_create_skills_table;
mod m20250801_000003_create_experiences_table;
mod m20250801_000004_create_code_categories_table;
mod m20250801_000005_create_monologues_table;
mod m20250801_000006_create_url_previews_table;
mod m20250801_000007_create_blog_posts_table;
mod m20250801_000008_create_monologue_likes_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_000001_create_profiles_table::Migration),
            Box::new(m20250801_000002_create_skills_table::Migration),
            Box::new(m20250801_000003_create_experiences_table::Migration),
            Box::new(m20250801_000004_create_code_categories_table::Migration),
            Box::new(m20250801_000005_create_monologues_table::Migration),
            Box::new(m20250801_000006_create_url_previews_table::Migration),
            Box::new(m20250801_000007_create_blog_posts_table::Migration),
            Box::new(m20250801_000008_create_monologue_likes_table::Migration),
        ]
    }
}

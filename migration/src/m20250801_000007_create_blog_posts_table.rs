use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlogPosts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BlogPosts::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(BlogPosts::Title).string_len(500).not_null())
                    .col(
                        ColumnDef::new(BlogPosts::Slug)
                            .string_len(500)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(BlogPosts::Excerpt).text())
                    .col(ColumnDef::new(BlogPosts::Content).text().not_null())
                    .col(ColumnDef::new(BlogPosts::CoverImageUrl).string_len(2048))
                    .col(
                        ColumnDef::new(BlogPosts::Tags)
                            .array(ColumnType::Text)
                            .not_null()
                            .default(Expr::cust("'{}'::text[]")),
                    )
                    .col(
                        ColumnDef::new(BlogPosts::Status)
                            .string_len(20)
                            .not_null()
                            .default("DRAFT"),
                    )
                    .col(ColumnDef::new(BlogPosts::SeoTitle).string_len(500))
                    .col(ColumnDef::new(BlogPosts::SeoDescription).text())
                    .col(ColumnDef::new(BlogPosts::PublishedAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(BlogPosts::LikeCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(BlogPosts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(BlogPosts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE blog_posts
                ADD CONSTRAINT chk_blog_posts_status
                CHECK (status IN ('DRAFT', 'PUBLISHED', 'ARCHIVED'));

                CREATE INDEX IF NOT EXISTS idx_blog_posts_status_published_at
                ON blog_posts (status, published_at DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BlogPosts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BlogPosts {
    Table,
    Id,
    Title,
    Slug,
    Excerpt,
    Content,
    CoverImageUrl,
    Tags,
    Status,
    SeoTitle,
    SeoDescription,
    PublishedAt,
    LikeCount,
    CreatedAt,
    UpdatedAt,
}

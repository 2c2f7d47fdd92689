use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Monologues::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Monologues::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Monologues::Content).text().not_null())
                    .col(
                        ColumnDef::new(Monologues::ContentType)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Monologues::CodeLanguage).string_len(50))
                    .col(ColumnDef::new(Monologues::CodeSnippet).text())
                    .col(ColumnDef::new(Monologues::CodeCategoryId).uuid())
                    .col(ColumnDef::new(Monologues::Difficulty).string_len(20))
                    .col(
                        ColumnDef::new(Monologues::Tags)
                            .array(ColumnType::Text)
                            .not_null()
                            .default(Expr::cust("'{}'::text[]")),
                    )
                    .col(ColumnDef::new(Monologues::Url).string_len(2048))
                    .col(ColumnDef::new(Monologues::Series).string_len(255))
                    .col(ColumnDef::new(Monologues::Category).string_len(255))
                    .col(
                        ColumnDef::new(Monologues::IsPublished)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Monologues::PublishedAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Monologues::LikeCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Monologues::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Monologues::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_monologues_code_category_id")
                            .from(Monologues::Table, Monologues::CodeCategoryId)
                            .to(CodeCategories::Table, CodeCategories::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE monologues
                ADD CONSTRAINT chk_monologues_content_type
                CHECK (content_type IN ('POST', 'CODE', 'IMAGE', 'URL_PREVIEW', 'BLOG'));

                ALTER TABLE monologues
                ADD CONSTRAINT chk_monologues_difficulty
                CHECK (difficulty IS NULL OR difficulty IN ('BEGINNER', 'INTERMEDIATE', 'ADVANCED'));

                CREATE INDEX IF NOT EXISTS idx_monologues_published
                ON monologues (is_published, published_at DESC);

                CREATE INDEX IF NOT EXISTS idx_monologues_tags
                ON monologues USING GIN (tags);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Monologues::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Monologues {
    Table,
    Id,
    Content,
    ContentType,
    CodeLanguage,
    CodeSnippet,
    CodeCategoryId,
    Difficulty,
    Tags,
    Url,
    Series,
    Category,
    IsPublished,
    PublishedAt,
    LikeCount,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CodeCategories {
    Table,
    Id,
}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UrlPreviews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UrlPreviews::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(UrlPreviews::MonologueId).uuid().not_null())
                    .col(ColumnDef::new(UrlPreviews::Title).string_len(500).not_null())
                    .col(ColumnDef::new(UrlPreviews::Description).text())
                    .col(ColumnDef::new(UrlPreviews::ImageUrl).string_len(2048))
                    .col(ColumnDef::new(UrlPreviews::SiteName).string_len(200))
                    .col(ColumnDef::new(UrlPreviews::Url).string_len(2048).not_null())
                    .col(ColumnDef::new(UrlPreviews::Favicon).string_len(2048))
                    .col(
                        ColumnDef::new(UrlPreviews::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_url_previews_monologue_id")
                            .from(UrlPreviews::Table, UrlPreviews::MonologueId)
                            .to(Monologues::Table, Monologues::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_url_previews_monologue_id
                ON url_previews (monologue_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UrlPreviews::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UrlPreviews {
    Table,
    Id,
    MonologueId,
    Title,
    Description,
    ImageUrl,
    SiteName,
    Url,
    Favicon,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Monologues {
    Table,
    Id,
}

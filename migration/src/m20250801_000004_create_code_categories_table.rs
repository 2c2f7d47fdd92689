use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CodeCategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CodeCategories::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(CodeCategories::Name)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CodeCategories::Slug)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(CodeCategories::Description).text())
                    .col(ColumnDef::new(CodeCategories::ParentId).uuid())
                    .col(ColumnDef::new(CodeCategories::Color).string_len(7))
                    .col(ColumnDef::new(CodeCategories::Icon).string_len(10))
                    .col(
                        ColumnDef::new(CodeCategories::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(CodeCategories::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_code_categories_parent_id")
                            .from(CodeCategories::Table, CodeCategories::ParentId)
                            .to(CodeCategories::Table, CodeCategories::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CodeCategories::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CodeCategories {
    Table,
    Id,
    Name,
    Slug,
    Description,
    ParentId,
    Color,
    Icon,
    CreatedAt,
    UpdatedAt,
}

use sea_orm_migration::prelude::*;

/// Per-visitor like records. Created for schema parity; the like counter
/// does not read or write it yet.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MonologueLikes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MonologueLikes::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(MonologueLikes::MonologueId).uuid().not_null())
                    .col(ColumnDef::new(MonologueLikes::UserIp).string_len(45))
                    .col(ColumnDef::new(MonologueLikes::UserId).uuid())
                    .col(
                        ColumnDef::new(MonologueLikes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_monologue_likes_monologue_id")
                            .from(MonologueLikes::Table, MonologueLikes::MonologueId)
                            .to(Monologues::Table, Monologues::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .name("uq_monologue_likes_monologue_ip")
                            .col(MonologueLikes::MonologueId)
                            .col(MonologueLikes::UserIp)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MonologueLikes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MonologueLikes {
    Table,
    Id,
    MonologueId,
    UserIp,
    UserId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Monologues {
    Table,
    Id,
}

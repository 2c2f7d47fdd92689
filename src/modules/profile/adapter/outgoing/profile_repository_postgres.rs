use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction, DbErr,
    EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait, UpdateMany,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::profile::adapter::outgoing::sea_orm_entity::{profiles, social_links};
use crate::profile::application::domain::entities::{
    NewProfile, Profile, ProfileChanges, SocialLink,
};
use crate::profile::application::ports::outgoing::{ProfileRepository, ProfileRepositoryError};
use crate::shared::persistence::{classify_db_err, ColumnChanges, StoreFailure};

#[derive(Clone)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn load_links<C: ConnectionTrait>(
        conn: &C,
        profile_id: Uuid,
    ) -> Result<Vec<SocialLink>, DbErr> {
        let rows = social_links::Entity::find()
            .filter(social_links::Column::ProfileId.eq(profile_id))
            .order_by_asc(social_links::Column::Position)
            .all(conn)
            .await?;

        Ok(rows.into_iter().map(link_to_domain).collect())
    }

    async fn insert_links(
        txn: &DatabaseTransaction,
        profile_id: Uuid,
        links: &[SocialLink],
        now: DateTime<FixedOffset>,
    ) -> Result<(), DbErr> {
        if links.is_empty() {
            return Ok(());
        }

        let models = links
            .iter()
            .enumerate()
            .map(|(position, link)| social_links::ActiveModel {
                id: Set(Uuid::new_v4()),
                profile_id: Set(profile_id),
                platform: Set(link.platform.clone()),
                url: Set(link.url.clone()),
                icon: Set(link.icon.clone()),
                position: Set(position as i32),
                created_at: Set(now),
            });

        social_links::Entity::insert_many(models)
            .exec_without_returning(txn)
            .await?;

        Ok(())
    }

    async fn create_in_txn(
        txn: &DatabaseTransaction,
        data: NewProfile,
    ) -> Result<Profile, DbErr> {
        let now = Utc::now().fixed_offset();

        let row = profiles::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            title: Set(data.title),
            bio: Set(data.bio),
            avatar_url: Set(data.avatar_url),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(txn)
        .await?;

        Self::insert_links(txn, row.id, &data.social_links, now).await?;

        Ok(model_to_domain(row, data.social_links))
    }

    async fn update_in_txn(
        txn: &DatabaseTransaction,
        id: Uuid,
        changes: ProfileChanges,
    ) -> Result<Option<Profile>, DbErr> {
        let now = Utc::now();
        let links = changes.social_links.clone();

        let Some(row) = update_query(id, changes, now)
            .exec_with_returning(txn)
            .await?
            .into_iter()
            .next()
        else {
            return Ok(None);
        };

        if let Some(links) = links {
            social_links::Entity::delete_many()
                .filter(social_links::Column::ProfileId.eq(id))
                .exec(txn)
                .await?;
            Self::insert_links(txn, id, &links, now.fixed_offset()).await?;
        }

        let links = Self::load_links(txn, id).await?;
        Ok(Some(model_to_domain(row, links)))
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn find_default(&self) -> Result<Profile, ProfileRepositoryError> {
        let row = profiles::Entity::find()
            .order_by_asc(profiles::Column::CreatedAt)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProfileRepositoryError::NotFound)?;

        let links = Self::load_links(&*self.db, row.id)
            .await
            .map_err(map_db_err)?;

        Ok(model_to_domain(row, links))
    }

    async fn create(&self, data: NewProfile) -> Result<Profile, ProfileRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        match Self::create_in_txn(&txn, data).await {
            Ok(profile) => {
                txn.commit().await.map_err(map_db_err)?;
                Ok(profile)
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(map_db_err(e))
            }
        }
    }

    async fn update(
        &self,
        id: Uuid,
        changes: ProfileChanges,
    ) -> Result<Profile, ProfileRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        match Self::update_in_txn(&txn, id, changes).await {
            Ok(Some(profile)) => {
                txn.commit().await.map_err(map_db_err)?;
                Ok(profile)
            }
            Ok(None) => {
                let _ = txn.rollback().await;
                Err(ProfileRepositoryError::NotFound)
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(map_db_err(e))
            }
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ProfileRepositoryError> {
        // social_links rows go with the profile (ON DELETE CASCADE)
        let result = profiles::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected > 0)
    }
}

fn update_query(
    id: Uuid,
    changes: ProfileChanges,
    now: DateTime<Utc>,
) -> UpdateMany<profiles::Entity> {
    let mut columns = ColumnChanges::<profiles::Entity>::new();
    columns
        .set_if(profiles::Column::Name, changes.name)
        .set_if(profiles::Column::Title, changes.title)
        .set_if(profiles::Column::Bio, changes.bio)
        .set_if(profiles::Column::AvatarUrl, changes.avatar_url)
        .set(profiles::Column::UpdatedAt, now.fixed_offset());

    columns
        .apply(profiles::Entity::update_many())
        .filter(profiles::Column::Id.eq(id))
}

fn link_to_domain(model: social_links::Model) -> SocialLink {
    SocialLink {
        platform: model.platform,
        url: model.url,
        icon: model.icon,
    }
}

fn model_to_domain(model: profiles::Model, social_links: Vec<SocialLink>) -> Profile {
    Profile {
        id: model.id,
        name: model.name,
        title: model.title,
        bio: model.bio,
        avatar_url: model.avatar_url,
        social_links,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> ProfileRepositoryError {
    match classify_db_err(&e) {
        StoreFailure::Unavailable(msg) => ProfileRepositoryError::StoreUnavailable(msg),
        StoreFailure::UniqueViolation(msg)
        | StoreFailure::ForeignKeyViolation(msg)
        | StoreFailure::Other(msg) => {
            ProfileRepositoryError::DatabaseError(msg)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, QueryTrait};

    fn profile_row(name: &str) -> profiles::Model {
        let now = Utc::now().fixed_offset();
        profiles::Model {
            id: Uuid::new_v4(),
            name: name.to_string(),
            title: Some("Engineer".to_string()),
            bio: None,
            avatar_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn link_row(profile_id: Uuid, platform: &str, position: i32) -> social_links::Model {
        social_links::Model {
            id: Uuid::new_v4(),
            profile_id,
            platform: platform.to_string(),
            url: format!("https://{platform}.example/ada"),
            icon: None,
            position,
            created_at: Utc::now().fixed_offset(),
        }
    }

    fn exec(rows: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected: rows,
        }
    }

    #[tokio::test]
    async fn test_find_default_attaches_links() {
        let row = profile_row("Ada");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row.clone()]])
            .append_query_results(vec![vec![
                link_row(row.id, "github", 0),
                link_row(row.id, "mastodon", 1),
            ]])
            .into_connection();

        let repo = ProfileRepositoryPostgres::new(Arc::new(db));
        let profile = repo.find_default().await.unwrap();

        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.social_links.len(), 2);
        assert_eq!(profile.social_links[1].platform, "mastodon");
    }

    #[tokio::test]
    async fn test_find_default_empty_store_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<profiles::Model>::new()])
            .into_connection();

        let repo = ProfileRepositoryPostgres::new(Arc::new(db));

        assert_eq!(
            repo.find_default().await.unwrap_err(),
            ProfileRepositoryError::NotFound
        );
    }

    #[tokio::test]
    async fn test_update_replaces_links() {
        let row = profile_row("Ada");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row.clone()]])
            .append_exec_results(vec![exec(2), exec(1)])
            .append_query_results(vec![vec![link_row(row.id, "bluesky", 0)]])
            .into_connection();

        let repo = ProfileRepositoryPostgres::new(Arc::new(db));
        let profile = repo
            .update(
                row.id,
                ProfileChanges {
                    social_links: Some(vec![SocialLink {
                        platform: "bluesky".to_string(),
                        url: "https://bluesky.example/ada".to_string(),
                        icon: None,
                    }]),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(profile.social_links.len(), 1);
        assert_eq!(profile.social_links[0].platform, "bluesky");
    }

    #[tokio::test]
    async fn test_update_missing_profile_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<profiles::Model>::new()])
            .into_connection();

        let repo = ProfileRepositoryPostgres::new(Arc::new(db));
        let result = repo.update(Uuid::new_v4(), ProfileChanges::default()).await;

        assert_eq!(result.unwrap_err(), ProfileRepositoryError::NotFound);
    }

    #[test]
    fn test_update_clears_only_nulled_columns() {
        let changes = ProfileChanges {
            bio: Some(None),
            ..Default::default()
        };
        let sql = update_query(Uuid::nil(), changes, Utc::now())
            .build(DatabaseBackend::Postgres)
            .to_string();

        let set_clause = sql.split(" WHERE ").next().unwrap_or_default();
        assert!(set_clause.contains(r#""bio" = NULL"#), "{sql}");
        assert!(!set_clause.contains(r#""name""#), "{sql}");
        assert!(!set_clause.contains(r#""avatar_url""#), "{sql}");
    }
}

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, UpdateMany,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::shared::persistence::{classify_db_err, ColumnChanges, StoreFailure};
use crate::skill::adapter::outgoing::sea_orm_entity::skills::{
    self, ActiveModel, Column, Entity,
};
use crate::skill::application::domain::entities::{NewSkill, Skill, SkillChanges};
use crate::skill::application::ports::outgoing::{SkillRepository, SkillRepositoryError};

#[derive(Clone)]
pub struct SkillRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SkillRepository for SkillRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Skill>, SkillRepositoryError> {
        let rows = Entity::find()
            .order_by_asc(Column::DisplayOrder)
            .order_by_asc(Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_domain).collect())
    }

    async fn create(&self, data: NewSkill) -> Result<Skill, SkillRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            category: Set(data.category),
            level: Set(data.level),
            icon_url: Set(data.icon_url),
            display_order: Set(data.display_order),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let row = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_domain(row))
    }

    async fn update(&self, id: Uuid, changes: SkillChanges) -> Result<Skill, SkillRepositoryError> {
        let rows = update_query(id, changes, Utc::now())
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter()
            .next()
            .map(model_to_domain)
            .ok_or(SkillRepositoryError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, SkillRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected > 0)
    }
}

fn update_query(id: Uuid, changes: SkillChanges, now: DateTime<Utc>) -> UpdateMany<Entity> {
    let mut columns = ColumnChanges::<Entity>::new();
    columns
        .set_if(Column::Name, changes.name)
        .set_if(Column::Category, changes.category)
        .set_if(Column::Level, changes.level)
        .set_if(Column::IconUrl, changes.icon_url)
        .set_if(Column::DisplayOrder, changes.display_order)
        .set(Column::UpdatedAt, now.fixed_offset());

    columns
        .apply(Entity::update_many())
        .filter(Column::Id.eq(id))
}

fn model_to_domain(model: skills::Model) -> Skill {
    Skill {
        id: model.id,
        name: model.name,
        category: model.category,
        level: model.level,
        icon_url: model.icon_url,
        display_order: model.display_order,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> SkillRepositoryError {
    match classify_db_err(&e) {
        StoreFailure::Unavailable(msg) => SkillRepositoryError::StoreUnavailable(msg),
        StoreFailure::UniqueViolation(msg)
        | StoreFailure::ForeignKeyViolation(msg)
        | StoreFailure::Other(msg) => {
            SkillRepositoryError::DatabaseError(msg)
        }
    }
}

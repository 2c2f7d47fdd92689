use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, UpdateMany,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::experience::adapter::outgoing::sea_orm_entity::experiences::{
    self, ActiveModel, Column, Entity,
};
use crate::experience::application::domain::entities::{
    Experience, ExperienceChanges, NewExperience,
};
use crate::experience::application::ports::outgoing::{
    ExperienceRepository, ExperienceRepositoryError,
};
use crate::shared::persistence::{classify_db_err, ColumnChanges, StoreFailure};

#[derive(Clone)]
pub struct ExperienceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExperienceRepository for ExperienceRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Experience>, ExperienceRepositoryError> {
        let rows = Entity::find()
            .order_by_desc(Column::IsCurrent)
            .order_by_desc(Column::StartDate)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_domain).collect())
    }

    async fn create(&self, data: NewExperience) -> Result<Experience, ExperienceRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            company: Set(data.company),
            position: Set(data.position),
            description: Set(data.description),
            start_date: Set(data.start_date),
            end_date: Set(data.end_date),
            is_current: Set(data.is_current),
            technologies: Set(data.technologies),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let row = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(model_to_domain(row))
    }

    async fn update(
        &self,
        id: Uuid,
        changes: ExperienceChanges,
    ) -> Result<Experience, ExperienceRepositoryError> {
        let rows = update_query(id, changes, Utc::now())
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter()
            .next()
            .map(model_to_domain)
            .ok_or(ExperienceRepositoryError::NotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ExperienceRepositoryError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected > 0)
    }
}

fn update_query(id: Uuid, changes: ExperienceChanges, now: DateTime<Utc>) -> UpdateMany<Entity> {
    let mut columns = ColumnChanges::<Entity>::new();
    columns
        .set_if(Column::Company, changes.company)
        .set_if(Column::Position, changes.position)
        .set_if(Column::Description, changes.description)
        .set_if(Column::StartDate, changes.start_date)
        .set_if(Column::EndDate, changes.end_date)
        .set_if(Column::IsCurrent, changes.is_current)
        .set_if(Column::Technologies, changes.technologies)
        .set(Column::UpdatedAt, now.fixed_offset());

    columns
        .apply(Entity::update_many())
        .filter(Column::Id.eq(id))
}

fn model_to_domain(model: experiences::Model) -> Experience {
    Experience {
        id: model.id,
        company: model.company,
        position: model.position,
        description: model.description,
        start_date: model.start_date,
        end_date: model.end_date,
        is_current: model.is_current,
        technologies: model.technologies,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> ExperienceRepositoryError {
    match classify_db_err(&e) {
        StoreFailure::Unavailable(msg) => ExperienceRepositoryError::StoreUnavailable(msg),
        StoreFailure::UniqueViolation(msg)
        | StoreFailure::ForeignKeyViolation(msg)
        | StoreFailure::Other(msg) => {
            ExperienceRepositoryError::DatabaseError(msg)
        }
    }
}

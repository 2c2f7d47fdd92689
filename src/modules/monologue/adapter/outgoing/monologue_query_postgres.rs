use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgBinOper;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Select,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::code_category::adapter::outgoing::code_category_repository_postgres::model_to_domain as category_to_domain;
use crate::code_category::adapter::outgoing::sea_orm_entity::code_categories;
use crate::code_category::application::domain::entities::CodeCategory;
use crate::link_preview::adapter::outgoing::sea_orm_entity::url_previews;
use crate::link_preview::adapter::outgoing::url_preview_repository_postgres::model_to_domain as preview_to_domain;
use crate::link_preview::application::domain::entities::UrlPreview;
use crate::monologue::adapter::outgoing::monologue_repository_postgres::model_to_domain;
use crate::monologue::adapter::outgoing::sea_orm_entity::monologues::{self, Column, Entity};
use crate::monologue::application::domain::entities::{Monologue, MonologueFilter, MonologuePage};
use crate::monologue::application::ports::outgoing::{MonologueQuery, MonologueQueryError};
use crate::shared::persistence::{classify_db_err, StoreFailure};
use crate::shared::visibility::Visibility;

#[derive(Clone)]
pub struct MonologueQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MonologueQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Fills in `code_category` and `url_preview` with one query each.
    async fn embed(
        &self,
        rows: Vec<monologues::Model>,
    ) -> Result<Vec<Monologue>, MonologueQueryError> {
        let mut monologues = rows
            .into_iter()
            .map(|row| model_to_domain(row).map_err(MonologueQueryError::DatabaseError))
            .collect::<Result<Vec<_>, _>>()?;

        if monologues.is_empty() {
            return Ok(monologues);
        }

        let category_ids: HashSet<Uuid> =
            monologues.iter().filter_map(|m| m.code_category_id).collect();

        let categories: HashMap<Uuid, CodeCategory> = if category_ids.is_empty() {
            HashMap::new()
        } else {
            code_categories::Entity::find()
                .filter(code_categories::Column::Id.is_in(category_ids))
                .all(&*self.db)
                .await
                .map_err(map_db_err)?
                .into_iter()
                .map(category_to_domain)
                .map(|c| (c.id, c))
                .collect()
        };

        let ids: Vec<Uuid> = monologues.iter().map(|m| m.id).collect();
        let mut previews: HashMap<Uuid, UrlPreview> = HashMap::new();
        for row in url_previews::Entity::find()
            .filter(url_previews::Column::MonologueId.is_in(ids))
            .order_by_desc(url_previews::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
        {
            previews
                .entry(row.monologue_id)
                .or_insert_with(|| preview_to_domain(row));
        }

        for monologue in &mut monologues {
            monologue.code_category = monologue
                .code_category_id
                .and_then(|id| categories.get(&id).cloned());
            monologue.url_preview = previews.remove(&monologue.id);
        }

        Ok(monologues)
    }
}

fn visible(query: Select<Entity>, visibility: Visibility) -> Select<Entity> {
    match visibility {
        Visibility::Public => query.filter(Column::IsPublished.eq(true)),
        Visibility::Admin => query,
    }
}

fn filtered(filter: &MonologueFilter, visibility: Visibility) -> Select<Entity> {
    let mut query = visible(Entity::find(), visibility);

    if let Some(category_id) = filter.category_id {
        query = query.filter(Column::CodeCategoryId.eq(category_id));
    }
    if let Some(difficulty) = filter.difficulty {
        query = query.filter(Column::Difficulty.eq(difficulty.as_str()));
    }
    if !filter.tags.is_empty() {
        query = query.filter(
            Expr::col((Entity, Column::Tags))
                .binary(PgBinOper::Overlap, Expr::val(filter.tags.clone())),
        );
    }

    query
}

fn page_query(filter: &MonologueFilter, visibility: Visibility) -> Select<Entity> {
    let query = filtered(filter, visibility);
    let query = match visibility {
        Visibility::Public => query.order_by_desc(Column::PublishedAt),
        Visibility::Admin => query.order_by_desc(Column::CreatedAt),
    };

    query.offset(filter.offset).limit(filter.limit)
}

#[async_trait]
impl MonologueQuery for MonologueQueryPostgres {
    async fn list(
        &self,
        filter: &MonologueFilter,
        visibility: Visibility,
    ) -> Result<MonologuePage, MonologueQueryError> {
        let total_count = filtered(filter, visibility)
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        let rows = page_query(filter, visibility)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let nodes = self.embed(rows).await?;
        Ok(MonologuePage::new(nodes, total_count, filter))
    }

    async fn find_by_id(
        &self,
        id: Uuid,
        visibility: Visibility,
    ) -> Result<Monologue, MonologueQueryError> {
        let row = visible(Entity::find_by_id(id), visibility)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(MonologueQueryError::NotFound)?;

        self.embed(vec![row])
            .await?
            .pop()
            .ok_or(MonologueQueryError::NotFound)
    }
}

fn map_db_err(e: DbErr) -> MonologueQueryError {
    match classify_db_err(&e) {
        StoreFailure::Unavailable(msg) => MonologueQueryError::StoreUnavailable(msg),
        StoreFailure::UniqueViolation(msg)
        | StoreFailure::ForeignKeyViolation(msg)
        | StoreFailure::Other(msg) => {
            MonologueQueryError::DatabaseError(msg)
        }
    }
}

//! Helpers shared by the sea-orm adapters: the partial-update builder and
//! the one place `DbErr` is classified.

use sea_orm::sea_query::{Expr, Func, IntoColumnRef, SimpleExpr};
use sea_orm::{DbErr, EntityTrait, SqlErr, UpdateMany, Value};

use crate::shared::publication::PublishedAtChange;

//
// ──────────────────────────────────────────────────────────
// Partial update builder
// ──────────────────────────────────────────────────────────
//

/// Accumulates `(column, expression)` pairs and folds them into a single
/// parameterized `UPDATE ... SET` statement. Only columns that were pushed
/// end up in the statement.
pub struct ColumnChanges<E: EntityTrait> {
    changes: Vec<(E::Column, SimpleExpr)>,
}

impl<E: EntityTrait> Default for ColumnChanges<E> {
    fn default() -> Self {
        Self {
            changes: Vec::new(),
        }
    }
}

impl<E: EntityTrait> ColumnChanges<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set<V: Into<Value>>(&mut self, column: E::Column, value: V) -> &mut Self {
        self.changes.push((column, SimpleExpr::Value(value.into())));
        self
    }

    /// Pushes the column only when a value is present.
    pub fn set_if<V: Into<Value>>(&mut self, column: E::Column, value: Option<V>) -> &mut Self {
        if let Some(v) = value {
            self.set(column, v);
        }
        self
    }

    pub fn set_expr(&mut self, column: E::Column, expr: SimpleExpr) -> &mut Self {
        self.changes.push((column, expr));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn apply(self, update: UpdateMany<E>) -> UpdateMany<E> {
        self.changes
            .into_iter()
            .fold(update, |stmt, (column, expr)| stmt.col_expr(column, expr))
    }
}

/// SQL for a `published_at` transition. The sticky variant is evaluated by
/// the store so concurrent publishes cannot both win.
pub fn published_at_expr<C>(column: C, change: PublishedAtChange) -> SimpleExpr
where
    C: IntoColumnRef,
{
    match change {
        PublishedAtChange::StampIfUnset(now) => Func::coalesce([
            Expr::col(column).into(),
            SimpleExpr::Value(now.fixed_offset().into()),
        ])
        .into(),
        PublishedAtChange::Stamp(now) => SimpleExpr::Value(now.fixed_offset().into()),
        PublishedAtChange::Clear => {
            SimpleExpr::Value(Option::<chrono::DateTime<chrono::FixedOffset>>::None.into())
        }
    }
}

/// `COALESCE(column, 0) + 1`
pub fn increment_expr<C>(column: C) -> SimpleExpr
where
    C: IntoColumnRef,
{
    Expr::expr(Func::coalesce([Expr::col(column).into(), Expr::val(0).into()])).add(1)
}

//
// ──────────────────────────────────────────────────────────
// Error classification
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreFailure {
    /// Pool exhausted, connection refused or dropped.
    Unavailable(String),
    UniqueViolation(String),
    /// A referenced row (category, parent) does not exist.
    ForeignKeyViolation(String),
    Other(String),
}

pub fn classify_db_err(err: &DbErr) -> StoreFailure {
    match err {
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => StoreFailure::Unavailable(err.to_string()),
        _ => {
            match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(msg)) => {
                    return StoreFailure::UniqueViolation(msg)
                }
                Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                    return StoreFailure::ForeignKeyViolation(msg)
                }
                _ => {}
            }

            let msg = err.to_string();
            let lower = msg.to_lowercase();
            if lower.contains("foreign key") || lower.contains("23503") {
                StoreFailure::ForeignKeyViolation(msg)
            } else if lower.contains("duplicate") || lower.contains("unique") || lower.contains("23505") {
                StoreFailure::UniqueViolation(msg)
            } else {
                StoreFailure::Other(msg)
            }
        }
    }
}

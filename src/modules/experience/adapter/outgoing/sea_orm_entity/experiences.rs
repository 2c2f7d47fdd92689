use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "experiences")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    pub company: String,

    pub position: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    // YYYY-MM or YYYY-MM-DD
    pub start_date: String,

    #[sea_orm(nullable)]
    pub end_date: Option<String>,

    pub is_current: bool,

    // text[]
    pub technologies: Vec<String>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

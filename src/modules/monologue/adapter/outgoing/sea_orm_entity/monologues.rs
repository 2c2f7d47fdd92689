use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "monologues")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub content: String,

    // POST | CODE | IMAGE | URL_PREVIEW | BLOG
    pub content_type: String,

    #[sea_orm(nullable)]
    pub code_language: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub code_snippet: Option<String>,

    #[sea_orm(column_type = "Uuid", nullable)]
    pub code_category_id: Option<Uuid>,

    #[sea_orm(nullable)]
    pub difficulty: Option<String>,

    pub tags: Vec<String>,

    #[sea_orm(nullable)]
    pub url: Option<String>,

    #[sea_orm(nullable)]
    pub series: Option<String>,

    #[sea_orm(nullable)]
    pub category: Option<String>,

    pub is_published: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone", nullable)]
    pub published_at: Option<DateTimeWithTimeZone>,

    pub like_count: i32,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

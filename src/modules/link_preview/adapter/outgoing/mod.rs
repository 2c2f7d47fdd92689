pub mod placeholder_preview_generator;
pub mod sea_orm_entity;
pub mod url_preview_repository_postgres;

pub use placeholder_preview_generator::PlaceholderPreviewGenerator;
pub use url_preview_repository_postgres::UrlPreviewRepositoryPostgres;

pub mod monologue_query_postgres;
pub mod monologue_repository_postgres;
pub mod sea_orm_entity;

pub use monologue_query_postgres::MonologueQueryPostgres;
pub use monologue_repository_postgres::MonologueRepositoryPostgres;

pub mod monologue_query;
pub mod monologue_repository;

pub use monologue_query::{MonologueQuery, MonologueQueryError};
pub use monologue_repository::{MonologueRepository, MonologueRepositoryError};

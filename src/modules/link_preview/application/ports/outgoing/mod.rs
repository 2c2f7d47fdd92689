pub mod link_preview_generator;
pub mod url_preview_repository;

pub use link_preview_generator::{LinkPreviewError, LinkPreviewGenerator};
pub use url_preview_repository::{UrlPreviewRepository, UrlPreviewRepositoryError};

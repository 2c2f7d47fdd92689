pub mod related_content_service;

pub use related_content_service::RelatedContentService;

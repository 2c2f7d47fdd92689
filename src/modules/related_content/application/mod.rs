pub mod domain;
pub mod ports;
pub mod related_content_use_cases;
pub mod service;

pub use related_content_use_cases::RelatedContentUseCases;

pub mod domain;
pub mod link_preview_use_cases;
pub mod ports;
pub mod service;

pub use link_preview_use_cases::LinkPreviewUseCases;

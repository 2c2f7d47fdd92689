pub mod generate_link_preview_service;
pub mod preview_refresher;

pub use generate_link_preview_service::GenerateLinkPreviewService;
pub use preview_refresher::PreviewRefresher;

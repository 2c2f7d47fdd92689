mod generate_link_preview;

pub use generate_link_preview::GenerateLinkPreviewUseCase;

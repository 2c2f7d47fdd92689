mod get_related_content;

pub use get_related_content::{GetRelatedContentUseCase, RelatedContentError};

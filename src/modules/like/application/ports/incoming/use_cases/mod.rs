mod like_content;
mod like_error;

pub use like_content::{LikeBlogPostUseCase, LikeMonologueUseCase};
pub use like_error::LikeError;
